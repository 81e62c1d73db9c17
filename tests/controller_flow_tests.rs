use glam::Vec2;
use graph_editor_engine::app::commands::builders::ConnectorSpec;
use graph_editor_engine::{
    ConnectorId, EditorController, EditorIntent, EditorOptions, EditorState, NodeId,
    Selectable,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn box_connectors() -> Vec<ConnectorSpec> {
    vec![
        ConnectorSpec::new("left-input", Vec2::new(0.0, 50.0), true),
        ConnectorSpec::new("right-output", Vec2::new(150.0, 50.0), true),
    ]
}

/// Legt einen Node per Intent an und liefert ihn samt Connectors (input, output).
fn add_box(controller: &mut EditorController, state: &mut EditorState, pointer: Vec2) -> (NodeId, ConnectorId, ConnectorId) {
    controller
        .handle_intent(
            state,
            EditorIntent::AddNodeRequested {
                kind: "box".to_string(),
                pointer,
                connectors: box_connectors(),
            },
        )
        .expect("AddNodeRequested sollte ohne Fehler durchlaufen");
    let node = state.document.nodes().last().expect("Node sollte angelegt sein");
    (node.id, node.connectors[0], node.connectors[1])
}

#[test]
fn test_add_node_selects_node() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();

    let (node, _, _) = add_box(&mut controller, &mut state, Vec2::new(10.0, 20.0));

    assert_eq!(state.node_count(), 1);
    assert!(state.selection.is_selected(Selectable::Node(node)));
    let added = state.document.node(node).expect("Node vorhanden");
    assert_eq!(added.kind, "box");
    assert_eq!(added.position, Vec2::new(10.0, 20.0));
}

#[test]
fn test_connector_drag_creates_connection_with_undo_redo() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    let (_, _, a_out) = add_box(&mut controller, &mut state, Vec2::ZERO);
    let (_, b_in, _) = add_box(&mut controller, &mut state, Vec2::new(400.0, 200.0));

    for intent in [
        EditorIntent::ConnectorPressed { connector: a_out },
        EditorIntent::ConnectorDragged {
            pointer: Vec2::new(300.0, 150.0),
        },
        EditorIntent::ConnectorEntered { connector: b_in },
        EditorIntent::ConnectorReleased { over: Some(b_in) },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Connector-Drag sollte ohne Fehler durchlaufen");
    }

    assert_eq!(state.connection_count(), 1);
    let connection = state.document.connections().next().expect("Connection vorhanden");
    let id = connection.id;
    assert_eq!((connection.source(), connection.target()), (a_out, b_in));
    assert_eq!(state.document.joint_positions(id), Some(vec![]));
    assert!(!state.gestures.is_busy());

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert_eq!(state.connection_count(), 0);
    assert_eq!(state.node_count(), 2);

    controller
        .handle_intent(&mut state, EditorIntent::RedoRequested)
        .expect("Redo sollte ohne Fehler durchlaufen");
    assert_eq!(state.document.joint_positions(id), Some(vec![]));
    assert!(state.document.is_consistent());
}

#[test]
fn test_node_drag_is_scale_corrected() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    let (node, _, _) = add_box(&mut controller, &mut state, Vec2::ZERO);
    state.view.scale = 2.0;
    let depth = state.history.undo_depth();

    for intent in [
        EditorIntent::NodePressed {
            node,
            pointer: Vec2::new(10.0, 10.0),
            shortcut: false,
        },
        EditorIntent::NodeDragged {
            pointer: Vec2::new(110.0, 60.0),
        },
        EditorIntent::NodeReleased,
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Node-Drag sollte ohne Fehler durchlaufen");
    }

    // 100 x 50 Bildschirmpixel bei Zoom 2 entsprechen 50 x 25 Dokument-Einheiten
    assert_eq!(state.document.node(node).map(|n| n.position), Some(Vec2::new(50.0, 25.0)));
    assert_eq!(state.history.undo_depth(), depth + 1);
    assert!(!state.gestures.is_busy());
}

#[test]
fn test_marquee_then_delete_removes_only_enclosed_node() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    let (a, _, _) = add_box(&mut controller, &mut state, Vec2::ZERO);
    let (b, _, _) = add_box(&mut controller, &mut state, Vec2::new(400.0, 200.0));

    for intent in [
        EditorIntent::CanvasPressed {
            pointer: Vec2::new(380.0, 180.0),
            shortcut: false,
        },
        EditorIntent::CanvasDragged {
            pointer: Vec2::new(600.0, 350.0),
        },
        EditorIntent::CanvasReleased,
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Rahmen-Selektion sollte ohne Fehler durchlaufen");
    }
    assert_eq!(state.selection.items().collect::<Vec<_>>(), vec![Selectable::Node(b)]);

    controller
        .handle_intent(&mut state, EditorIntent::DeleteSelectedRequested)
        .expect("Löschen sollte ohne Fehler durchlaufen");
    assert!(state.document.node(a).is_some());
    assert!(state.document.node(b).is_none());

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert_eq!(state.node_count(), 2);
}

#[test]
fn test_undo_during_connector_drag_abandons_gesture() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    add_box(&mut controller, &mut state, Vec2::ZERO);
    let (_, _, b_out) = add_box(&mut controller, &mut state, Vec2::new(400.0, 200.0));

    controller
        .handle_intent(&mut state, EditorIntent::ConnectorPressed { connector: b_out })
        .expect("ConnectorPressed sollte ohne Fehler durchlaufen");
    assert!(state.tail().is_some());

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");

    assert!(state.tail().is_none());
    assert!(state.connector_drag.is_idle());
    assert!(!state.gestures.is_busy());
}

#[test]
fn test_cancel_gesture_restores_dragged_node() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    let (node, _, _) = add_box(&mut controller, &mut state, Vec2::new(100.0, 100.0));

    for intent in [
        EditorIntent::NodePressed {
            node,
            pointer: Vec2::new(120.0, 120.0),
            shortcut: false,
        },
        EditorIntent::NodeDragged {
            pointer: Vec2::new(300.0, 300.0),
        },
        EditorIntent::CancelGestureRequested,
        EditorIntent::NodeReleased,
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Abbruch sollte ohne Fehler durchlaufen");
    }

    assert_eq!(state.document.node(node).map(|n| n.position), Some(Vec2::new(100.0, 100.0)));
    assert!(!state.gestures.is_busy());
}

#[test]
fn test_pan_and_zoom_update_view() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();

    for intent in [
        EditorIntent::PanStarted,
        EditorIntent::PanDragged {
            delta: Vec2::new(100.0, 0.0),
        },
        EditorIntent::PanReleased,
        EditorIntent::ZoomScrolled {
            factor: 2.0,
            pointer: Vec2::ZERO,
        },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Ansicht sollte ohne Fehler aktualisiert werden");
    }

    assert_eq!(state.view.offset, Vec2::new(-100.0, 0.0));
    assert_eq!(state.view.scale, 2.0);
    assert!(!state.gestures.is_busy());
}

#[test]
fn test_invalid_options_are_reported_as_error() {
    init_logging();
    let mut controller = EditorController::new();
    let mut state = EditorState::new();
    let options = EditorOptions {
        node_min_size: -1.0,
        ..EditorOptions::default()
    };

    let result = controller.handle_intent(
        &mut state,
        EditorIntent::OptionsChanged {
            options: Box::new(options),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.options, EditorOptions::default());
}
