//! Use-Case: Verschieben der Selektion per Gruppen-Drag.
//!
//! Während des Drags werden angehängte Connections transient orthogonal
//! gehalten. Beim Loslassen entstehen Verschiebung und Joint-Bereinigung als
//! ein gemeinsamer Undo-Schritt.

use crate::app::commands::{builders, CompoundCommand};
use crate::app::gesture::{GestureKind, GestureOwner, PointerPhase};
use crate::app::selection::GroupDrag;
use crate::app::state::ActiveMove;
use crate::app::EditorState;
use crate::core::{
    ConnectionId, ConnectorId, ConnectorPositionProvider, GraphDocument, JointId, PropertyValue,
    Selectable,
};
use crate::routing::{
    align_endpoints, alignment_targets, constrain_joint_move, path_points, redundant_joints,
    snap_to_targets, source_is_horizontal, AlignmentTargets,
};
use glam::Vec2;

/// Startet das Verschieben mit `master` als Griff.
///
/// Nur selektierte, ziehbare Elemente können Master sein.
pub fn begin_move(state: &mut EditorState, master: Selectable, position: Vec2) {
    if !master.is_draggable() || !state.selection.is_selected(master) {
        return;
    }
    let owner = GestureOwner::Element(master);
    if !state
        .gestures
        .activate(GestureKind::Move, PointerPhase::Pressed, owner)
    {
        log::debug!("Verschieben abgelehnt: andere Geste aktiv");
        return;
    }
    let Some(mut drag) = GroupDrag::begin(&state.document, &state.selection, master) else {
        state.gestures.finish(GestureKind::Move, owner);
        return;
    };

    let connections = affected_connections(&state.document, &drag);
    for connection in &connections {
        let joints = state
            .document
            .connection(*connection)
            .map(|c| c.joints.clone())
            .unwrap_or_default();
        for joint in joints {
            drag.track(&state.document, joint.into());
        }
    }
    let grab_offset = position - drag.master_start();
    state.active_move = Some(ActiveMove {
        drag,
        grab_offset,
        connections,
    });
}

/// Zieht die Gruppe zur Zeigerposition.
///
/// Ist der Master ein Joint, rastet er auf Ausrichtungs-Hilfslinien ein.
pub fn update_move(state: &mut EditorState, position: Vec2) {
    let Some(active) = state.active_move.as_mut() else {
        return;
    };
    let doc = &mut state.document;
    let positions = state.positions.as_ref();
    let mut desired = position - active.grab_offset;

    state.guides = AlignmentTargets::default();
    if let Selectable::Joint(joint) = active.drag.master() {
        if let Some(targets) = joint_guides(doc, positions, &active.drag, joint) {
            let threshold = state
                .view
                .document_per_pixel(state.options.alignment_snap_threshold);
            desired = snap_to_targets(desired, &targets, threshold);
            state.guides = targets;
        }
    }

    active.drag.drag_to(doc, desired);
    for connection in &active.connections {
        follow_connection(doc, positions, &active.drag, *connection);
    }
}

/// Übernimmt die Endpositionen als ein Command.
pub fn end_move(state: &mut EditorState) {
    let Some(active) = state.active_move.take() else {
        return;
    };
    let owner = active.owner();
    state.guides = AlignmentTargets::default();

    // Bereinigung auf der End-Geometrie bestimmen, bevor zurückgesetzt wird
    let cleanups: Vec<(ConnectionId, Vec<usize>)> = active
        .connections
        .iter()
        .filter_map(|connection| {
            let points = path_points(&state.document, state.positions.as_ref(), *connection)?;
            let redundant = redundant_joints(&points);
            (!redundant.is_empty()).then_some((*connection, redundant))
        })
        .collect();
    let moves = active.drag.finish(&mut state.document);

    let mut compound = CompoundCommand::new("Selektion verschieben");
    if let Some(command) = builders::move_elements(&state.document, &moves) {
        compound.push(command);
    }
    for (connection, indices) in &cleanups {
        if let Some(command) = builders::remove_joints(&state.document, *connection, indices) {
            compound.push(command);
        }
    }
    if !compound.is_empty() && state.history.execute(&mut state.document, Box::new(compound)) {
        log::info!("{} Elemente verschoben", moves.len());
    }
    state.gestures.finish(GestureKind::Move, owner);
    state.selection.prune(&state.document);
}

/// Bricht das Verschieben ab und stellt die Startpositionen wieder her.
pub fn cancel_move(state: &mut EditorState) {
    if let Some(active) = state.active_move.take() {
        let owner = active.owner();
        active.drag.cancel(&mut state.document);
        state.gestures.release_orphaned(owner);
        state.guides = AlignmentTargets::default();
    }
}

/// Connections an bewegten Nodes oder mit bewegten Joints (ohne Duplikate)
fn affected_connections(doc: &GraphDocument, drag: &GroupDrag) -> Vec<ConnectionId> {
    let mut result: Vec<ConnectionId> = Vec::new();
    for item in drag.moving_items() {
        let connections = match item {
            Selectable::Node(node) => doc.connections_of_node(node),
            Selectable::Joint(joint) => doc.joint(joint).map(|j| vec![j.connection]).unwrap_or_default(),
            _ => Vec::new(),
        };
        for connection in connections {
            if !result.contains(&connection) {
                result.push(connection);
            }
        }
    }
    result
}

/// Punktindizes der mitgezogenen Joints einer Connection
fn moving_points(doc: &GraphDocument, drag: &GroupDrag, connection: ConnectionId) -> Vec<usize> {
    doc.connection(connection)
        .map(|c| {
            c.joints
                .iter()
                .enumerate()
                .filter(|(_, joint)| drag.is_moving(Selectable::Joint(**joint)))
                .map(|(i, _)| i + 1)
                .collect()
        })
        .unwrap_or_default()
}

fn anchor_moving(doc: &GraphDocument, drag: &GroupDrag, connector: ConnectorId) -> bool {
    doc.parent_of(connector)
        .is_some_and(|node| drag.is_moving(Selectable::Node(node)))
}

/// Hilfslinien für den gezogenen Joint
fn joint_guides(
    doc: &GraphDocument,
    positions: &dyn ConnectorPositionProvider,
    drag: &GroupDrag,
    joint: JointId,
) -> Option<AlignmentTargets> {
    let connection = doc.connection(doc.joint(joint)?.connection)?;
    let index = connection.joints.iter().position(|j| *j == joint)? + 1;
    let source_horizontal = source_is_horizontal(doc, connection.id)?;
    let points = path_points(doc, positions, connection.id)?;
    let last = points.len() - 1;

    let is_moving = |i: usize| {
        if i == 0 {
            anchor_moving(doc, drag, connection.source())
        } else if i == last {
            anchor_moving(doc, drag, connection.target())
        } else {
            connection
                .joints
                .get(i - 1)
                .is_some_and(|j| drag.is_moving(Selectable::Joint(*j)))
        }
    };
    Some(alignment_targets(&points, index, source_horizontal, is_moving))
}

/// Hält eine Connection nach dem Drag-Schritt orthogonal (transient).
fn follow_connection(
    doc: &mut GraphDocument,
    positions: &dyn ConnectorPositionProvider,
    drag: &GroupDrag,
    connection: ConnectionId,
) {
    let (Some(source_horizontal), Some(mut points)) = (
        source_is_horizontal(doc, connection),
        path_points(doc, positions, connection),
    ) else {
        return;
    };
    let moved = moving_points(doc, drag, connection);
    constrain_joint_move(&mut points, &moved, source_horizontal);
    align_endpoints(&mut points, source_horizontal, &moved);

    let joints = doc
        .connection(connection)
        .map(|c| c.joints.clone())
        .unwrap_or_default();
    for (i, joint) in joints.into_iter().enumerate() {
        let _ = doc.set_property(Selectable::Joint(joint), PropertyValue::Position(points[i + 1]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::builders::ConnectorSpec;

    /// Zwei Nodes, Connection A.out → B.in mit zwei Joints
    fn setup() -> (EditorState, Selectable, ConnectionId) {
        let mut state = EditorState::new();
        let specs = [
            ConnectorSpec::new("left-input", Vec2::new(0.0, 10.0), true),
            ConnectorSpec::new("right-output", Vec2::new(40.0, 10.0), true),
        ];
        let (a, a_conn, add_a) =
            builders::add_node(&mut state.document, "box", Vec2::new(0.0, 0.0), Vec2::new(40.0, 20.0), &specs);
        let (_, b_conn, add_b) = builders::add_node(
            &mut state.document,
            "box",
            Vec2::new(200.0, 100.0),
            Vec2::new(40.0, 20.0),
            &specs,
        );
        assert!(state.history.execute(&mut state.document, Box::new(add_a)));
        assert!(state.history.execute(&mut state.document, Box::new(add_b)));
        let (connection, add_c) = builders::add_connection(
            &mut state.document,
            "connection",
            a_conn[1],
            b_conn[0],
            "joint",
            &[Vec2::new(120.0, 10.0), Vec2::new(120.0, 110.0)],
        );
        assert!(state.history.execute(&mut state.document, Box::new(add_c)));
        (state, a.into(), connection)
    }

    #[test]
    fn moving_a_node_keeps_connection_orthogonal() {
        let (mut state, a, connection) = setup();
        state.selection.select(a);

        begin_move(&mut state, a, Vec2::new(10.0, 10.0));
        update_move(&mut state, Vec2::new(10.0, 40.0));

        // Erster Joint folgt dem Source-Connector auf der y-Achse
        let joints = state.document.joint_positions(connection).expect("Connection vorhanden");
        assert_eq!(joints[0], Vec2::new(120.0, 40.0));
        assert_eq!(joints[1], Vec2::new(120.0, 110.0));

        end_move(&mut state);
        assert!(!state.gestures.is_busy());
        assert_eq!(state.document.position_of(a), Some(Vec2::new(0.0, 30.0)));
        assert_eq!(
            state.document.joint_positions(connection),
            Some(vec![Vec2::new(120.0, 40.0), Vec2::new(120.0, 110.0)])
        );

        // Ein Undo nimmt Verschiebung und Joint-Nachführung gemeinsam zurück
        assert!(state.history.undo(&mut state.document));
        assert_eq!(state.document.position_of(a), Some(Vec2::ZERO));
        assert_eq!(
            state.document.joint_positions(connection),
            Some(vec![Vec2::new(120.0, 10.0), Vec2::new(120.0, 110.0)])
        );
    }

    #[test]
    fn dragged_joint_snaps_to_guides() {
        let (mut state, _, connection) = setup();
        let first = state.document.connection(connection).expect("Connection vorhanden").joints[0];
        let joint = Selectable::Joint(first);
        state.selection.select(joint);

        begin_move(&mut state, joint, Vec2::new(120.0, 10.0));
        // Knapp neben der x-Koordinate des Source-Connectors
        update_move(&mut state, Vec2::new(44.0, 60.0));

        assert!(state.guides.x.contains(&40.0));
        // Am Anker gibt der Joint auf der y-Achse nach, der Nachbar folgt auf x
        assert_eq!(state.document.position_of(joint), Some(Vec2::new(40.0, 10.0)));
        assert_eq!(
            state.document.joint_positions(connection),
            Some(vec![Vec2::new(40.0, 10.0), Vec2::new(40.0, 110.0)])
        );
        cancel_move(&mut state);
        assert_eq!(state.document.position_of(joint), Some(Vec2::new(120.0, 10.0)));
    }

    #[test]
    fn unselected_master_does_not_start() {
        let (mut state, a, _) = setup();
        begin_move(&mut state, a, Vec2::ZERO);
        assert!(state.active_move.is_none());
        assert!(!state.gestures.is_busy());
    }
}
