use glam::Vec2;
use graph_editor_engine::app::commands::builders::{self, ConnectorSpec};
use graph_editor_engine::app::commands::{AddElement, RemoveElement};
use graph_editor_engine::core::{GraphElement, Joint};
use graph_editor_engine::{
    CommandStack, CompoundCommand, ConnectionId, ConnectorId, EditCommand, GraphDocument, JointId,
    NodeId, Selectable,
};

fn specs() -> Vec<ConnectorSpec> {
    vec![
        ConnectorSpec::new("left-input", Vec2::new(0.0, 10.0), true),
        ConnectorSpec::new("right-output", Vec2::new(40.0, 10.0), true),
    ]
}

/// Zwei Nodes mit einer Connection A.out → B.in über zwei Joints.
fn two_connected_nodes(
    doc: &mut GraphDocument,
    history: &mut CommandStack,
) -> (NodeId, NodeId, Vec<ConnectorId>, ConnectionId) {
    let (a, a_conn, add_a) = builders::add_node(doc, "box", Vec2::ZERO, Vec2::new(40.0, 20.0), &specs());
    let (b, b_conn, add_b) =
        builders::add_node(doc, "box", Vec2::new(200.0, 100.0), Vec2::new(40.0, 20.0), &specs());
    assert!(history.execute(doc, Box::new(add_a)));
    assert!(history.execute(doc, Box::new(add_b)));
    let (connection, connect) = builders::add_connection(
        doc,
        "connection",
        a_conn[1],
        b_conn[0],
        "joint",
        &[Vec2::new(120.0, 10.0), Vec2::new(120.0, 110.0)],
    );
    assert!(history.execute(doc, Box::new(connect)));
    (a, b, vec![a_conn[1], b_conn[0]], connection)
}

#[test]
fn test_undo_redo_restores_identical_documents() {
    let mut doc = GraphDocument::default();
    let mut history = CommandStack::new_with_capacity(50);
    let (a, _, _, _) = two_connected_nodes(&mut doc, &mut history);
    let before = doc.clone();

    let moved = builders::move_elements(&doc, &[(Selectable::Node(a), Vec2::new(30.0, 40.0))])
        .expect("Verschiebung sollte einen Command liefern");
    assert!(history.execute(&mut doc, Box::new(moved)));
    let after = doc.clone();
    assert_ne!(before, after);

    assert!(history.undo(&mut doc));
    assert_eq!(doc, before);
    assert!(history.redo(&mut doc));
    assert_eq!(doc, after);
}

#[test]
fn test_compound_is_all_or_nothing() {
    let mut doc = GraphDocument::default();
    let mut history = CommandStack::new_with_capacity(50);
    let (_, _, _, connection) = two_connected_nodes(&mut doc, &mut history);
    let before = doc.clone();
    let depth = history.undo_depth();

    // Zweiter Schritt zielt auf ein nicht existierendes Element
    let joint = Joint::new(doc.allocate_joint_id(), connection, "joint", Vec2::new(60.0, 10.0));
    let compound = CompoundCommand::new("Teilweise gültig")
        .with(AddElement::new(GraphElement::Joint(joint)))
        .with(RemoveElement::new(JointId(9_999)));

    assert!(!compound.can_execute(&doc));
    assert!(!history.execute(&mut doc, Box::new(compound)));
    assert_eq!(doc, before);
    assert_eq!(history.undo_depth(), depth);
}

#[test]
fn test_node_removal_cascades_and_undo_restores_everything() {
    let mut doc = GraphDocument::default();
    let mut history = CommandStack::new_with_capacity(50);
    let (a, b, connectors, connection) = two_connected_nodes(&mut doc, &mut history);
    let before = doc.clone();

    let remove = builders::remove_nodes(&doc, &[a]).expect("Node A existiert");
    assert!(history.execute(&mut doc, Box::new(remove)));

    assert!(doc.node(a).is_none());
    assert!(doc.connector(connectors[0]).is_none());
    assert!(doc.connection(connection).is_none());
    assert_eq!(doc.joint_count(), 0);
    // Gegen-Connector bleibt, kennt die Connection aber nicht mehr
    let opposite = doc.connector(connectors[1]).expect("Connector an B bleibt");
    assert!(!opposite.is_connected());
    assert!(doc.node(b).is_some());
    assert!(doc.is_consistent());

    assert!(history.undo(&mut doc));
    assert_eq!(doc, before);
    assert!(doc.is_consistent());
    assert_eq!(
        doc.joint_positions(connection),
        Some(vec![Vec2::new(120.0, 10.0), Vec2::new(120.0, 110.0)])
    );
}

#[test]
fn test_connection_keeps_its_z_order_through_undo() {
    let mut doc = GraphDocument::default();
    let mut history = CommandStack::new_with_capacity(50);
    let (_, _, connectors, first) = two_connected_nodes(&mut doc, &mut history);
    let (second, connect) = builders::add_connection(&mut doc, "connection", connectors[0], connectors[1], "joint", &[]);
    assert!(history.execute(&mut doc, Box::new(connect)));
    assert_eq!(doc.connection_z_index(first), Some(0));
    assert_eq!(doc.connection_z_index(second), Some(1));

    assert!(history.execute(&mut doc, Box::new(builders::remove_connection(first))));
    assert_eq!(doc.connection_z_index(second), Some(0));

    assert!(history.undo(&mut doc));
    assert_eq!(doc.connection_z_index(first), Some(0));
    assert_eq!(doc.connection_z_index(second), Some(1));
}

#[test]
fn test_clear_document_is_one_undo_step() {
    let mut doc = GraphDocument::default();
    let mut history = CommandStack::new_with_capacity(50);
    two_connected_nodes(&mut doc, &mut history);
    let before = doc.clone();

    let clear = builders::clear_document(&doc).expect("Dokument ist nicht leer");
    assert!(history.execute(&mut doc, Box::new(clear)));
    assert!(doc.is_empty());
    assert_eq!(history.undo_label(), Some("Dokument leeren"));

    assert!(history.undo(&mut doc));
    assert_eq!(doc, before);
}
