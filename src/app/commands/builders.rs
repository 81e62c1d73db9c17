//! Command-Builder für alle Editier-Aktionen der Darstellungsschicht.
//!
//! Die Builder reservieren IDs im Dokument, verändern es aber nicht. Das
//! Ergebnis wird immer über den `CommandStack` ausgeführt.

use super::{AddElement, CompoundCommand, RemoveElement, SetProperty};
use crate::core::{
    Connection, ConnectionId, Connector, ConnectorId, GraphDocument, GraphElement, GraphNode,
    Joint, NodeId, PropertyValue, Selectable,
};
use glam::Vec2;

/// Beschreibung eines Connectors für [`add_node`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorSpec {
    /// Typ-Tag, z.B. `"left-input"`
    pub kind: String,
    /// Mittelpunkt relativ zum Node
    pub offset: Vec2,
    /// Detach-on-Drag-Flag
    pub detach_on_drag: bool,
}

impl ConnectorSpec {
    /// Connector-Beschreibung
    pub fn new(kind: impl Into<String>, offset: Vec2, detach_on_drag: bool) -> Self {
        Self {
            kind: kind.into(),
            offset,
            detach_on_drag,
        }
    }
}

/// Neuer Node samt Connectors als ein Command.
pub fn add_node(
    doc: &mut GraphDocument,
    kind: &str,
    position: Vec2,
    size: Vec2,
    connectors: &[ConnectorSpec],
) -> (NodeId, Vec<ConnectorId>, CompoundCommand) {
    let node_id = doc.allocate_node_id();
    let mut compound = CompoundCommand::new("Node hinzufügen").with(AddElement::new(
        GraphElement::Node(GraphNode::new(node_id, kind, position, size)),
    ));
    let mut connector_ids = Vec::with_capacity(connectors.len());
    for spec in connectors {
        let id = doc.allocate_connector_id();
        connector_ids.push(id);
        compound.push(AddElement::new(GraphElement::Connector(Connector::new(
            id,
            node_id,
            spec.kind.clone(),
            spec.offset,
            spec.detach_on_drag,
        ))));
    }
    (node_id, connector_ids, compound)
}

/// Alle an den Nodes hängenden Connections (ohne Duplikate, Dokument-Reihenfolge)
fn attached_connections(doc: &GraphDocument, nodes: &[NodeId]) -> Vec<ConnectionId> {
    let mut result: Vec<ConnectionId> = Vec::new();
    for node in nodes {
        for connection in doc.connections_of_node(*node) {
            if !result.contains(&connection) {
                result.push(connection);
            }
        }
    }
    result
}

/// Entfernt Nodes inklusive aller angehängten Connections.
///
/// Liefert `None`, wenn keiner der Nodes existiert.
pub fn remove_nodes(doc: &GraphDocument, nodes: &[NodeId]) -> Option<CompoundCommand> {
    let existing: Vec<NodeId> = nodes
        .iter()
        .copied()
        .filter(|id| doc.node(*id).is_some())
        .collect();
    if existing.is_empty() {
        return None;
    }
    let mut compound = CompoundCommand::new("Nodes entfernen");
    for connection in attached_connections(doc, &existing) {
        compound.push(RemoveElement::new(connection));
    }
    for node in existing {
        compound.push(RemoveElement::new(node));
    }
    Some(compound)
}

/// Leert das Dokument vollständig.
pub fn clear_document(doc: &GraphDocument) -> Option<CompoundCommand> {
    if doc.is_empty() {
        return None;
    }
    let mut compound = CompoundCommand::new("Dokument leeren");
    for connection in doc.connections() {
        compound.push(RemoveElement::new(connection.id));
    }
    for node in doc.nodes() {
        compound.push(RemoveElement::new(node.id));
    }
    for connector in doc.connectors().filter(|c| c.parent.is_none()) {
        compound.push(RemoveElement::new(connector.id));
    }
    Some(compound)
}

/// Entfernt alle Connectors (und deren Connections) der angegebenen Nodes.
pub fn clear_connectors(doc: &GraphDocument, nodes: &[NodeId]) -> Option<CompoundCommand> {
    let mut compound = CompoundCommand::new("Connectors entfernen");
    for connection in attached_connections(doc, nodes) {
        compound.push(RemoveElement::new(connection));
    }
    for node in nodes.iter().filter_map(|id| doc.node(*id)) {
        for connector in &node.connectors {
            compound.push(RemoveElement::new(*connector));
        }
    }
    (!compound.is_empty()).then_some(compound)
}

/// Neue Connection mit Joints an den angegebenen Positionen.
pub fn add_connection(
    doc: &mut GraphDocument,
    kind: &str,
    source: ConnectorId,
    target: ConnectorId,
    joint_kind: &str,
    joints: &[Vec2],
) -> (ConnectionId, CompoundCommand) {
    let id = doc.allocate_connection_id();
    let mut compound = CompoundCommand::new("Connection hinzufügen").with(AddElement::new(
        GraphElement::Connection(Connection::new(id, kind, source, target)),
    ));
    for position in joints {
        let joint = doc.allocate_joint_id();
        compound.push(AddElement::new(GraphElement::Joint(Joint::new(
            joint, id, joint_kind, *position,
        ))));
    }
    (id, compound)
}

/// Entfernt eine einzelne Connection.
pub fn remove_connection(connection: ConnectionId) -> RemoveElement {
    RemoveElement::new(connection)
}

/// Ersetzt alle Joints einer Connection durch neue an `positions`.
///
/// Der Joint-Typ wird vom ersten bestehenden Joint übernommen, sonst `fallback_kind`.
pub fn replace_joints(
    doc: &mut GraphDocument,
    connection: ConnectionId,
    positions: &[Vec2],
    fallback_kind: &str,
) -> Option<CompoundCommand> {
    let existing = doc.connection(connection)?.joints.clone();
    let kind = existing
        .first()
        .and_then(|id| doc.joint(*id))
        .map_or_else(|| fallback_kind.to_string(), |j| j.kind.clone());

    let mut compound = CompoundCommand::new("Joints ersetzen");
    for joint in existing {
        compound.push(RemoveElement::new(joint));
    }
    for position in positions {
        let joint = doc.allocate_joint_id();
        compound.push(AddElement::new(GraphElement::Joint(Joint::new(
            joint,
            connection,
            kind.clone(),
            *position,
        ))));
    }
    (!compound.is_empty()).then_some(compound)
}

/// Entfernt die Joints an den angegebenen Listenindizes (z.B. Ergebnis der Bereinigung).
pub fn remove_joints(
    doc: &GraphDocument,
    connection: ConnectionId,
    indices: &[usize],
) -> Option<CompoundCommand> {
    let joints = &doc.connection(connection)?.joints;
    let mut compound = CompoundCommand::new("Joints bereinigen");
    for index in indices {
        if let Some(joint) = joints.get(*index) {
            compound.push(RemoveElement::new(*joint));
        }
    }
    (!compound.is_empty()).then_some(compound)
}

/// Übernimmt neue Positionen von Nodes/Joints (Abschluss eines Drags).
///
/// Unveränderte Positionen werden übersprungen; `None` wenn sich nichts ändert.
pub fn move_elements(doc: &GraphDocument, moves: &[(Selectable, Vec2)]) -> Option<CompoundCommand> {
    let mut compound = CompoundCommand::new("Elemente verschieben");
    for (item, position) in moves {
        if doc.position_of(*item).is_some_and(|old| old != *position) {
            compound.push(SetProperty::new(*item, PropertyValue::Position(*position)));
        }
    }
    (!compound.is_empty()).then_some(compound)
}

/// Neue Position und Größe eines Nodes (Abschluss eines Resize).
pub fn resize_node(
    doc: &GraphDocument,
    node: NodeId,
    position: Vec2,
    size: Vec2,
) -> Option<CompoundCommand> {
    let current = doc.node(node)?;
    let mut compound = CompoundCommand::new("Node skalieren");
    if current.position != position {
        compound.push(SetProperty::new(node, PropertyValue::Position(position)));
    }
    if current.size() != size {
        compound.push(SetProperty::new(node, PropertyValue::Size(size)));
    }
    (!compound.is_empty()).then_some(compound)
}
