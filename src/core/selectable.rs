//! Gemeinsamer Handle-Typ für alle selektierbaren Elemente.

use super::{ConnectionId, ConnectorId, JointId, NodeId};
use super::{Connection, Connector, GraphNode, Joint};
use glam::Vec2;
use std::fmt;

/// Verweis auf ein beliebiges Element des Dokuments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Selectable {
    /// Node
    Node(NodeId),
    /// Connector
    Connector(ConnectorId),
    /// Connection
    Connection(ConnectionId),
    /// Joint
    Joint(JointId),
}

impl Selectable {
    /// Elemente mit eigener Position, die per Drag verschoben werden können
    pub fn is_draggable(self) -> bool {
        matches!(self, Selectable::Node(_) | Selectable::Joint(_))
    }
}

impl fmt::Display for Selectable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selectable::Node(id) => id.fmt(f),
            Selectable::Connector(id) => id.fmt(f),
            Selectable::Connection(id) => id.fmt(f),
            Selectable::Joint(id) => id.fmt(f),
        }
    }
}

impl From<NodeId> for Selectable {
    fn from(id: NodeId) -> Self {
        Selectable::Node(id)
    }
}

impl From<ConnectorId> for Selectable {
    fn from(id: ConnectorId) -> Self {
        Selectable::Connector(id)
    }
}

impl From<ConnectionId> for Selectable {
    fn from(id: ConnectionId) -> Self {
        Selectable::Connection(id)
    }
}

impl From<JointId> for Selectable {
    fn from(id: JointId) -> Self {
        Selectable::Joint(id)
    }
}

/// Ein vollständiges Element, wie es einer Sammlung hinzugefügt wird
#[derive(Debug, Clone, PartialEq)]
pub enum GraphElement {
    /// Node (Connector-Liste muss leer sein)
    Node(GraphNode),
    /// Connector (wird beim Parent-Node eingehängt)
    Connector(Connector),
    /// Connection (Joint-Liste muss leer sein)
    Connection(Connection),
    /// Joint (wird bei der Connection eingehängt)
    Joint(Joint),
}

impl GraphElement {
    /// Handle des Elements
    pub fn handle(&self) -> Selectable {
        match self {
            GraphElement::Node(node) => Selectable::Node(node.id),
            GraphElement::Connector(connector) => Selectable::Connector(connector.id),
            GraphElement::Connection(connection) => Selectable::Connection(connection.id),
            GraphElement::Joint(joint) => Selectable::Joint(joint.id),
        }
    }
}

/// Schlüssel einer änderbaren Eigenschaft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// Position (Node, Connector, Joint)
    Position,
    /// Größe (nur Node)
    Size,
    /// Typ-Tag (alle Elemente)
    Kind,
    /// Detach-on-Drag-Flag (nur Connector)
    DetachOnDrag,
}

/// Wert einer Eigenschaft
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Position
    Position(Vec2),
    /// Größe
    Size(Vec2),
    /// Typ-Tag
    Kind(String),
    /// Detach-on-Drag
    DetachOnDrag(bool),
}

impl PropertyValue {
    /// Zugehöriger Schlüssel
    pub fn key(&self) -> PropertyKey {
        match self {
            PropertyValue::Position(_) => PropertyKey::Position,
            PropertyValue::Size(_) => PropertyKey::Size,
            PropertyValue::Kind(_) => PropertyKey::Kind,
            PropertyValue::DetachOnDrag(_) => PropertyKey::DetachOnDrag,
        }
    }
}
