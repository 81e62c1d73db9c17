//! Das Graph-Dokument: Aggregat-Wurzel mit Arenen für Nodes, Connectors,
//! Connections und Joints.
//!
//! Strukturelle Änderungen laufen über [`GraphDocument::insert`],
//! [`GraphDocument::detach`] und [`GraphDocument::restore`]; diese Methoden
//! werden ausschließlich von den Commands in `app::commands` aufgerufen.

use super::{
    Connection, ConnectionId, Connector, ConnectorId, GraphElement, GraphNode, Joint, JointId,
    NodeId, PropertyKey, PropertyValue, Rect, Selectable,
};
use glam::Vec2;
use indexmap::IndexMap;

/// Standardgröße des Inhaltsbereichs (Breite, Höhe)
pub const DEFAULT_CONTENT_SIZE: Vec2 = Vec2::new(4000.0, 3000.0);

/// Vollständiges Graph-Dokument
#[derive(Debug, Clone)]
pub struct GraphDocument {
    nodes: IndexMap<NodeId, GraphNode>,
    connectors: IndexMap<ConnectorId, Connector>,
    /// Reihenfolge = Z-Order (Index 0 liegt ganz hinten)
    connections: IndexMap<ConnectionId, Connection>,
    joints: IndexMap<JointId, Joint>,
    content_size: Vec2,
    next_id: u64,
}

/// Einzelner, umkehrbarer Entfernungsschritt
#[derive(Debug, Clone, PartialEq)]
enum Removal {
    Node { index: usize, node: GraphNode },
    Connector { index: usize, connector: Connector },
    Connection { index: usize, connection: Connection },
    Joint { index: usize, joint: Joint },
    NodeSlot { node: NodeId, index: usize, connector: ConnectorId },
    ConnectorSlot { connector: ConnectorId, index: usize, connection: ConnectionId },
    ConnectionSlot { connection: ConnectionId, index: usize, joint: JointId },
}

/// Protokoll einer Entfernung; stellt bei `restore` exakt den Vorzustand her.
#[derive(Debug, Clone, PartialEq)]
pub struct DetachedElement {
    target: Selectable,
    journal: Vec<Removal>,
}

impl DetachedElement {
    /// Das entfernte Element
    pub fn target(&self) -> Selectable {
        self.target
    }

    /// IDs aller mit entfernten Connections (Kaskade + Ziel selbst)
    pub fn removed_connections(&self) -> Vec<ConnectionId> {
        self.journal
            .iter()
            .filter_map(|step| match step {
                Removal::Connection { connection, .. } => Some(connection.id),
                _ => None,
            })
            .collect()
    }
}

/// Vergleich inklusive Reihenfolge aller Arenen; der ID-Zähler gehört nicht zum Inhalt.
impl PartialEq for GraphDocument {
    fn eq(&self, other: &Self) -> bool {
        self.content_size == other.content_size
            && self.nodes.iter().eq(other.nodes.iter())
            && self.connectors.iter().eq(other.connectors.iter())
            && self.connections.iter().eq(other.connections.iter())
            && self.joints.iter().eq(other.joints.iter())
    }
}

impl Default for GraphDocument {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENT_SIZE)
    }
}

impl GraphDocument {
    /// Erstellt ein leeres Dokument mit gegebenem Inhaltsbereich
    pub fn new(content_size: Vec2) -> Self {
        Self {
            nodes: IndexMap::new(),
            connectors: IndexMap::new(),
            connections: IndexMap::new(),
            joints: IndexMap::new(),
            content_size: content_size.max(Vec2::ZERO),
            next_id: 1,
        }
    }

    // ── IDs ─────────────────────────────────────────────────────────

    fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reserviert eine neue Node-ID
    pub fn allocate_node_id(&mut self) -> NodeId {
        NodeId(self.allocate())
    }

    /// Reserviert eine neue Connector-ID
    pub fn allocate_connector_id(&mut self) -> ConnectorId {
        ConnectorId(self.allocate())
    }

    /// Reserviert eine neue Connection-ID
    pub fn allocate_connection_id(&mut self) -> ConnectionId {
        ConnectionId(self.allocate())
    }

    /// Reserviert eine neue Joint-ID
    pub fn allocate_joint_id(&mut self) -> JointId {
        JointId(self.allocate())
    }

    // ── Inhaltsbereich ──────────────────────────────────────────────

    /// Größe des Inhaltsbereichs
    pub fn content_size(&self) -> Vec2 {
        self.content_size
    }

    /// Setzt die Größe des Inhaltsbereichs (nicht undo-fähig, Teil der View-Konfiguration)
    pub fn set_content_size(&mut self, size: Vec2) {
        self.content_size = size.max(Vec2::ZERO);
    }

    /// Inhaltsbereich als Rechteck ab Ursprung
    pub fn content_bounds(&self) -> Rect {
        Rect::from_corners(Vec2::ZERO, self.content_size)
    }

    // ── Lesezugriff ─────────────────────────────────────────────────

    /// Node per ID
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(&id)
    }

    /// Connector per ID
    pub fn connector(&self, id: ConnectorId) -> Option<&Connector> {
        self.connectors.get(&id)
    }

    /// Connection per ID
    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    /// Joint per ID
    pub fn joint(&self, id: JointId) -> Option<&Joint> {
        self.joints.get(&id)
    }

    /// Alle Nodes in Einfügereihenfolge
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Alle Connectors
    pub fn connectors(&self) -> impl Iterator<Item = &Connector> {
        self.connectors.values()
    }

    /// Alle Connections in Z-Order (hinten zuerst)
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Alle Joints
    pub fn joints(&self) -> impl Iterator<Item = &Joint> {
        self.joints.values()
    }

    /// Anzahl der Nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der Connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Anzahl der Joints
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Ist das Dokument leer?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty() && self.connectors.is_empty()
    }

    /// Z-Order-Index einer Connection
    pub fn connection_z_index(&self, id: ConnectionId) -> Option<usize> {
        self.connections.get_index_of(&id)
    }

    /// Existiert das Element noch?
    pub fn contains(&self, item: Selectable) -> bool {
        match item {
            Selectable::Node(id) => self.nodes.contains_key(&id),
            Selectable::Connector(id) => self.connectors.contains_key(&id),
            Selectable::Connection(id) => self.connections.contains_key(&id),
            Selectable::Joint(id) => self.joints.contains_key(&id),
        }
    }

    /// Node, dem der Connector gehört
    pub fn parent_of(&self, connector: ConnectorId) -> Option<NodeId> {
        self.connectors.get(&connector).and_then(|c| c.parent)
    }

    /// Joint-Positionen einer Connection in Reihenfolge Source → Target
    pub fn joint_positions(&self, connection: ConnectionId) -> Option<Vec<Vec2>> {
        let conn = self.connections.get(&connection)?;
        conn.joints
            .iter()
            .map(|id| self.joints.get(id).map(|j| j.position))
            .collect()
    }

    /// Alle Connections, die an einem der Connectors des Nodes hängen (ohne Duplikate)
    pub fn connections_of_node(&self, node: NodeId) -> Vec<ConnectionId> {
        let Some(node) = self.nodes.get(&node) else {
            return Vec::new();
        };
        let mut result = Vec::new();
        for connector_id in &node.connectors {
            for connection in self.connections_of_connector(*connector_id) {
                if !result.contains(&connection) {
                    result.push(connection);
                }
            }
        }
        result
    }

    /// Connections eines Connectors
    pub fn connections_of_connector(&self, connector: ConnectorId) -> Vec<ConnectionId> {
        self.connectors
            .get(&connector)
            .map(|c| c.connections.clone())
            .unwrap_or_default()
    }

    // ── Eigenschaften ───────────────────────────────────────────────

    /// Liest eine Eigenschaft; `None` wenn Element fehlt oder die Eigenschaft nicht besitzt.
    pub fn property(&self, target: Selectable, key: PropertyKey) -> Option<PropertyValue> {
        match (target, key) {
            (Selectable::Node(id), PropertyKey::Position) => {
                self.nodes.get(&id).map(|n| PropertyValue::Position(n.position))
            }
            (Selectable::Node(id), PropertyKey::Size) => {
                self.nodes.get(&id).map(|n| PropertyValue::Size(n.size()))
            }
            (Selectable::Node(id), PropertyKey::Kind) => {
                self.nodes.get(&id).map(|n| PropertyValue::Kind(n.kind.clone()))
            }
            (Selectable::Connector(id), PropertyKey::Position) => self
                .connectors
                .get(&id)
                .map(|c| PropertyValue::Position(c.position)),
            (Selectable::Connector(id), PropertyKey::Kind) => self
                .connectors
                .get(&id)
                .map(|c| PropertyValue::Kind(c.kind.clone())),
            (Selectable::Connector(id), PropertyKey::DetachOnDrag) => self
                .connectors
                .get(&id)
                .map(|c| PropertyValue::DetachOnDrag(c.detach_on_drag)),
            (Selectable::Connection(id), PropertyKey::Kind) => self
                .connections
                .get(&id)
                .map(|c| PropertyValue::Kind(c.kind.clone())),
            (Selectable::Joint(id), PropertyKey::Position) => {
                self.joints.get(&id).map(|j| PropertyValue::Position(j.position))
            }
            (Selectable::Joint(id), PropertyKey::Kind) => {
                self.joints.get(&id).map(|j| PropertyValue::Kind(j.kind.clone()))
            }
            _ => None,
        }
    }

    /// Setzt eine Eigenschaft und gibt den vorherigen Wert zurück.
    ///
    /// Außerhalb von Commands nur für transiente Drag-Vorschauen verwenden,
    /// die vor dem Commit zurückgesetzt werden.
    pub fn set_property(&mut self, target: Selectable, value: PropertyValue) -> Option<PropertyValue> {
        let previous = self.property(target, value.key())?;
        match (target, value) {
            (Selectable::Node(id), PropertyValue::Position(pos)) => {
                self.nodes.get_mut(&id)?.position = pos;
            }
            (Selectable::Node(id), PropertyValue::Size(size)) => {
                self.nodes.get_mut(&id)?.set_size(size);
            }
            (Selectable::Node(id), PropertyValue::Kind(kind)) => {
                self.nodes.get_mut(&id)?.kind = kind;
            }
            (Selectable::Connector(id), PropertyValue::Position(pos)) => {
                self.connectors.get_mut(&id)?.position = pos;
            }
            (Selectable::Connector(id), PropertyValue::Kind(kind)) => {
                self.connectors.get_mut(&id)?.kind = kind;
            }
            (Selectable::Connector(id), PropertyValue::DetachOnDrag(flag)) => {
                self.connectors.get_mut(&id)?.detach_on_drag = flag;
            }
            (Selectable::Connection(id), PropertyValue::Kind(kind)) => {
                self.connections.get_mut(&id)?.kind = kind;
            }
            (Selectable::Joint(id), PropertyValue::Position(pos)) => {
                self.joints.get_mut(&id)?.position = pos;
            }
            (Selectable::Joint(id), PropertyValue::Kind(kind)) => {
                self.joints.get_mut(&id)?.kind = kind;
            }
            _ => return None,
        }
        Some(previous)
    }

    /// Position eines Nodes oder Joints (Kurzform für Drag-Logik)
    pub fn position_of(&self, item: Selectable) -> Option<Vec2> {
        match self.property(item, PropertyKey::Position)? {
            PropertyValue::Position(pos) => Some(pos),
            _ => None,
        }
    }

    /// Größe eines Elements; Joints und Connectors haben keine Ausdehnung.
    pub fn extent_of(&self, item: Selectable) -> Vec2 {
        match item {
            Selectable::Node(id) => self.nodes.get(&id).map_or(Vec2::ZERO, |n| n.size()),
            _ => Vec2::ZERO,
        }
    }

    // ── Strukturelle Änderungen ─────────────────────────────────────

    /// Prüft ob ein neues Element eingefügt werden kann.
    pub fn can_insert(&self, element: &GraphElement, index: Option<usize>) -> bool {
        if self.contains(element.handle()) {
            return false;
        }
        match element {
            GraphElement::Node(node) => {
                node.connectors.is_empty() && index.is_none_or(|i| i <= self.nodes.len())
            }
            GraphElement::Connector(connector) => {
                if !connector.connections.is_empty() {
                    return false;
                }
                match connector.parent {
                    Some(parent) => self
                        .nodes
                        .get(&parent)
                        .is_some_and(|n| index.is_none_or(|i| i <= n.connectors.len())),
                    None => index.is_none(),
                }
            }
            GraphElement::Connection(connection) => {
                connection.joints.is_empty()
                    && self.connectors.contains_key(&connection.source())
                    && self.connectors.contains_key(&connection.target())
                    && index.is_none_or(|i| i <= self.connections.len())
            }
            GraphElement::Joint(joint) => self
                .connections
                .get(&joint.connection)
                .is_some_and(|c| index.is_none_or(|i| i <= c.joints.len())),
        }
    }

    /// Fügt ein neues Element ein. `index` bezieht sich auf die Liste des Besitzers
    /// (Node-Connectors, Connection-Joints) bzw. bei Nodes/Connections auf die Arena.
    pub fn insert(&mut self, element: GraphElement, index: Option<usize>) -> bool {
        if !self.can_insert(&element, index) {
            return false;
        }
        match element {
            GraphElement::Node(node) => {
                let at = index.unwrap_or(self.nodes.len());
                self.nodes.shift_insert(at, node.id, node);
            }
            GraphElement::Connector(connector) => {
                let id = connector.id;
                if let Some(parent) = connector.parent.and_then(|p| self.nodes.get_mut(&p)) {
                    let at = index.unwrap_or(parent.connectors.len());
                    parent.connectors.insert(at, id);
                }
                self.connectors.insert(id, connector);
            }
            GraphElement::Connection(connection) => {
                let id = connection.id;
                let (source, target) = (connection.source(), connection.target());
                let at = index.unwrap_or(self.connections.len());
                self.connections.shift_insert(at, id, connection);
                if let Some(c) = self.connectors.get_mut(&source) {
                    c.connections.push(id);
                }
                if source != target {
                    if let Some(c) = self.connectors.get_mut(&target) {
                        c.connections.push(id);
                    }
                }
            }
            GraphElement::Joint(joint) => {
                let id = joint.id;
                if let Some(conn) = self.connections.get_mut(&joint.connection) {
                    let at = index.unwrap_or(conn.joints.len());
                    conn.joints.insert(at, id);
                }
                self.joints.insert(id, joint);
            }
        }
        true
    }

    /// Entfernt ein Element inklusive aller abhängigen Elemente.
    ///
    /// Nodes nehmen ihre Connectors mit, Connectors und Nodes kaskadieren auf
    /// angehängte Connections, Connections nehmen ihre Joints mit.
    pub fn detach(&mut self, target: Selectable) -> Option<DetachedElement> {
        if !self.contains(target) {
            return None;
        }
        let mut journal = Vec::new();
        match target {
            Selectable::Node(id) => self.detach_node(id, &mut journal),
            Selectable::Connector(id) => self.detach_connector(id, true, &mut journal),
            Selectable::Connection(id) => self.detach_connection(id, &mut journal),
            Selectable::Joint(id) => self.detach_joint(id, &mut journal),
        }
        Some(DetachedElement { target, journal })
    }

    /// Macht eine Entfernung exakt rückgängig (Arena- und Listenpositionen).
    pub fn restore(&mut self, detached: DetachedElement) {
        for step in detached.journal.into_iter().rev() {
            match step {
                Removal::Node { index, node } => {
                    self.nodes.shift_insert(index, node.id, node);
                }
                Removal::Connector { index, connector } => {
                    self.connectors.shift_insert(index, connector.id, connector);
                }
                Removal::Connection { index, connection } => {
                    self.connections
                        .shift_insert(index, connection.id, connection);
                }
                Removal::Joint { index, joint } => {
                    self.joints.shift_insert(index, joint.id, joint);
                }
                Removal::NodeSlot {
                    node,
                    index,
                    connector,
                } => {
                    if let Some(n) = self.nodes.get_mut(&node) {
                        n.connectors.insert(index.min(n.connectors.len()), connector);
                    }
                }
                Removal::ConnectorSlot {
                    connector,
                    index,
                    connection,
                } => {
                    if let Some(c) = self.connectors.get_mut(&connector) {
                        c.connections.insert(index.min(c.connections.len()), connection);
                    }
                }
                Removal::ConnectionSlot {
                    connection,
                    index,
                    joint,
                } => {
                    if let Some(c) = self.connections.get_mut(&connection) {
                        c.joints.insert(index.min(c.joints.len()), joint);
                    }
                }
            }
        }
    }

    fn detach_node(&mut self, id: NodeId, journal: &mut Vec<Removal>) {
        let connector_ids = self
            .nodes
            .get(&id)
            .map(|n| n.connectors.clone())
            .unwrap_or_default();
        for connector in &connector_ids {
            // Slot bleibt in der Node-Kopie erhalten
            self.detach_connector(*connector, false, journal);
        }
        if let Some((index, _, node)) = self.nodes.shift_remove_full(&id) {
            journal.push(Removal::Node { index, node });
        }
    }

    fn detach_connector(&mut self, id: ConnectorId, unlink_parent: bool, journal: &mut Vec<Removal>) {
        for connection in self.connections_of_connector(id) {
            self.detach_connection(connection, journal);
        }
        if unlink_parent {
            if let Some(parent) = self.parent_of(id) {
                if let Some(node) = self.nodes.get_mut(&parent) {
                    if let Some(index) = node.connectors.iter().position(|c| *c == id) {
                        node.connectors.remove(index);
                        journal.push(Removal::NodeSlot {
                            node: parent,
                            index,
                            connector: id,
                        });
                    }
                }
            }
        }
        if let Some((index, _, connector)) = self.connectors.shift_remove_full(&id) {
            journal.push(Removal::Connector { index, connector });
        }
    }

    fn detach_connection(&mut self, id: ConnectionId, journal: &mut Vec<Removal>) {
        let Some(connection) = self.connections.get(&id) else {
            return;
        };
        let ends = [connection.source(), connection.target()];
        let joint_ids = connection.joints.clone();

        for end in ends {
            if let Some(connector) = self.connectors.get_mut(&end) {
                if let Some(index) = connector.connections.iter().position(|c| *c == id) {
                    connector.connections.remove(index);
                    journal.push(Removal::ConnectorSlot {
                        connector: end,
                        index,
                        connection: id,
                    });
                }
            }
        }
        for joint in joint_ids {
            if let Some((index, _, joint)) = self.joints.shift_remove_full(&joint) {
                journal.push(Removal::Joint { index, joint });
            }
        }
        if let Some((index, _, connection)) = self.connections.shift_remove_full(&id) {
            journal.push(Removal::Connection { index, connection });
        }
    }

    fn detach_joint(&mut self, id: JointId, journal: &mut Vec<Removal>) {
        let Some(owner) = self.joints.get(&id).map(|j| j.connection) else {
            return;
        };
        if let Some(connection) = self.connections.get_mut(&owner) {
            if let Some(index) = connection.joints.iter().position(|j| *j == id) {
                connection.joints.remove(index);
                journal.push(Removal::ConnectionSlot {
                    connection: owner,
                    index,
                    joint: id,
                });
            }
        }
        if let Some((index, _, joint)) = self.joints.shift_remove_full(&id) {
            journal.push(Removal::Joint { index, joint });
        }
    }

    /// Prüft die gegenseitige Konsistenz aller Verweise (für Tests und Debug-Asserts).
    pub fn is_consistent(&self) -> bool {
        let connectors_ok = self.connectors.values().all(|c| {
            c.parent
                .is_none_or(|p| self.nodes.get(&p).is_some_and(|n| n.connectors.contains(&c.id)))
                && c.connections.iter().all(|id| {
                    self.connections
                        .get(id)
                        .is_some_and(|conn| conn.touches(c.id))
                })
        });
        let nodes_ok = self.nodes.values().all(|n| {
            n.connectors.iter().all(|id| {
                self.connectors
                    .get(id)
                    .is_some_and(|c| c.parent == Some(n.id))
            })
        });
        let connections_ok = self.connections.values().all(|conn| {
            [conn.source(), conn.target()].iter().all(|end| {
                self.connectors
                    .get(end)
                    .is_some_and(|c| c.connections.contains(&conn.id))
            }) && conn.joints.iter().all(|j| {
                self.joints
                    .get(j)
                    .is_some_and(|joint| joint.connection == conn.id)
            })
        });
        let joints_ok = self.joints.values().all(|j| {
            self.connections
                .get(&j.connection)
                .is_some_and(|c| c.joints.contains(&j.id))
        });
        connectors_ok && nodes_ok && connections_ok && joints_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Zwei Nodes mit je einem Connector und einer Connection mit zwei Joints.
    fn two_connected_nodes() -> (GraphDocument, ConnectionId) {
        let mut doc = GraphDocument::default();
        let a = doc.allocate_node_id();
        let b = doc.allocate_node_id();
        let out = doc.allocate_connector_id();
        let inp = doc.allocate_connector_id();
        let conn = doc.allocate_connection_id();
        assert!(doc.insert(
            GraphElement::Node(GraphNode::new(a, "box", Vec2::ZERO, Vec2::splat(50.0))),
            None
        ));
        assert!(doc.insert(
            GraphElement::Node(GraphNode::new(
                b,
                "box",
                Vec2::new(200.0, 0.0),
                Vec2::splat(50.0)
            )),
            None
        ));
        assert!(doc.insert(
            GraphElement::Connector(Connector::new(
                out,
                a,
                "right-output",
                Vec2::new(50.0, 25.0),
                true
            )),
            None
        ));
        assert!(doc.insert(
            GraphElement::Connector(Connector::new(
                inp,
                b,
                "left-input",
                Vec2::new(0.0, 25.0),
                true
            )),
            None
        ));
        assert!(doc.insert(
            GraphElement::Connection(Connection::new(conn, "default", out, inp)),
            None
        ));
        for x in [100.0, 100.0] {
            let joint = doc.allocate_joint_id();
            assert!(doc.insert(
                GraphElement::Joint(Joint::new(joint, conn, "default", Vec2::new(x, 25.0))),
                None
            ));
        }
        (doc, conn)
    }

    #[test]
    fn insert_keeps_references_consistent() {
        let (doc, conn) = two_connected_nodes();
        assert!(doc.is_consistent());
        assert_eq!(doc.connection(conn).map(|c| c.joints.len()), Some(2));
        assert_eq!(doc.joint_count(), 2);
    }

    #[test]
    fn insert_rejects_missing_owner() {
        let mut doc = GraphDocument::default();
        let ghost = NodeId(99);
        let id = doc.allocate_connector_id();
        let connector = Connector::new(id, ghost, "left-input", Vec2::ZERO, true);
        assert!(!doc.insert(GraphElement::Connector(connector), None));
    }

    #[test]
    fn detaching_node_cascades_connections() {
        let (mut doc, conn) = two_connected_nodes();
        let first = doc.nodes().next().map(|n| n.id).expect("Node vorhanden");

        let detached = doc.detach(Selectable::Node(first)).expect("Node entfernt");

        assert_eq!(detached.removed_connections(), vec![conn]);
        assert_eq!(doc.connection_count(), 0);
        assert_eq!(doc.joint_count(), 0);
        assert!(doc.is_consistent());
    }

    #[test]
    fn restore_recreates_exact_state() {
        let (mut doc, _) = two_connected_nodes();
        let before = doc.clone();
        let first = doc.nodes().next().map(|n| n.id).expect("Node vorhanden");

        let detached = doc.detach(Selectable::Node(first)).expect("Node entfernt");
        doc.restore(detached);

        assert_eq!(doc, before);
        assert!(doc.is_consistent());
    }

    #[test]
    fn set_property_returns_previous_value() {
        let (mut doc, conn) = two_connected_nodes();
        let joint = doc.connection(conn).map(|c| c.joints[0]).expect("Joint vorhanden");

        let previous = doc.set_property(
            Selectable::Joint(joint),
            PropertyValue::Position(Vec2::new(1.0, 2.0)),
        );

        assert_eq!(previous, Some(PropertyValue::Position(Vec2::new(100.0, 25.0))));
        assert_eq!(doc.position_of(Selectable::Joint(joint)), Some(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn unsupported_property_is_rejected() {
        let (mut doc, conn) = two_connected_nodes();
        let result = doc.set_property(
            Selectable::Connection(conn),
            PropertyValue::Position(Vec2::ZERO),
        );
        assert!(result.is_none());
    }
}
