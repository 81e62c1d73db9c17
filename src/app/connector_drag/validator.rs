//! Austauschbare Regeln, welche Connectors verbunden werden dürfen.

use crate::core::{ConnectorId, GraphDocument};

/// Validierungs-Schnittstelle der einbettenden Anwendung
pub trait ConnectionValidator {
    /// Günstiger Vorfilter (z.B. Connector mit sich selbst)
    fn prevalidate(&self, doc: &GraphDocument, source: ConnectorId, target: ConnectorId) -> bool;

    /// Maßgebliche Prüfung
    fn validate(&self, doc: &GraphDocument, source: ConnectorId, target: ConnectorId) -> bool;

    /// Typ-Tag der neuen Connection
    fn create_connection_type(&self, doc: &GraphDocument, source: ConnectorId, target: ConnectorId) -> String;

    /// Typ-Tag der Joints der neuen Connection
    fn create_joint_type(&self, doc: &GraphDocument, source: ConnectorId, target: ConnectorId) -> String;

    /// Darf an diesem Connector ein Tail beginnen?
    fn can_start(&self, doc: &GraphDocument, connector: ConnectorId) -> bool {
        doc.connector(connector)
            .and_then(|c| c.parent)
            .is_some_and(|node| doc.node(node).is_some())
    }
}

/// Standardregeln: verschiedene Nodes, beide Seiten frei, genau ein Eingang.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConnectionValidator;

impl DefaultConnectionValidator {
    /// Typ-Tag für Connections
    pub const CONNECTION_TYPE: &'static str = "connection";
    /// Typ-Tag für Joints
    pub const JOINT_TYPE: &'static str = "joint";
}

impl ConnectionValidator for DefaultConnectionValidator {
    fn prevalidate(&self, doc: &GraphDocument, source: ConnectorId, target: ConnectorId) -> bool {
        source != target && doc.connector(source).is_some() && doc.connector(target).is_some()
    }

    fn validate(&self, doc: &GraphDocument, source: ConnectorId, target: ConnectorId) -> bool {
        let (Some(source), Some(target)) = (doc.connector(source), doc.connector(target)) else {
            return false;
        };
        match (source.parent, target.parent) {
            (Some(a), Some(b)) if a != b => {}
            _ => return false,
        }
        if source.is_connected() || target.is_connected() {
            return false;
        }
        source.is_input() != target.is_input()
    }

    fn create_connection_type(&self, _: &GraphDocument, _: ConnectorId, _: ConnectorId) -> String {
        Self::CONNECTION_TYPE.to_string()
    }

    fn create_joint_type(&self, _: &GraphDocument, _: ConnectorId, _: ConnectorId) -> String {
        Self::JOINT_TYPE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::{builders, EditCommand};
    use glam::Vec2;

    fn two_nodes() -> (GraphDocument, Vec<ConnectorId>, Vec<ConnectorId>) {
        let mut doc = GraphDocument::default();
        let specs = [
            builders::ConnectorSpec::new("left-input", Vec2::new(0.0, 10.0), true),
            builders::ConnectorSpec::new("right-output", Vec2::new(40.0, 10.0), true),
        ];
        let (_, a, mut add_a) = builders::add_node(&mut doc, "box", Vec2::ZERO, Vec2::new(40.0, 20.0), &specs);
        let (_, b, mut add_b) =
            builders::add_node(&mut doc, "box", Vec2::new(100.0, 0.0), Vec2::new(40.0, 20.0), &specs);
        assert!(add_a.execute(&mut doc) && add_b.execute(&mut doc));
        (doc, a, b)
    }

    #[test]
    fn output_to_input_on_other_node_is_valid() {
        let (doc, a, b) = two_nodes();
        let validator = DefaultConnectionValidator;
        assert!(validator.prevalidate(&doc, a[1], b[0]));
        assert!(validator.validate(&doc, a[1], b[0]));
    }

    #[test]
    fn same_node_and_same_polarity_are_rejected() {
        let (doc, a, b) = two_nodes();
        let validator = DefaultConnectionValidator;
        assert!(!validator.prevalidate(&doc, a[0], a[0]));
        assert!(!validator.validate(&doc, a[0], a[1]));
        assert!(!validator.validate(&doc, a[1], b[1]));
    }

    #[test]
    fn connected_connectors_are_rejected() {
        let (mut doc, a, b) = two_nodes();
        let (_, mut connect) = builders::add_connection(&mut doc, "connection", a[1], b[0], "joint", &[]);
        assert!(connect.execute(&mut doc));

        let validator = DefaultConnectionValidator;
        assert!(!validator.validate(&doc, a[1], b[0]));
        assert!(validator.validate(&doc, b[1], a[0]));
    }
}
