//! Connections zwischen zwei Connectors und ihre Joints (Knickpunkte).

use super::{ConnectionId, ConnectorId, JointId};
use glam::Vec2;

/// Eine Verbindung zwischen Source- und Target-Connector
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Eindeutige ID
    pub id: ConnectionId,
    /// Typ-Tag (vom Validator vergeben)
    pub kind: String,
    source: ConnectorId,
    target: ConnectorId,
    /// Joints in Reihenfolge von Source nach Target
    pub joints: Vec<JointId>,
}

impl Connection {
    /// Erstellt eine Connection ohne Joints.
    pub fn new(
        id: ConnectionId,
        kind: impl Into<String>,
        source: ConnectorId,
        target: ConnectorId,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            source,
            target,
            joints: Vec::new(),
        }
    }

    /// Source-Connector (unveränderlich)
    pub fn source(&self) -> ConnectorId {
        self.source
    }

    /// Target-Connector (unveränderlich)
    pub fn target(&self) -> ConnectorId {
        self.target
    }

    /// Liefert den jeweils anderen Connector, `None` wenn `connector` kein Ende ist.
    pub fn opposite(&self, connector: ConnectorId) -> Option<ConnectorId> {
        if connector == self.source {
            Some(self.target)
        } else if connector == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    /// Prüft ob der Connector Source oder Target ist
    pub fn touches(&self, connector: ConnectorId) -> bool {
        self.source == connector || self.target == connector
    }
}

/// Ein Knickpunkt einer Connection
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    /// Eindeutige ID
    pub id: JointId,
    /// Typ-Tag
    pub kind: String,
    /// Position in Dokument-Koordinaten
    pub position: Vec2,
    /// Besitzende Connection
    pub connection: ConnectionId,
}

impl Joint {
    /// Erstellt einen Joint
    pub fn new(
        id: JointId,
        connection: ConnectionId,
        kind: impl Into<String>,
        position: Vec2,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            position,
            connection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_resolves_both_ends() {
        let conn = Connection::new(ConnectionId(1), "c", ConnectorId(2), ConnectorId(3));
        assert_eq!(conn.opposite(ConnectorId(2)), Some(ConnectorId(3)));
        assert_eq!(conn.opposite(ConnectorId(3)), Some(ConnectorId(2)));
        assert_eq!(conn.opposite(ConnectorId(4)), None);
    }
}
