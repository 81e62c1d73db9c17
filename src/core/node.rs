//! Repräsentiert einen Node (Box) im Graph-Dokument.

use super::ConnectorId;
use super::NodeId;
use glam::Vec2;

/// Ein Node mit Position, Größe und eigenen Connectors
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    /// Eindeutige ID
    pub id: NodeId,
    /// Typ-Tag (wird vom Embedding interpretiert, z.B. für Skins)
    pub kind: String,
    /// Linke obere Ecke in Dokument-Koordinaten
    pub position: Vec2,
    /// Breite/Höhe, nie negativ
    size: Vec2,
    /// Connectors in Reihenfolge (exklusiv diesem Node zugeordnet)
    pub connectors: Vec<ConnectorId>,
}

impl GraphNode {
    /// Erstellt einen neuen Node ohne Connectors
    pub fn new(id: NodeId, kind: impl Into<String>, position: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind: kind.into(),
            position,
            size: size.max(Vec2::ZERO),
            connectors: Vec::new(),
        }
    }

    /// Größe des Nodes
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Setzt die Größe; negative Werte werden auf 0 geklemmt.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size.max(Vec2::ZERO);
    }

    /// Rechte untere Ecke
    pub fn max_corner(&self) -> Vec2 {
        self.position + self.size
    }

    /// Mittelpunkt des Nodes
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Prüft ob der Node vollständig im Rechteck `[min, max]` liegt (inkl. Rand).
    pub fn is_inside(&self, min: Vec2, max: Vec2) -> bool {
        self.position.cmpge(min).all() && self.max_corner().cmple(max).all()
    }
}
