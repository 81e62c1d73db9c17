//! Geometrie-Hilfen: achsparallele Rechtecke und die Positionsabfrage für Connectors.

use super::{ConnectorId, GraphDocument};
use glam::Vec2;

/// Achsparalleles Rechteck in Dokument-Koordinaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Linke obere Ecke
    pub min: Vec2,
    /// Rechte untere Ecke
    pub max: Vec2,
}

impl Rect {
    /// Rechteck aus zwei beliebigen Eckpunkten (Reihenfolge egal)
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Beschneidet das Rechteck auf `bounds`
    pub fn clamped_to(self, bounds: Rect) -> Self {
        let min = self.min.clamp(bounds.min, bounds.max);
        let max = self.max.clamp(bounds.min, bounds.max);
        Self { min, max }
    }

    /// Punkt liegt im Rechteck (Rand inklusive)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Das Rechteck `[pos, pos + size]` liegt vollständig innen
    pub fn contains_box(&self, pos: Vec2, size: Vec2) -> bool {
        self.contains_point(pos) && self.contains_point(pos + size)
    }

    /// Breite und Höhe
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Positionsabfrage Core → Darstellung.
///
/// Liefert den aktuell gerenderten Mittelpunkt eines Connectors in
/// Dokument-Koordinaten oder `None`, wenn der Connector nicht dargestellt wird.
pub trait ConnectorPositionProvider {
    /// Position des Connectors
    fn connector_position(&self, doc: &GraphDocument, connector: ConnectorId) -> Option<Vec2>;
}

/// Standard-Implementierung: Node-Position + relativer Connector-Offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentGeometry;

impl ConnectorPositionProvider for DocumentGeometry {
    fn connector_position(&self, doc: &GraphDocument, connector: ConnectorId) -> Option<Vec2> {
        let connector = doc.connector(connector)?;
        match connector.parent {
            Some(parent) => doc.node(parent).map(|n| n.position + connector.position),
            None => Some(connector.position),
        }
    }
}
