//! Tail: vorläufige Connection während des Ziehens, noch nicht im Dokument.

use crate::core::ConnectorId;
use crate::routing::align_endpoints;
use glam::Vec2;

/// Geometrie eines gezogenen Tails vom Anker-Connector bis zum freien Ende
#[derive(Debug, Clone, PartialEq)]
pub struct Tail {
    anchor: ConnectorId,
    anchor_horizontal: bool,
    start: Vec2,
    end: Vec2,
    seeded: Vec<Vec2>,
}

impl Tail {
    /// Neuer Tail ohne vorgegebene Joints
    pub fn new(anchor: ConnectorId, anchor_horizontal: bool, start: Vec2) -> Self {
        Self::seeded(anchor, anchor_horizontal, start, Vec::new())
    }

    /// Tail mit übernommenen Joints (vom Anker aus gelesen)
    pub fn seeded(anchor: ConnectorId, anchor_horizontal: bool, start: Vec2, joints: Vec<Vec2>) -> Self {
        let end = joints.last().copied().unwrap_or(start);
        Self {
            anchor,
            anchor_horizontal,
            start,
            end,
            seeded: joints,
        }
    }

    /// Connector, an dem der Tail hängt
    pub fn anchor(&self) -> ConnectorId {
        self.anchor
    }

    /// Startpunkt am Anker
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Freies Ende
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Setzt das freie Ende (Cursor oder eingerasteter Connector).
    pub fn set_end(&mut self, end: Vec2) {
        self.end = end;
    }

    /// Joint-Positionen zwischen Anker und freiem Ende.
    ///
    /// Übernommene Joints werden an beiden Enden ausgerichtet; ein frischer
    /// Tail hat keine Joints, den Knick zeichnet erst das Routing.
    pub fn joint_positions(&self) -> Vec<Vec2> {
        if self.seeded.is_empty() {
            return Vec::new();
        }
        let mut points = self.points_with(&self.seeded);
        align_endpoints(&mut points, self.anchor_horizontal, &[]);
        points[1..points.len() - 1].to_vec()
    }

    /// Ankerliste `[start, joints…, end]` für die Darstellung
    pub fn points(&self) -> Vec<Vec2> {
        self.points_with(&self.joint_positions())
    }

    fn points_with(&self, joints: &[Vec2]) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(joints.len() + 2);
        points.push(self.start);
        points.extend_from_slice(joints);
        points.push(self.end);
        points
    }
}
