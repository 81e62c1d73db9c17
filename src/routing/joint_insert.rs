//! Interaktives Einfügen von Joints durch Ziehen an einem Segment.
//!
//! Beim Drücken wird das nächstgelegene Segment gesucht und an der
//! lotrecht eingerasteten Position mit zwei neuen Joints geteilt. Beide
//! Joints folgen gemeinsam dem Zeiger; ruhende Nachbar-Joints ziehen mit,
//! Anker halten fest. Beim Loslassen wird bereinigt und nur bei echter
//! Änderung ein neuer Joint-Satz geliefert.

use super::align::{align_endpoints, constrain_joint_move};
use super::cleanup::cleaned_points;
use super::parity::is_segment_horizontal;
use crate::core::ConnectionId;
use glam::Vec2;

/// Treffer auf einem Pfadsegment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Segmentindex (0 = Source → erster Punkt)
    pub segment: usize,
    /// Orientierung des Segments
    pub horizontal: bool,
    /// Lotrechter Abstand des Cursors
    pub distance: f32,
    /// Lotfußpunkt auf dem Segment
    pub point: Vec2,
}

/// Nächstes Segment innerhalb `tolerance`.
///
/// Der Lotfußpunkt muss im Segment liegen (Ränder eingeschlossen); bei
/// gleichem Abstand gewinnt der kleinere Segmentindex. Segmente der Länge 0
/// werden übersprungen.
pub fn nearest_segment(
    points: &[Vec2],
    source_horizontal: bool,
    cursor: Vec2,
    tolerance: f32,
) -> Option<SegmentHit> {
    let mut best: Option<SegmentHit> = None;
    for (i, pair) in points.windows(2).enumerate() {
        let (start, end) = (pair[0], pair[1]);
        let dir = end - start;
        let len_sq = dir.length_squared();
        if len_sq <= f32::EPSILON {
            continue;
        }
        let t = (cursor - start).dot(dir) / len_sq;
        if !(0.0..=1.0).contains(&t) {
            continue;
        }
        let foot = start + dir * t;
        let distance = cursor.distance(foot);
        if distance > tolerance {
            continue;
        }
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(SegmentHit {
                segment: i,
                horizontal: is_segment_horizontal(source_horizontal, i),
                distance,
                point: foot,
            });
        }
    }
    best
}

/// Laufender Einfüge-Vorgang auf einer Connection
#[derive(Debug, Clone, PartialEq)]
pub struct JointInsertion {
    connection: ConnectionId,
    source_horizontal: bool,
    original: Vec<Vec2>,
    base: Vec<Vec2>,
    working: Vec<Vec2>,
    first_new: usize,
    hit: SegmentHit,
    press: Vec2,
    dragged: bool,
}

impl JointInsertion {
    /// Startet das Einfügen, falls der Cursor nahe genug an einem Segment liegt.
    pub fn begin(
        connection: ConnectionId,
        points: Vec<Vec2>,
        source_horizontal: bool,
        cursor: Vec2,
        tolerance: f32,
    ) -> Option<Self> {
        let hit = nearest_segment(&points, source_horizontal, cursor, tolerance)?;
        let first_new = hit.segment + 1;
        let mut base = points.clone();
        base.insert(first_new, hit.point);
        base.insert(first_new, hit.point);

        let mut insertion = Self {
            connection,
            source_horizontal,
            original: points,
            working: base.clone(),
            base,
            first_new,
            hit,
            press: cursor,
            dragged: false,
        };
        insertion.place(hit.point);
        log::debug!(
            "Joint-Insert auf {} Segment {} bei {:?}",
            connection,
            hit.segment,
            hit.point
        );
        Some(insertion)
    }

    fn place(&mut self, position: Vec2) {
        self.working.clone_from(&self.base);
        let pair = [self.first_new, self.first_new + 1];
        for index in pair {
            self.working[index] = position;
        }
        constrain_joint_move(&mut self.working, &pair, self.source_horizontal);
    }

    /// Verschiebt das neue Joint-Paar um die Zeigerbewegung seit dem Drücken.
    pub fn drag(&mut self, cursor: Vec2) {
        let delta = cursor - self.press;
        if delta != Vec2::ZERO {
            self.dragged = true;
        }
        self.place(self.hit.point + delta);
    }

    /// Betroffene Connection
    pub fn connection(&self) -> ConnectionId {
        self.connection
    }

    /// Getroffenes Segment
    pub fn hit(&self) -> SegmentHit {
        self.hit
    }

    /// Aktuelle Vorschau der Ankerliste
    pub fn preview(&self) -> &[Vec2] {
        &self.working
    }

    /// Schließt ab und liefert die neuen Joint-Positionen, falls sich der Pfad geändert hat.
    ///
    /// Ein reiner Klick ohne Bewegung ändert nie etwas.
    pub fn finish(self) -> Option<Vec<Vec2>> {
        if !self.dragged {
            return None;
        }
        let mut points = self.working;
        align_endpoints(&mut points, self.source_horizontal, &[]);
        let cleaned = cleaned_points(&points);
        if cleaned == self.original {
            return None;
        }
        Some(cleaned[1..cleaned.len() - 1].to_vec())
    }
}
