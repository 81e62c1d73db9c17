//! Rahmen-Selektion (Drag auf leerer Zeichenfläche).

use super::SelectionSet;
use crate::core::{GraphDocument, Rect, Selectable};
use glam::Vec2;
use indexmap::IndexSet;

/// Laufende Rahmen-Selektion
#[derive(Debug, Clone, PartialEq)]
pub struct Marquee {
    start: Vec2,
    backup: IndexSet<Selectable>,
    rect: Rect,
}

impl Marquee {
    /// Beginnt eine Rahmen-Selektion am Druckpunkt.
    ///
    /// Mit Shortcut wird die bestehende Selektion gesichert und bleibt erhalten,
    /// ohne Shortcut wird sie aufgehoben.
    pub fn begin(selection: &mut SelectionSet, press: Vec2, shortcut: bool) -> Self {
        let backup = if shortcut {
            selection.items().collect()
        } else {
            selection.clear_selection();
            IndexSet::new()
        };
        Self {
            start: press,
            backup,
            rect: Rect::from_corners(press, press),
        }
    }

    /// Aktualisiert das Rechteck und die Selektion für die aktuelle Zeigerposition.
    ///
    /// Nodes zählen, wenn sie vollständig im Rechteck liegen, Joints mit ihrem
    /// Punkt. Connections bleiben nur über die Sicherung selektiert.
    pub fn update(&mut self, doc: &GraphDocument, selection: &mut SelectionSet, current: Vec2) -> Rect {
        self.rect = Rect::from_corners(self.start, current).clamped_to(doc.content_bounds());
        let rect = self.rect;

        let mut wanted: IndexSet<Selectable> = self.backup.clone();
        wanted.extend(
            doc.nodes()
                .filter(|n| rect.contains_box(n.position, n.size()))
                .map(|n| Selectable::Node(n.id)),
        );
        wanted.extend(
            doc.joints()
                .filter(|j| rect.contains_point(j.position))
                .map(|j| Selectable::Joint(j.id)),
        );

        let stale: Vec<Selectable> = selection.items().filter(|i| !wanted.contains(i)).collect();
        for item in stale {
            selection.clear_selection_of(item);
        }
        for item in wanted {
            selection.select(item);
        }
        rect
    }

    /// Aktuelles Rechteck (für die Darstellung)
    pub fn rect(&self) -> Rect {
        self.rect
    }
}
