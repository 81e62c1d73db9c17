//! Ausrichtungs-Hilfslinien beim Ziehen eines Joints.

use super::parity::is_segment_horizontal;
use glam::Vec2;

/// Kandidaten-Koordinaten, auf die ein gezogener Joint einrasten kann
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentTargets {
    /// Mögliche x-Werte
    pub x: Vec<f32>,
    /// Mögliche y-Werte
    pub y: Vec<f32>,
}

impl AlignmentTargets {
    fn push(&mut self, horizontal_axis: bool, value: f32) {
        let list = if horizontal_axis { &mut self.x } else { &mut self.y };
        if !list.contains(&value) {
            list.push(value);
        }
    }

    /// Keine Kandidaten vorhanden
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }
}

/// Ermittelt die Einrast-Ziele für den Punkt `index` einer Ankerliste.
///
/// Der direkte Nachbar liefert ein Ziel auf der Achse entlang des gemeinsamen
/// Segments, sofern er ruht. Der übernächste Punkt liefert ein Ziel auf der
/// anderen Achse, sofern beide Punkte dazwischen ruhen. `is_moving` meldet für
/// einen Punktindex, ob er gerade mitbewegt wird (Anker: ihr Node wird gezogen).
pub fn alignment_targets(
    points: &[Vec2],
    index: usize,
    source_horizontal: bool,
    is_moving: impl Fn(usize) -> bool,
) -> AlignmentTargets {
    let mut targets = AlignmentTargets::default();
    let len = points.len();
    if index == 0 || index + 1 >= len {
        return targets;
    }

    // (Nachbar, übernächster Punkt, Segment zum Nachbarn)
    let before = (index - 1, index.checked_sub(2), index - 1);
    let after = (index + 1, (index + 2 < len).then_some(index + 2), index);

    for (q1, q2, segment) in [before, after] {
        if is_moving(q1) {
            continue;
        }
        let horizontal = is_segment_horizontal(source_horizontal, segment);
        // Entlang eines horizontalen Segments bringt die x-Koordinate den Punkt auf den Nachbarn
        targets.push(horizontal, points[q1][if horizontal { 0 } else { 1 }]);

        if let Some(q2) = q2 {
            if !is_moving(q2) {
                targets.push(!horizontal, points[q2][if horizontal { 1 } else { 0 }]);
            }
        }
    }
    targets
}

/// Rastet `position` pro Achse auf das nächste Ziel innerhalb `threshold` ein.
pub fn snap_to_targets(position: Vec2, targets: &AlignmentTargets, threshold: f32) -> Vec2 {
    let snap = |value: f32, candidates: &[f32]| -> f32 {
        candidates
            .iter()
            .copied()
            .filter(|c| (c - value).abs() <= threshold)
            .min_by(|a, b| (a - value).abs().total_cmp(&(b - value).abs()))
            .unwrap_or(value)
    };
    Vec2::new(snap(position.x, &targets.x), snap(position.y, &targets.y))
}
