//! Entfernen redundanter Joints nach interaktiven Änderungen.

use glam::Vec2;

/// Ermittelt die Joint-Indizes, die entfernt werden sollen.
///
/// Sucht wiederholt das erste Paar benachbarter, exakt deckungsgleicher Joints
/// (von links nach rechts) und entfernt es, bis keines mehr übrig ist. Die
/// Ankerpunkte an beiden Enden werden nie entfernt. Rückgabe aufsteigend
/// sortiert, bezogen auf die Joint-Liste (Punktindex − 1).
pub fn redundant_joints(points: &[Vec2]) -> Vec<usize> {
    if points.len() < 4 {
        return Vec::new();
    }
    let last = points.len() - 1;
    // (Position, ursprünglicher Joint-Index); Anker tragen keinen Index
    let mut remaining: Vec<(Vec2, Option<usize>)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (*p, (i != 0 && i != last).then(|| i - 1)))
        .collect();
    let mut removed = Vec::new();

    loop {
        let hit = remaining.windows(2).position(|pair| {
            pair[0].1.is_some() && pair[1].1.is_some() && pair[0].0 == pair[1].0
        });
        let Some(i) = hit else {
            break;
        };
        for (_, joint) in remaining.drain(i..i + 2) {
            if let Some(joint) = joint {
                removed.push(joint);
            }
        }
    }
    removed.sort_unstable();
    removed
}

/// Wendet das Ergebnis von [`redundant_joints`] auf eine Ankerliste an.
pub fn cleaned_points(points: &[Vec2]) -> Vec<Vec2> {
    let removed = redundant_joints(points);
    points
        .iter()
        .enumerate()
        .filter(|(i, _)| *i == 0 || !removed.contains(&(i - 1)))
        .map(|(_, p)| *p)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_pair_in_the_middle_is_detected() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
        ];
        assert_eq!(redundant_joints(&points), vec![0, 1]);
    }

    #[test]
    fn cleaned_path_is_left_alone() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 30.0),
            Vec2::new(20.0, 30.0),
        ];
        assert!(redundant_joints(&points).is_empty());

        let cleaned = cleaned_points(&points);
        assert_eq!(cleaned, points.to_vec());
        assert!(redundant_joints(&cleaned).is_empty());
    }

    #[test]
    fn collapsing_cascades_left_to_right() {
        // Nach Entfernen von (5,5)(5,5) liegen (3,0)(3,0) nebeneinander
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(9.0, 0.0),
        ];
        assert_eq!(redundant_joints(&points), vec![0, 1, 2, 3]);
    }

    #[test]
    fn anchors_are_never_removed() {
        let points = [Vec2::ZERO, Vec2::ZERO, Vec2::ZERO];
        assert!(redundant_joints(&points).is_empty());
    }
}
