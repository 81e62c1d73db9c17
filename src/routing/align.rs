//! Ausrichtung von Joints: Endpunkte an ihren Connector, Nachbarn an bewegte Joints.

use super::parity::is_segment_horizontal;
use super::path::path_points;
use crate::core::{ConnectionId, ConnectorPositionProvider, GraphDocument, PropertyValue, Selectable};
use glam::Vec2;

/// Fester Koordinatenwert eines Segments: y bei horizontal, x bei vertikal.
#[inline]
fn shared_axis(horizontal: bool) -> usize {
    if horizontal {
        1
    } else {
        0
    }
}

/// Richtet ersten und letzten Joint auf die Achse des angrenzenden Connectors aus.
///
/// `points` ist die Ankerliste; Punkte in `skip` (Punktindizes) bleiben unverändert.
/// Gibt `true` zurück, wenn sich etwas geändert hat.
pub fn align_endpoints(points: &mut [Vec2], source_horizontal: bool, skip: &[usize]) -> bool {
    let len = points.len();
    if len < 3 {
        return false;
    }
    let mut changed = false;

    let first = 1;
    if !skip.contains(&first) {
        let axis = shared_axis(is_segment_horizontal(source_horizontal, 0));
        if points[first][axis] != points[0][axis] {
            points[first][axis] = points[0][axis];
            changed = true;
        }
    }

    let last = len - 2;
    if !skip.contains(&last) {
        let axis = shared_axis(is_segment_horizontal(source_horizontal, len - 2));
        if points[last][axis] != points[len - 1][axis] {
            points[last][axis] = points[len - 1][axis];
            changed = true;
        }
    }
    changed
}

/// Hält den Pfad nach dem Verschieben der Joints `moved` (Punktindizes) orthogonal.
///
/// Ruhende Nachbar-Joints übernehmen die gemeinsame Koordinate des Segments;
/// grenzt ein bewegter Joint an einen Anker, gibt stattdessen der Joint nach.
/// Liefert die Punktindizes der mitgezogenen Nachbarn.
pub fn constrain_joint_move(points: &mut [Vec2], moved: &[usize], source_horizontal: bool) -> Vec<usize> {
    let len = points.len();
    let mut followers = Vec::new();
    if len < 3 {
        return followers;
    }
    let last_anchor = len - 1;

    for &m in moved {
        if m == 0 || m >= last_anchor {
            continue;
        }
        for (neighbour, segment) in [(m - 1, m - 1), (m + 1, m)] {
            if moved.contains(&neighbour) {
                continue;
            }
            let axis = shared_axis(is_segment_horizontal(source_horizontal, segment));
            if neighbour == 0 || neighbour == last_anchor {
                points[m][axis] = points[neighbour][axis];
            } else if points[neighbour][axis] != points[m][axis] {
                points[neighbour][axis] = points[m][axis];
                if !followers.contains(&neighbour) {
                    followers.push(neighbour);
                }
            }
        }
    }
    followers
}

/// Richtet die End-Joints einer Connection transient im Dokument aus.
///
/// Joints in `pinned` (Punktindizes) werden gerade gezogen und bleiben unverändert.
pub fn realign_connection(
    doc: &mut GraphDocument,
    positions: &dyn ConnectorPositionProvider,
    connection: ConnectionId,
    source_horizontal: bool,
    pinned: &[usize],
) -> bool {
    let Some(mut points) = path_points(doc, positions, connection) else {
        return false;
    };
    if !align_endpoints(&mut points, source_horizontal, pinned) {
        return false;
    }
    let joints = doc
        .connection(connection)
        .map(|c| c.joints.clone())
        .unwrap_or_default();
    for (i, joint) in joints.into_iter().enumerate() {
        let _ = doc.set_property(
            Selectable::Joint(joint),
            PropertyValue::Position(points[i + 1]),
        );
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_joint_forms_an_elbow() {
        let mut points = vec![Vec2::new(0.0, 0.0), Vec2::new(40.0, 30.0), Vec2::new(100.0, 60.0)];
        assert!(align_endpoints(&mut points, true, &[]));
        assert_eq!(points[1], Vec2::new(100.0, 0.0));
    }

    #[test]
    fn vertical_source_aligns_x_first() {
        let mut points = vec![
            Vec2::new(10.0, 0.0),
            Vec2::new(12.0, 50.0),
            Vec2::new(80.0, 50.0),
            Vec2::new(80.0, 100.0),
        ];
        assert!(align_endpoints(&mut points, false, &[]));
        assert_eq!(points[1], Vec2::new(10.0, 50.0));
        assert_eq!(points[2], Vec2::new(80.0, 50.0));
    }

    #[test]
    fn skipped_joints_stay_put() {
        let mut points = vec![Vec2::ZERO, Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0)];
        assert!(!align_endpoints(&mut points, true, &[1]));
        assert_eq!(points[1], Vec2::new(5.0, 5.0));
    }

    #[test]
    fn neighbour_joint_follows_moved_joint() {
        // Source rechts → Segmente: h, v, h
        let mut points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(50.0, 40.0),
            Vec2::new(100.0, 40.0),
        ];
        points[2] = Vec2::new(70.0, 40.0);
        let followers = constrain_joint_move(&mut points, &[2], true);

        assert_eq!(followers, vec![1]);
        assert_eq!(points[1], Vec2::new(70.0, 0.0));
        assert_eq!(points[2], Vec2::new(70.0, 40.0));
    }

    #[test]
    fn joint_next_to_anchor_yields() {
        let mut points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(50.0, 40.0),
            Vec2::new(100.0, 40.0),
        ];
        points[1] = Vec2::new(60.0, 15.0);
        let followers = constrain_joint_move(&mut points, &[1], true);

        assert_eq!(points[1], Vec2::new(60.0, 0.0));
        assert_eq!(points[2], Vec2::new(60.0, 40.0));
        assert_eq!(followers, vec![2]);
    }
}
