//! Kreuzungserkennung zwischen orthogonalen Connections.
//!
//! Ergebnis pro Segment ist eine Liste von Koordinaten entlang der
//! Segmentachse (x bei horizontalen, y bei vertikalen Segmenten), sortiert in
//! Laufrichtung. Ob daraus eine Lücke oder ein Bogen wird, entscheidet die
//! Darstellung.

use super::path::{ConnectionPath, Segment};
use crate::shared::IntersectionFilter;

/// Kreuzungskoordinaten pro Segment einer Connection
pub type SegmentCrossings = Vec<Vec<f32>>;

/// Liegt `value` strikt zwischen `a` und `b`?
#[inline]
fn strictly_between(value: f32, a: f32, b: f32) -> bool {
    value > a.min(b) && value < a.max(b)
}

/// Kreuzungspunkt eines horizontalen mit einem vertikalen Segment.
///
/// Liefert die Koordinate entlang `segment`, falls sich beide kreuzen.
fn crossing(segment: &Segment, other: &Segment) -> Option<f32> {
    if segment.horizontal == other.horizontal {
        return None;
    }
    let (h, v) = if segment.horizontal {
        (segment, other)
    } else {
        (other, segment)
    };
    let hy = h.start.y;
    let vx = v.start.x;
    if strictly_between(vx, h.start.x, h.end.x) && strictly_between(hy, v.start.y, v.end.y) {
        Some(if segment.horizontal { vx } else { hy })
    } else {
        None
    }
}

/// Berücksichtigt der Filter die andere Connection?
fn passes(filter: IntersectionFilter, own_z: usize, other_z: usize) -> bool {
    match filter {
        IntersectionFilter::All => true,
        IntersectionFilter::Behind => other_z < own_z,
        IntersectionFilter::InFront => other_z > own_z,
    }
}

/// Ermittelt alle Kreuzungen von `path` mit den übrigen Pfaden.
pub fn find_intersections(
    path: &ConnectionPath,
    others: &[ConnectionPath],
    filter: IntersectionFilter,
) -> SegmentCrossings {
    let own_segments = path.segments();
    let other_segments: Vec<Segment> = others
        .iter()
        .filter(|o| o.id != path.id && passes(filter, path.z_index, o.z_index))
        .flat_map(|o| o.segments())
        .collect();

    own_segments
        .iter()
        .map(|segment| {
            let mut coords: Vec<f32> = other_segments
                .iter()
                .filter_map(|other| crossing(segment, other))
                .collect();
            let forward = if segment.horizontal {
                segment.end.x >= segment.start.x
            } else {
                segment.end.y >= segment.start.y
            };
            coords.sort_by(|a, b| a.total_cmp(b));
            if !forward {
                coords.reverse();
            }
            coords
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConnectionId;
    use glam::Vec2;

    fn path(id: u64, z: usize, source_horizontal: bool, points: &[(f32, f32)]) -> ConnectionPath {
        ConnectionPath {
            id: ConnectionId(id),
            z_index: z,
            source_horizontal,
            points: points.iter().map(|(x, y)| Vec2::new(*x, *y)).collect(),
        }
    }

    #[test]
    fn horizontal_crosses_vertical() {
        let a = path(1, 1, true, &[(0.0, 50.0), (100.0, 50.0)]);
        let b = path(2, 0, false, &[(40.0, 0.0), (40.0, 100.0)]);

        let crossings = find_intersections(&a, &[a.clone(), b.clone()], IntersectionFilter::All);
        assert_eq!(crossings, vec![vec![40.0]]);

        let reverse = find_intersections(&b, &[a, b.clone()], IntersectionFilter::All);
        assert_eq!(reverse, vec![vec![50.0]]);
    }

    #[test]
    fn touching_endpoints_do_not_count() {
        let a = path(1, 1, true, &[(0.0, 50.0), (40.0, 50.0)]);
        let b = path(2, 0, false, &[(40.0, 0.0), (40.0, 100.0)]);
        let crossings = find_intersections(&a, &[b], IntersectionFilter::All);
        assert_eq!(crossings, vec![Vec::<f32>::new()]);
    }

    #[test]
    fn filter_respects_z_order() {
        let front = path(1, 1, true, &[(0.0, 50.0), (100.0, 50.0)]);
        let back = path(2, 0, false, &[(40.0, 0.0), (40.0, 100.0)]);
        let all = [front.clone(), back.clone()];

        assert_eq!(
            find_intersections(&front, &all, IntersectionFilter::Behind),
            vec![vec![40.0]]
        );
        assert_eq!(
            find_intersections(&back, &all, IntersectionFilter::Behind),
            vec![Vec::<f32>::new()]
        );
        assert_eq!(
            find_intersections(&back, &all, IntersectionFilter::InFront),
            vec![vec![50.0]]
        );
    }

    #[test]
    fn crossings_are_sorted_in_travel_direction() {
        let leftwards = path(1, 2, true, &[(100.0, 50.0), (0.0, 50.0)]);
        let v1 = path(2, 0, false, &[(20.0, 0.0), (20.0, 100.0)]);
        let v2 = path(3, 1, false, &[(70.0, 0.0), (70.0, 100.0)]);

        let crossings = find_intersections(&leftwards, &[v1, v2], IntersectionFilter::All);
        assert_eq!(crossings, vec![vec![70.0, 20.0]]);
    }
}
