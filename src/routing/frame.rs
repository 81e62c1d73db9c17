//! Zwei-Phasen-Frame: erst alle Pfade aktualisieren, dann alle zeichnen.

use super::align::align_endpoints;
use super::intersections::{find_intersections, SegmentCrossings};
use super::path::{connection_path, ConnectionPath};
use crate::core::{ConnectionId, ConnectorPositionProvider, GraphDocument};
use crate::shared::{CrossingStyle, IntersectionFilter};
use glam::Vec2;

/// Zeichen-Callback der Darstellungsschicht
pub trait ConnectionRenderer {
    /// Zeichnet eine Connection mit ihren Kreuzungen pro Segment.
    fn draw(&mut self, path: &ConnectionPath, crossings: &SegmentCrossings, style: CrossingStyle);
}

/// Einstellungen eines Frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameSettings {
    /// Welche Connections bei Kreuzungen berücksichtigt werden
    pub filter: IntersectionFilter,
    /// Lücke oder Bogen
    pub style: CrossingStyle,
}

/// Berechnet alle Pfade und ruft danach den Renderer für jede Connection auf.
///
/// `preview` ersetzt die Ankerliste einer Connection (z.B. während eines
/// Joint-Inserts). Connections mit nicht auflösbaren Ankern werden übersprungen.
/// Rückgabe: alle Pfade in Z-Order.
pub fn route_frame(
    doc: &GraphDocument,
    positions: &dyn ConnectorPositionProvider,
    settings: FrameSettings,
    preview: Option<(ConnectionId, &[Vec2])>,
    renderer: &mut dyn ConnectionRenderer,
) -> Vec<ConnectionPath> {
    // Phase 1: Punkte aller Connections
    let paths: Vec<ConnectionPath> = doc
        .connections()
        .filter_map(|connection| {
            let mut path = connection_path(doc, positions, connection.id)?;
            match preview {
                Some((id, points)) if id == connection.id => path.points = points.to_vec(),
                _ => {
                    align_endpoints(&mut path.points, path.source_horizontal, &[]);
                }
            }
            Some(path)
        })
        .collect();

    // Phase 2: Zeichnen mit vollständiger Punktmenge
    for path in &paths {
        let crossings = find_intersections(path, &paths, settings.filter);
        renderer.draw(path, &crossings, settings.style);
    }
    paths
}
