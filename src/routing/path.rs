//! Ankerliste `[source, joints…, target]` und Segmente eines Pfads.

use super::parity::{is_segment_horizontal, source_is_horizontal};
use crate::core::{ConnectionId, ConnectorPositionProvider, GraphDocument};
use glam::Vec2;

/// Polylinie einer Connection samt Metadaten für die Kreuzungserkennung
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionPath {
    /// Connection
    pub id: ConnectionId,
    /// Z-Order-Index (0 = ganz hinten)
    pub z_index: usize,
    /// Erstes Segment horizontal?
    pub source_horizontal: bool,
    /// Ankerliste inklusive Source und Target
    pub points: Vec<Vec2>,
}

impl ConnectionPath {
    /// Segmente des Pfads
    pub fn segments(&self) -> Vec<Segment> {
        segments(&self.points, self.source_horizontal)
    }
}

/// Ein Segment zwischen zwei aufeinanderfolgenden Ankerpunkten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Startpunkt (in Laufrichtung)
    pub start: Vec2,
    /// Endpunkt
    pub end: Vec2,
    /// Orientierung laut Parität
    pub horizontal: bool,
}

impl Segment {
    /// Länge des Segments
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Zerlegt eine Ankerliste in Segmente.
pub fn segments(points: &[Vec2], source_horizontal: bool) -> Vec<Segment> {
    points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Segment {
            start: pair[0],
            end: pair[1],
            horizontal: is_segment_horizontal(source_horizontal, i),
        })
        .collect()
}

/// Ankerliste einer Connection; `None`, wenn ein Anker nicht auflösbar ist.
pub fn path_points(
    doc: &GraphDocument,
    positions: &dyn ConnectorPositionProvider,
    connection: ConnectionId,
) -> Option<Vec<Vec2>> {
    let conn = doc.connection(connection)?;
    let source = positions.connector_position(doc, conn.source())?;
    let target = positions.connector_position(doc, conn.target())?;
    let joints = doc.joint_positions(connection)?;

    let mut points = Vec::with_capacity(joints.len() + 2);
    points.push(source);
    points.extend(joints);
    points.push(target);
    Some(points)
}

/// Vollständiger Pfad inkl. Z-Index und Parität.
pub fn connection_path(
    doc: &GraphDocument,
    positions: &dyn ConnectorPositionProvider,
    connection: ConnectionId,
) -> Option<ConnectionPath> {
    Some(ConnectionPath {
        id: connection,
        z_index: doc.connection_z_index(connection)?,
        source_horizontal: source_is_horizontal(doc, connection)?,
        points: path_points(doc, positions, connection)?,
    })
}
