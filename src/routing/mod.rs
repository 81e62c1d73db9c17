//! Orthogonales Routing von Connections.
//!
//! Aufgeteilt nach Teilaufgabe:
//! - `parity`: Orientierung der Segmente ab dem Source-Connector
//! - `path`: Ankerliste und Segmente einer Connection
//! - `align`: Endpunkt-Ausrichtung und orthogonale Nachführung
//! - `cleanup`: Entfernen deckungsgleicher Joint-Paare
//! - `intersections`: Kreuzungen mit anderen Connections
//! - `joint_insert`: Joints durch Ziehen an einem Segment einfügen
//! - `guides`: Einrast-Ziele beim Joint-Drag
//! - `frame`: Zwei-Phasen-Update/Draw für die Darstellung

pub mod align;
pub mod cleanup;
pub mod frame;
pub mod guides;
pub mod intersections;
pub mod joint_insert;
pub mod parity;
pub mod path;

pub use align::{align_endpoints, constrain_joint_move, realign_connection};
pub use cleanup::{cleaned_points, redundant_joints};
pub use frame::{route_frame, ConnectionRenderer, FrameSettings};
pub use guides::{alignment_targets, snap_to_targets, AlignmentTargets};
pub use intersections::{find_intersections, SegmentCrossings};
pub use joint_insert::{nearest_segment, JointInsertion, SegmentHit};
pub use parity::{is_segment_horizontal, source_is_horizontal};
pub use path::{connection_path, path_points, segments, ConnectionPath, Segment};
