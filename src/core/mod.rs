//! Core-Domänentypen: Nodes, Connectors, Connections, Joints und das Graph-Dokument.

pub mod connection;
pub mod connector;
/// Graph-Dokument als Aggregat-Wurzel
///
/// Besitzt alle Elemente in Arenen; Rückverweise sind ID-Lookups:
/// - Node → Connectors
/// - Connector → Node, Connections
/// - Connection → Connectors, Joints
pub mod document;
pub mod geometry;
pub mod ids;
pub mod node;
pub mod selectable;
pub mod view;

pub use connection::{Connection, Joint};
pub use connector::{Connector, ConnectorKind, ConnectorPolarity, ConnectorSide};
pub use document::{DetachedElement, GraphDocument, DEFAULT_CONTENT_SIZE};
pub use geometry::{ConnectorPositionProvider, DocumentGeometry, Rect};
pub use ids::{ConnectionId, ConnectorId, JointId, NodeId};
pub use node::GraphNode;
pub use selectable::{GraphElement, PropertyKey, PropertyValue, Selectable};
pub use view::ViewTransform;
