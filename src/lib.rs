//! Graph-Editor-Engine.
//! Toolkit-unabhängiger Kern für Knoten/Connector/Connection-Editoren,
//! als Library exportiert für Darstellungsschichten, Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod routing;
pub mod shared;

pub use app::{
    CommandStack, CompoundCommand, ConnectionValidator, DefaultConnectionValidator, EditCommand,
    EditorAction, EditorController, EditorIntent, EditorState, GestureArbiter, GestureKind,
    GestureOwner, HoverState, SelectionSet,
};
pub use core::{
    Connection, ConnectionId, Connector, ConnectorId, ConnectorPositionProvider, DocumentGeometry,
    GraphDocument, GraphNode, Joint, JointId, NodeId, Rect, Selectable, ViewTransform,
};
pub use routing::{ConnectionPath, ConnectionRenderer};
pub use shared::{CrossingStyle, EditorOptions, IntersectionFilter};
