//! Application-Layer: Controller, Session-State, Events und Use-Cases.

pub mod commands;
pub mod connector_drag;
pub mod controller;
pub mod events;
pub mod gesture;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod selection;
/// Editor-Sitzung und laufende Interaktionen
pub mod state;
pub mod use_cases;

pub use commands::{CompoundCommand, EditCommand};
pub use connector_drag::{ConnectionValidator, ConnectorDrag, DefaultConnectionValidator, HoverState};
pub use controller::EditorController;
pub use events::{EditorAction, EditorIntent};
pub use gesture::{GestureArbiter, GestureKind, GestureOwner, PointerPhase};
pub use history::{CommandStack, CommandStackEvent, StackChange};
pub use selection::{SelectionChange, SelectionSet};
pub use state::{EditorState, ResizeHandle};
