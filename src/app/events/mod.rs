//! EditorIntent- und EditorAction-Enums für den Intent/Action-Datenfluss.

mod action;
mod intent;

pub use action::EditorAction;
pub use intent::EditorIntent;
