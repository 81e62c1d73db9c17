//! Use-Case-Funktionen für strukturelle Änderungen am Dokument.
//!
//! Aufgeteilt nach Operation:
//! - `add_node`: Neuen Node samt Connectors anlegen
//! - `delete`: Selektion löschen
//! - `clear`: Dokument bzw. Connectors leeren

mod add_node;
mod clear;
mod delete;

pub use add_node::add_node;
pub use clear::{clear_connectors, clear_document};
pub use delete::delete_selected;
