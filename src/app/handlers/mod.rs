//! Feature-Handler für EditorAction-Verarbeitung.
//!
//! Jeder Handler gruppiert die Action-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod connect;
pub mod editing;
pub mod history;
pub mod joints;
pub mod resize;
pub mod selection;
pub mod view;
