//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und `routing` gemeinsam nutzen.

pub mod options;

pub use options::{CrossingStyle, EditorOptions, IntersectionFilter};
