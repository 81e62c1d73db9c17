//! Use-Case-Funktionen für Selektion und Verschieben.
//!
//! Aufgeteilt nach Interaktion:
//! - `click`: Klick-Selektion, alles/nichts selektieren
//! - `marquee`: Rahmen-Selektion auf leerer Zeichenfläche
//! - `move_selection`: Gruppen-Drag inkl. Nachführung der Connections

mod click;
mod marquee;
mod move_selection;

pub use click::{clear_selection, select_all, select_item};
pub use marquee::{begin_marquee, end_marquee, update_marquee};
pub use move_selection::{begin_move, cancel_move, end_move, update_move};
