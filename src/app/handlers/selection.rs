//! Handler für Selektions- und Verschiebe-Operationen.

use crate::app::use_cases;
use crate::app::EditorState;
use crate::core::Selectable;
use glam::Vec2;

/// Klick-Selektion eines Elements.
pub fn select_item(state: &mut EditorState, item: Selectable, shortcut: bool) {
    use_cases::selection::select_item(state, item, shortcut);
}

/// Selektiert alles.
pub fn select_all(state: &mut EditorState) {
    use_cases::selection::select_all(state);
    log::info!("{} Elemente selektiert", state.selection.len());
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut EditorState) {
    use_cases::selection::clear_selection(state);
}

/// Startet die Rahmen-Selektion.
pub fn begin_marquee(state: &mut EditorState, position: Vec2, shortcut: bool) {
    use_cases::selection::begin_marquee(state, position, shortcut);
}

/// Aktualisiert die Rahmen-Selektion.
pub fn update_marquee(state: &mut EditorState, position: Vec2) {
    use_cases::selection::update_marquee(state, position);
}

/// Beendet die Rahmen-Selektion.
pub fn end_marquee(state: &mut EditorState) {
    use_cases::selection::end_marquee(state);
}

/// Startet den Gruppen-Drag.
pub fn begin_move(state: &mut EditorState, master: Selectable, position: Vec2) {
    use_cases::selection::begin_move(state, master, position);
}

/// Aktualisiert den Gruppen-Drag.
pub fn update_move(state: &mut EditorState, position: Vec2) {
    use_cases::selection::update_move(state, position);
}

/// Übernimmt den Gruppen-Drag.
pub fn end_move(state: &mut EditorState) {
    use_cases::selection::end_move(state);
}
