//! Use-Case: Klick-Selektion.

use crate::app::EditorState;
use crate::core::Selectable;

/// Klick auf ein Element: ohne Shortcut ersetzen, mit Shortcut umschalten.
pub fn select_item(state: &mut EditorState, item: Selectable, shortcut: bool) {
    if !state.document.contains(item) {
        log::debug!("Selektion: {} existiert nicht", item);
        return;
    }
    state.selection.click(item, shortcut);
}

/// Selektiert alle Nodes, Connections und Joints.
pub fn select_all(state: &mut EditorState) {
    state.selection.select_all(&state.document);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut EditorState) {
    state.selection.clear_selection();
}
