//! Handler für Undo/Redo-Operationen.

use crate::app::use_cases;
use crate::app::EditorState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Gesten, deren Element dabei verschwindet, werden still beendet.
pub fn undo(state: &mut EditorState) {
    if state.history.undo(&mut state.document) {
        use_cases::gestures::abandon_dangling(state);
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut EditorState) {
    if state.history.redo(&mut state.document) {
        use_cases::gestures::abandon_dangling(state);
    }
}
