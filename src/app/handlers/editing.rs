//! Handler für strukturelle Editier-Operationen.

use crate::app::commands::builders::ConnectorSpec;
use crate::app::use_cases;
use crate::app::EditorState;
use glam::Vec2;

/// Legt einen neuen Node an.
pub fn add_node(state: &mut EditorState, kind: &str, position: Vec2, connectors: &[ConnectorSpec]) {
    use_cases::editing::add_node(state, kind, position, connectors);
}

/// Löscht die Selektion und räumt verwaiste Gesten auf.
pub fn delete_selected(state: &mut EditorState) {
    use_cases::editing::delete_selected(state);
    use_cases::gestures::abandon_dangling(state);
}

/// Leert das Dokument.
pub fn clear_document(state: &mut EditorState) {
    use_cases::editing::clear_document(state);
    use_cases::gestures::abandon_dangling(state);
}

/// Entfernt die Connectors der selektierten Nodes.
pub fn clear_connectors(state: &mut EditorState) {
    use_cases::editing::clear_connectors(state);
    use_cases::gestures::abandon_dangling(state);
}

/// Verwirft jede laufende Geste.
pub fn cancel_gesture(state: &mut EditorState) {
    use_cases::gestures::cancel_all(state);
}
