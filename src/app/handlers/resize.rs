//! Handler für die Größenänderung von Nodes.

use crate::app::state::ResizeHandle;
use crate::app::use_cases;
use crate::app::EditorState;
use crate::core::NodeId;
use glam::Vec2;

/// Startet die Größenänderung.
pub fn begin(state: &mut EditorState, node: NodeId, handle: ResizeHandle, position: Vec2) {
    use_cases::resize::begin_resize(state, node, handle, position);
}

/// Aktualisiert die Größenänderung.
pub fn update(state: &mut EditorState, position: Vec2) {
    use_cases::resize::update_resize(state, position);
}

/// Übernimmt die Größenänderung.
pub fn end(state: &mut EditorState) {
    use_cases::resize::end_resize(state);
}
