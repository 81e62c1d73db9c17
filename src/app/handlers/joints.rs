//! Handler für das Einfügen von Joints.

use crate::app::use_cases;
use crate::app::EditorState;
use crate::core::ConnectionId;
use glam::Vec2;

/// Startet den Joint-Insert.
pub fn begin_insert(state: &mut EditorState, connection: ConnectionId, position: Vec2, tolerance: f32) {
    use_cases::joints::begin_joint_insert(state, connection, position, tolerance);
}

/// Zieht das neue Joint-Paar.
pub fn update_insert(state: &mut EditorState, position: Vec2) {
    use_cases::joints::update_joint_insert(state, position);
}

/// Übernimmt den Joint-Insert.
pub fn end_insert(state: &mut EditorState) {
    use_cases::joints::end_joint_insert(state);
}
