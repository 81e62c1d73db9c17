//! Handler für Ansicht und Optionen.

use crate::app::use_cases;
use crate::app::EditorState;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Startet das Verschieben der Ansicht.
pub fn begin_pan(state: &mut EditorState) {
    if !use_cases::viewport::begin_pan(state) {
        log::debug!("Pan abgelehnt: andere Geste aktiv");
    }
}

/// Verschiebt die Ansicht um ein Bildschirm-Delta.
pub fn pan(state: &mut EditorState, delta: Vec2) {
    use_cases::viewport::pan(state, delta);
}

/// Beendet das Verschieben der Ansicht.
pub fn end_pan(state: &mut EditorState) {
    use_cases::viewport::end_pan(state);
}

/// Zoomt um einen Bildschirmpunkt.
pub fn zoom(state: &mut EditorState, factor: f32, pivot: Vec2) {
    use_cases::viewport::zoom(state, factor, pivot);
}

/// Übernimmt neue Optionen.
pub fn apply_options(state: &mut EditorState, options: EditorOptions) -> anyhow::Result<()> {
    use_cases::viewport::apply_options(state, options)
}
