//! Use-Case-Funktionen für Ansicht und Optionen.

use crate::app::gesture::{GestureKind, GestureOwner, PointerPhase};
use crate::app::EditorState;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Startet das Verschieben der Ansicht.
pub fn begin_pan(state: &mut EditorState) -> bool {
    state
        .gestures
        .activate(GestureKind::Pan, PointerPhase::Pressed, GestureOwner::Canvas)
}

/// Verschiebt die Ansicht um ein Bildschirm-Delta, solange der Pan aktiv ist.
pub fn pan(state: &mut EditorState, delta: Vec2) {
    if state.gestures.active() == Some((GestureKind::Pan, GestureOwner::Canvas)) {
        state.view.pan(delta);
    }
}

/// Beendet das Verschieben.
pub fn end_pan(state: &mut EditorState) {
    state.gestures.finish(GestureKind::Pan, GestureOwner::Canvas);
}

/// Zoomt um `pivot` (Bildschirm-Koordinaten); abgelehnt während anderer Gesten.
pub fn zoom(state: &mut EditorState, factor: f32, pivot: Vec2) {
    if !state
        .gestures
        .activate(GestureKind::Zoom, PointerPhase::Scrolled, GestureOwner::Canvas)
    {
        log::debug!("Zoom abgelehnt: andere Geste aktiv");
        return;
    }
    state.view.zoom_at(factor, pivot);
}

/// Übernimmt neue Optionen nach Prüfung.
pub fn apply_options(state: &mut EditorState, options: EditorOptions) -> anyhow::Result<()> {
    options.validate()?;
    state.history.set_max_depth(options.history_max_depth);
    state.options = options;
    log::info!("Optionen übernommen");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_only_moves_while_granted() {
        let mut state = EditorState::new();
        pan(&mut state, Vec2::new(10.0, 0.0));
        assert_eq!(state.view.offset, Vec2::ZERO);

        assert!(begin_pan(&mut state));
        pan(&mut state, Vec2::new(10.0, 0.0));
        end_pan(&mut state);
        assert_eq!(state.view.offset, Vec2::new(-10.0, 0.0));
        assert!(!state.gestures.is_busy());
    }

    #[test]
    fn zoom_does_not_latch_the_gesture() {
        let mut state = EditorState::new();
        zoom(&mut state, 2.0, Vec2::ZERO);
        assert_eq!(state.view.scale, 2.0);
        assert!(!state.gestures.is_busy());
    }

    #[test]
    fn zoom_is_refused_during_pan() {
        let mut state = EditorState::new();
        assert!(begin_pan(&mut state));
        zoom(&mut state, 2.0, Vec2::ZERO);
        assert_eq!(state.view.scale, 1.0);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let mut state = EditorState::new();
        let options = EditorOptions {
            history_max_depth: 0,
            ..EditorOptions::default()
        };
        assert!(apply_options(&mut state, options).is_err());
        assert_eq!(state.options, EditorOptions::default());
    }
}
