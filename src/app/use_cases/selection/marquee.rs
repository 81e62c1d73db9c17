//! Use-Case: Rahmen-Selektion.

use crate::app::gesture::{GestureKind, GestureOwner, PointerPhase};
use crate::app::selection::Marquee;
use crate::app::EditorState;
use glam::Vec2;

/// Startet die Rahmen-Selektion, sofern keine andere Geste läuft.
pub fn begin_marquee(state: &mut EditorState, position: Vec2, shortcut: bool) {
    if !state
        .gestures
        .activate(GestureKind::Select, PointerPhase::Pressed, GestureOwner::Canvas)
    {
        log::debug!("Rahmen-Selektion abgelehnt: andere Geste aktiv");
        return;
    }
    state.marquee = Some(Marquee::begin(&mut state.selection, position, shortcut));
}

/// Aktualisiert Rechteck und Selektion.
pub fn update_marquee(state: &mut EditorState, position: Vec2) {
    if let Some(marquee) = state.marquee.as_mut() {
        marquee.update(&state.document, &mut state.selection, position);
    }
}

/// Beendet die Rahmen-Selektion.
pub fn end_marquee(state: &mut EditorState) {
    if state.marquee.take().is_some() {
        state.gestures.finish(GestureKind::Select, GestureOwner::Canvas);
        log::debug!("Rahmen-Selektion: {} Elemente", state.selection.len());
    }
}
