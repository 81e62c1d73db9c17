//! Use-Case: Laufende Gesten abbrechen bzw. nach Strukturänderungen aufräumen.

use super::joints::cancel_joint_insert;
use super::resize::cancel_resize;
use super::selection::cancel_move;
use crate::app::gesture::{GestureKind, GestureOwner};
use crate::app::EditorState;

/// Verwirft jede laufende Geste ohne Änderung am Dokument.
pub fn cancel_all(state: &mut EditorState) {
    cancel_move(state);
    cancel_resize(state);
    cancel_joint_insert(state);
    if state.marquee.take().is_some() {
        state.gestures.finish(GestureKind::Select, GestureOwner::Canvas);
    }
    state.connector_drag.cancel(&mut state.gestures);
    state.gestures.finish(GestureKind::Pan, GestureOwner::Canvas);
    state.guides = Default::default();

    if let Some((gesture, owner)) = state.gestures.active() {
        log::debug!("Geste {:?} von {:?} bleibt aktiv (extern)", gesture, owner);
    }
}

/// Bricht Gesten ab, deren Element nicht mehr existiert (z.B. nach Undo).
pub fn abandon_dangling(state: &mut EditorState) {
    state
        .connector_drag
        .abandon_if_dangling(&state.document, &mut state.gestures);

    let move_gone = state
        .active_move
        .as_ref()
        .is_some_and(|m| !state.document.contains(m.drag.master()));
    if move_gone {
        cancel_move(state);
    }
    let resize_gone = state
        .resize
        .as_ref()
        .is_some_and(|r| state.document.node(r.node).is_none());
    if resize_gone {
        cancel_resize(state);
    }
    let insertion_gone = state
        .joint_insertion
        .as_ref()
        .is_some_and(|i| state.document.connection(i.connection()).is_none());
    if insertion_gone {
        cancel_joint_insert(state);
    }

    if let Some((_, owner @ GestureOwner::Element(item))) = state.gestures.active() {
        if !state.document.contains(item) {
            log::debug!("Verwaiste Geste von {} freigegeben", item);
            state.gestures.release_orphaned(owner);
        }
    }
    state.selection.prune(&state.document);
}
