//! Use-Case: Connections durch Ziehen an Connectors erstellen und lösen.

use crate::app::connector_drag::{ConnectorDrag, DragContext, HoverState};
use crate::app::EditorState;
use crate::core::{ConnectionId, ConnectorId};
use glam::Vec2;

/// Baut den Kontext aus disjunkten Feldern des Zustands.
fn with_drag<R>(state: &mut EditorState, f: impl FnOnce(&mut ConnectorDrag, &mut DragContext<'_>) -> R) -> R {
    let mut ctx = DragContext {
        doc: &mut state.document,
        history: &mut state.history,
        gestures: &mut state.gestures,
        positions: state.positions.as_ref(),
        validator: state.validator.as_ref(),
    };
    f(&mut state.connector_drag, &mut ctx)
}

/// Zeiger auf einem Connector gedrückt.
pub fn press_connector(state: &mut EditorState, connector: ConnectorId) -> bool {
    with_drag(state, |drag, ctx| drag.press(ctx, connector))
}

/// Zeiger bewegt. Löst ggf. bestehende Connections vom gedrückten Connector.
pub fn drag_connector(state: &mut EditorState, position: Vec2) {
    let before = state.document.connection_count();
    with_drag(state, |drag, ctx| drag.drag(ctx, position));
    if state.document.connection_count() != before {
        state.selection.prune(&state.document);
    }
}

/// Zeiger betritt einen Kandidaten-Connector (oder erneut den gedrückten).
pub fn enter_connector(state: &mut EditorState, connector: ConnectorId) -> Option<HoverState> {
    let before = state.document.connection_count();
    let hover = with_drag(state, |drag, ctx| drag.enter(ctx, connector));
    if state.document.connection_count() != before {
        state.selection.prune(&state.document);
    }
    hover
}

/// Zeiger verlässt einen Kandidaten-Connector.
pub fn exit_connector(state: &mut EditorState, connector: ConnectorId, position: Vec2) {
    state.connector_drag.exit(connector, position);
}

/// Zeiger losgelassen; erzeugt die Connection bei gültigem Ziel.
pub fn release_connector(state: &mut EditorState, over: Option<ConnectorId>) -> Option<ConnectionId> {
    with_drag(state, |drag, ctx| drag.release(ctx, over))
}
