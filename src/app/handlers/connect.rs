//! Handler für das Ziehen von Connections.

use crate::app::use_cases;
use crate::app::EditorState;
use crate::core::ConnectorId;
use glam::Vec2;

/// Connector gedrückt.
pub fn press(state: &mut EditorState, connector: ConnectorId) {
    if !use_cases::connect::press_connector(state, connector) {
        log::debug!("Connector-Drag an {} nicht gestartet", connector);
    }
}

/// Tail gezogen.
pub fn drag(state: &mut EditorState, position: Vec2) {
    use_cases::connect::drag_connector(state, position);
}

/// Kandidat betreten.
pub fn enter(state: &mut EditorState, connector: ConnectorId) {
    if let Some(hover) = use_cases::connect::enter_connector(state, connector) {
        log::debug!("Kandidat {}: {:?}", connector, hover);
    }
}

/// Kandidat verlassen.
pub fn exit(state: &mut EditorState, connector: ConnectorId, position: Vec2) {
    use_cases::connect::exit_connector(state, connector, position);
}

/// Tail losgelassen.
pub fn release(state: &mut EditorState, over: Option<ConnectorId>) {
    use_cases::connect::release_connector(state, over);
}
