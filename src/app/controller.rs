//! Editor-Controller für zentrale Event-Verarbeitung.

use crate::routing::{ConnectionPath, ConnectionRenderer};
use super::{EditorAction, EditorIntent, EditorState};

/// Orchestriert Eingabe-Events und Use-Cases auf den EditorState.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Action Mapping.
    pub fn handle_intent(&mut self, state: &mut EditorState, intent: EditorIntent) -> anyhow::Result<()> {
        let actions = self.map_intent_to_actions(state, intent);
        for action in actions {
            self.handle_action(state, action)?;
        }

        Ok(())
    }

    fn map_intent_to_actions(&self, state: &EditorState, intent: EditorIntent) -> Vec<EditorAction> {
        super::intent_mapping::map_intent_to_actions(state, intent)
    }

    /// Führt mutierende Actions auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_action(&mut self, state: &mut EditorState, action: EditorAction) -> anyhow::Result<()> {
        use super::handlers;

        match action {
            // === Selektion ===
            EditorAction::SelectItem { item, shortcut } => {
                handlers::selection::select_item(state, item, shortcut)
            }
            EditorAction::SelectAll => handlers::selection::select_all(state),
            EditorAction::ClearSelection => handlers::selection::clear(state),
            EditorAction::BeginMarquee { position, shortcut } => {
                handlers::selection::begin_marquee(state, position, shortcut)
            }
            EditorAction::UpdateMarquee { position } => {
                handlers::selection::update_marquee(state, position)
            }
            EditorAction::EndMarquee => handlers::selection::end_marquee(state),

            // === Verschieben ===
            EditorAction::BeginMove { master, position } => {
                handlers::selection::begin_move(state, master, position)
            }
            EditorAction::UpdateMove { position } => handlers::selection::update_move(state, position),
            EditorAction::EndMove => handlers::selection::end_move(state),

            // === Größenänderung ===
            EditorAction::BeginResize {
                node,
                handle,
                position,
            } => handlers::resize::begin(state, node, handle, position),
            EditorAction::UpdateResize { position } => handlers::resize::update(state, position),
            EditorAction::EndResize => handlers::resize::end(state),

            // === Connector-Drag ===
            EditorAction::PressConnector { connector } => handlers::connect::press(state, connector),
            EditorAction::DragConnector { position } => handlers::connect::drag(state, position),
            EditorAction::EnterConnector { connector } => handlers::connect::enter(state, connector),
            EditorAction::ExitConnector {
                connector,
                position,
            } => handlers::connect::exit(state, connector, position),
            EditorAction::ReleaseConnector { over } => handlers::connect::release(state, over),

            // === Joint-Insert ===
            EditorAction::BeginJointInsert {
                connection,
                position,
                tolerance,
            } => handlers::joints::begin_insert(state, connection, position, tolerance),
            EditorAction::UpdateJointInsert { position } => {
                handlers::joints::update_insert(state, position)
            }
            EditorAction::EndJointInsert => handlers::joints::end_insert(state),

            // === Editing ===
            EditorAction::AddNode {
                kind,
                position,
                connectors,
            } => handlers::editing::add_node(state, &kind, position, &connectors),
            EditorAction::DeleteSelected => handlers::editing::delete_selected(state),
            EditorAction::ClearDocument => handlers::editing::clear_document(state),
            EditorAction::ClearConnectors => handlers::editing::clear_connectors(state),
            EditorAction::CancelGesture => handlers::editing::cancel_gesture(state),

            // === History ===
            EditorAction::Undo => handlers::history::undo(state),
            EditorAction::Redo => handlers::history::redo(state),

            // === Ansicht & Optionen ===
            EditorAction::BeginPan => handlers::view::begin_pan(state),
            EditorAction::Pan { delta } => handlers::view::pan(state, delta),
            EditorAction::EndPan => handlers::view::end_pan(state),
            EditorAction::Zoom { factor, pivot } => handlers::view::zoom(state, factor, pivot),
            EditorAction::ApplyOptions { options } => handlers::view::apply_options(state, *options)?,
        }

        Ok(())
    }

    /// Berechnet und zeichnet alle Connections des aktuellen Frames.
    pub fn route_frame(&self, state: &EditorState, renderer: &mut dyn ConnectionRenderer) -> Vec<ConnectionPath> {
        state.route_frame(renderer)
    }
}
