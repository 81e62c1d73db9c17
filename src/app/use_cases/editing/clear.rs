//! Use-Case: Dokument bzw. Connectors leeren.

use crate::app::commands::builders;
use crate::app::EditorState;

/// Entfernt alle Elemente als ein Command.
pub fn clear_document(state: &mut EditorState) {
    let Some(command) = builders::clear_document(&state.document) else {
        log::debug!("Dokument ist bereits leer");
        return;
    };
    if state.history.execute(&mut state.document, Box::new(command)) {
        log::info!("Dokument geleert");
    }
    state.selection.clear_selection();
}

/// Entfernt alle Connectors der selektierten Nodes samt ihren Connections.
pub fn clear_connectors(state: &mut EditorState) {
    let nodes = state.selection.node_ids();
    let Some(command) = builders::clear_connectors(&state.document, &nodes) else {
        return;
    };
    if state.history.execute(&mut state.document, Box::new(command)) {
        log::info!("Connectors von {} Nodes entfernt", nodes.len());
    }
    state.selection.prune(&state.document);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::builders::ConnectorSpec;
    use glam::Vec2;

    #[test]
    fn clear_document_is_one_undo_step() {
        let mut state = EditorState::new();
        let specs = [ConnectorSpec::new("right-output", Vec2::new(40.0, 10.0), true)];
        for x in [0.0, 100.0] {
            let (node, _, add) = builders::add_node(&mut state.document, "box", Vec2::new(x, 0.0), Vec2::splat(40.0), &specs);
            assert!(state.history.execute(&mut state.document, Box::new(add)));
            state.selection.select(node.into());
        }

        clear_document(&mut state);
        assert!(state.document.is_empty());
        assert!(state.selection.is_empty());

        assert!(state.history.undo(&mut state.document));
        assert_eq!(state.document.node_count(), 2);
        assert_eq!(state.document.connectors().count(), 2);
    }

    #[test]
    fn clear_connectors_keeps_nodes() {
        let mut state = EditorState::new();
        let specs = [ConnectorSpec::new("right-output", Vec2::new(40.0, 10.0), true)];
        let (node, _, add) = builders::add_node(&mut state.document, "box", Vec2::ZERO, Vec2::splat(40.0), &specs);
        assert!(state.history.execute(&mut state.document, Box::new(add)));
        state.selection.select(node.into());

        clear_connectors(&mut state);
        assert_eq!(state.document.node(node).map(|n| n.connectors.len()), Some(0));
        assert_eq!(state.document.connectors().count(), 0);
    }
}
