//! Use-Case: Neuen Node an einer Dokumentposition hinzufügen.

use crate::app::commands::builders::{self, ConnectorSpec};
use crate::app::EditorState;
use crate::core::NodeId;
use glam::Vec2;

/// Legt einen Node mit Standardgröße an und selektiert ihn als einzigen.
///
/// Die Position wird so geklemmt, dass der Node im Inhaltsbereich liegt.
pub fn add_node(
    state: &mut EditorState,
    kind: &str,
    position: Vec2,
    connectors: &[ConnectorSpec],
) -> Option<NodeId> {
    let size = state.options.default_node_size();
    let limit = (state.document.content_size() - size).max(Vec2::ZERO);
    let position = position.clamp(Vec2::ZERO, limit);

    let (node, _, command) = builders::add_node(&mut state.document, kind, position, size, connectors);
    if !state.history.execute(&mut state.document, Box::new(command)) {
        log::warn!("Node '{}' konnte nicht angelegt werden", kind);
        return None;
    }
    state.selection.clear_selection();
    state.selection.select(node.into());

    log::info!(
        "Node {} ({}) an Position ({:.1}, {:.1}) hinzugefügt",
        node,
        kind,
        position.x,
        position.y
    );
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Selectable;

    #[test]
    fn new_node_is_selected_and_undoable() {
        let mut state = EditorState::new();
        let specs = [ConnectorSpec::new("right-output", Vec2::new(150.0, 50.0), true)];
        let node = add_node(&mut state, "box", Vec2::new(10.0, 20.0), &specs).expect("Node angelegt");

        assert!(state.selection.is_selected(Selectable::Node(node)));
        assert_eq!(state.document.node(node).map(|n| n.connectors.len()), Some(1));
        assert!(state.history.undo(&mut state.document));
        assert!(state.document.is_empty());
    }

    #[test]
    fn position_is_kept_inside_content() {
        let mut state = EditorState::new();
        let content = state.document.content_size();
        let node = add_node(&mut state, "box", content + Vec2::splat(50.0), &[]).expect("Node angelegt");

        let size = state.options.default_node_size();
        assert_eq!(state.document.node(node).map(|n| n.position), Some(content - size));
    }
}
