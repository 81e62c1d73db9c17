//! Use-Case: Größenänderung eines Nodes über seine Griffe.

use crate::app::commands::{builders, CompoundCommand};
use crate::app::gesture::{GestureKind, PointerPhase};
use crate::app::state::{NodeResize, ResizeHandle};
use crate::app::EditorState;
use crate::core::{NodeId, PropertyValue, Rect, Selectable};
use crate::routing::{realign_connection, source_is_horizontal};
use glam::Vec2;

/// Neues Rechteck `(position, size)` für die Zeigerposition `pointer`.
///
/// Die gegenüberliegende Kante bleibt fest; `min_size` und `bounds` begrenzen.
pub fn resized_rect(resize: &NodeResize, pointer: Vec2, min_size: Vec2, bounds: Rect) -> (Vec2, Vec2) {
    let delta = pointer - resize.pointer_start;
    let mut min = resize.start_position;
    let mut max = resize.start_position + resize.start_size;
    let handle = resize.handle;

    if handle.moves_left() {
        min.x = (min.x + delta.x).max(bounds.min.x).min(max.x - min_size.x);
    }
    if handle.moves_right() {
        max.x = (max.x + delta.x).min(bounds.max.x).max(min.x + min_size.x);
    }
    if handle.moves_top() {
        min.y = (min.y + delta.y).max(bounds.min.y).min(max.y - min_size.y);
    }
    if handle.moves_bottom() {
        max.y = (max.y + delta.y).min(bounds.max.y).max(min.y + min_size.y);
    }
    (min, max - min)
}

/// Startet die Größenänderung.
pub fn begin_resize(state: &mut EditorState, node: NodeId, handle: ResizeHandle, position: Vec2) {
    let Some(current) = state.document.node(node) else {
        return;
    };
    let (start_position, start_size) = (current.position, current.size());
    let joint_starts: Vec<(Selectable, Vec2)> = state
        .document
        .connections_of_node(node)
        .into_iter()
        .filter_map(|c| state.document.connection(c))
        .flat_map(|c| c.joints.iter().copied())
        .filter_map(|joint| {
            let item = Selectable::Joint(joint);
            state.document.position_of(item).map(|p| (item, p))
        })
        .collect();

    let resize = NodeResize {
        node,
        handle,
        pointer_start: position,
        start_position,
        start_size,
        joint_starts,
    };
    if !state
        .gestures
        .activate(GestureKind::Resize, PointerPhase::Pressed, resize.owner())
    {
        log::debug!("Resize abgelehnt: andere Geste aktiv");
        return;
    }
    state.resize = Some(resize);
}

/// Setzt Position und Größe transient und richtet angehängte Connections aus.
pub fn update_resize(state: &mut EditorState, position: Vec2) {
    let Some(resize) = state.resize.as_ref() else {
        return;
    };
    let (new_position, new_size) = resized_rect(
        resize,
        position,
        state.options.min_node_size(),
        state.document.content_bounds(),
    );
    let node = Selectable::Node(resize.node);
    let _ = state.document.set_property(node, PropertyValue::Position(new_position));
    let _ = state.document.set_property(node, PropertyValue::Size(new_size));

    for connection in state.document.connections_of_node(resize.node) {
        if let Some(source_horizontal) = source_is_horizontal(&state.document, connection) {
            realign_connection(
                &mut state.document,
                state.positions.as_ref(),
                connection,
                source_horizontal,
                &[],
            );
        }
    }
}

/// Übernimmt Größe und nachgeführte Joints als ein Command.
pub fn end_resize(state: &mut EditorState) {
    let Some(resize) = state.resize.take() else {
        return;
    };
    let (end_position, end_size) = state
        .document
        .node(resize.node)
        .map_or((resize.start_position, resize.start_size), |n| (n.position, n.size()));
    let joint_moves: Vec<(Selectable, Vec2)> = resize
        .joint_starts
        .iter()
        .filter_map(|(item, _)| state.document.position_of(*item).map(|p| (*item, p)))
        .collect();
    restore(state, &resize);

    let mut compound = CompoundCommand::new("Node skalieren");
    if let Some(command) = builders::resize_node(&state.document, resize.node, end_position, end_size) {
        compound.push(command);
    }
    if let Some(command) = builders::move_elements(&state.document, &joint_moves) {
        compound.push(command);
    }
    if !compound.is_empty() && state.history.execute(&mut state.document, Box::new(compound)) {
        log::info!("{} skaliert auf {:?}", resize.node, end_size);
    }
    state.gestures.finish(GestureKind::Resize, resize.owner());
}

/// Bricht die Größenänderung ab.
pub fn cancel_resize(state: &mut EditorState) {
    if let Some(resize) = state.resize.take() {
        restore(state, &resize);
        state.gestures.release_orphaned(resize.owner());
    }
}

fn restore(state: &mut EditorState, resize: &NodeResize) {
    let node = Selectable::Node(resize.node);
    let _ = state
        .document
        .set_property(node, PropertyValue::Position(resize.start_position));
    let _ = state.document.set_property(node, PropertyValue::Size(resize.start_size));
    for (item, start) in &resize.joint_starts {
        let _ = state.document.set_property(*item, PropertyValue::Position(*start));
    }
}
