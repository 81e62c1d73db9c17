//! Use-Case: Joints durch Ziehen an einem Segment einfügen.

use crate::app::commands::builders;
use crate::app::gesture::{GestureKind, GestureOwner, PointerPhase};
use crate::app::EditorState;
use crate::core::{ConnectionId, Selectable};
use crate::routing::{path_points, source_is_horizontal, JointInsertion};
use glam::Vec2;

fn owner(connection: ConnectionId) -> GestureOwner {
    GestureOwner::Element(Selectable::Connection(connection))
}

/// Startet den Joint-Insert, falls `position` nahe an einem Segment liegt.
///
/// `tolerance` ist bereits in Dokument-Einheiten umgerechnet.
pub fn begin_joint_insert(state: &mut EditorState, connection: ConnectionId, position: Vec2, tolerance: f32) {
    let (Some(points), Some(source_horizontal)) = (
        path_points(&state.document, state.positions.as_ref(), connection),
        source_is_horizontal(&state.document, connection),
    ) else {
        return;
    };
    if !state
        .gestures
        .activate(GestureKind::Move, PointerPhase::Pressed, owner(connection))
    {
        log::debug!("Joint-Insert abgelehnt: andere Geste aktiv");
        return;
    }
    match JointInsertion::begin(connection, points, source_horizontal, position, tolerance) {
        Some(insertion) => state.joint_insertion = Some(insertion),
        None => {
            state.gestures.finish(GestureKind::Move, owner(connection));
        }
    }
}

/// Verschiebt das neue Joint-Paar.
pub fn update_joint_insert(state: &mut EditorState, position: Vec2) {
    if let Some(insertion) = state.joint_insertion.as_mut() {
        insertion.drag(position);
    }
}

/// Übernimmt den neuen Joint-Satz als ein Command.
pub fn end_joint_insert(state: &mut EditorState) {
    let Some(insertion) = state.joint_insertion.take() else {
        return;
    };
    let connection = insertion.connection();
    state.gestures.finish(GestureKind::Move, owner(connection));

    let Some(joints) = insertion.finish() else {
        return;
    };
    let Some((source, target)) = state
        .document
        .connection(connection)
        .map(|c| (c.source(), c.target()))
    else {
        return;
    };
    let fallback = state.validator.create_joint_type(&state.document, source, target);
    if let Some(command) = builders::replace_joints(&mut state.document, connection, &joints, &fallback) {
        if state.history.execute(&mut state.document, Box::new(command)) {
            log::info!("{}: {} Joints nach Einfügen", connection, joints.len());
        }
    }
}

/// Bricht den Joint-Insert ohne Änderung ab.
pub fn cancel_joint_insert(state: &mut EditorState) {
    if let Some(insertion) = state.joint_insertion.take() {
        state.gestures.release_orphaned(owner(insertion.connection()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::builders::ConnectorSpec;

    fn setup() -> (EditorState, ConnectionId) {
        let mut state = EditorState::new();
        let specs = [
            ConnectorSpec::new("left-input", Vec2::new(0.0, 10.0), true),
            ConnectorSpec::new("right-output", Vec2::new(40.0, 10.0), true),
        ];
        let (_, a, add_a) = builders::add_node(&mut state.document, "box", Vec2::ZERO, Vec2::new(40.0, 20.0), &specs);
        let (_, b, add_b) = builders::add_node(
            &mut state.document,
            "box",
            Vec2::new(200.0, 100.0),
            Vec2::new(40.0, 20.0),
            &specs,
        );
        assert!(state.history.execute(&mut state.document, Box::new(add_a)));
        assert!(state.history.execute(&mut state.document, Box::new(add_b)));
        let (connection, connect) = builders::add_connection(
            &mut state.document,
            "connection",
            a[1],
            b[0],
            "joint",
            &[Vec2::new(120.0, 10.0), Vec2::new(120.0, 110.0)],
        );
        assert!(state.history.execute(&mut state.document, Box::new(connect)));
        (state, connection)
    }

    #[test]
    fn dragging_a_segment_inserts_a_step() {
        let (mut state, connection) = setup();

        begin_joint_insert(&mut state, connection, Vec2::new(80.0, 12.0), 5.0);
        assert!(state.gestures.is_active(GestureKind::Move));
        update_joint_insert(&mut state, Vec2::new(80.0, 42.0));
        end_joint_insert(&mut state);

        assert!(!state.gestures.is_busy());
        assert_eq!(
            state.document.joint_positions(connection),
            Some(vec![
                Vec2::new(80.0, 10.0),
                Vec2::new(80.0, 40.0),
                Vec2::new(120.0, 40.0),
                Vec2::new(120.0, 110.0),
            ])
        );

        assert!(state.history.undo(&mut state.document));
        assert_eq!(
            state.document.joint_positions(connection),
            Some(vec![Vec2::new(120.0, 10.0), Vec2::new(120.0, 110.0)])
        );
    }

    #[test]
    fn click_without_movement_changes_nothing() {
        let (mut state, connection) = setup();
        let depth = state.history.undo_depth();

        begin_joint_insert(&mut state, connection, Vec2::new(80.0, 12.0), 5.0);
        end_joint_insert(&mut state);

        assert_eq!(state.history.undo_depth(), depth);
        assert_eq!(state.document.joint_positions(connection).map(|j| j.len()), Some(2));
    }

    #[test]
    fn press_far_from_path_does_not_start() {
        let (mut state, connection) = setup();
        begin_joint_insert(&mut state, connection, Vec2::new(80.0, 60.0), 5.0);
        assert!(state.joint_insertion.is_none());
        assert!(!state.gestures.is_busy());
    }
}
