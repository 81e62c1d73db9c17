//! Use-Case: Selektierte Elemente löschen.

use crate::app::commands::{builders, CompoundCommand};
use crate::app::EditorState;
use crate::core::{ConnectionId, ConnectorPositionProvider, GraphDocument, JointId, NodeId, Selectable};
use crate::routing::{align_endpoints, is_segment_horizontal, path_points, source_is_horizontal};
use glam::Vec2;

/// Löscht alle selektierten Nodes, Connections und Joints als ein Command.
///
/// Connections an gelöschten Nodes und Joints gelöschter Connections werden
/// nicht doppelt entfernt. Joints verschwinden paarweise, damit der Pfad
/// orthogonal bleibt.
pub fn delete_selected(state: &mut EditorState) {
    if state.selection.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }
    let mut nodes: Vec<NodeId> = Vec::new();
    let mut connections: Vec<ConnectionId> = Vec::new();
    let mut joints: Vec<JointId> = Vec::new();
    for item in state.selection.items() {
        match item {
            Selectable::Node(id) => nodes.push(id),
            Selectable::Connection(id) => connections.push(id),
            Selectable::Joint(id) => joints.push(id),
            Selectable::Connector(_) => {}
        }
    }

    let doc = &state.document;
    let mut removed: Vec<ConnectionId> = nodes.iter().flat_map(|n| doc.connections_of_node(*n)).collect();
    let mut compound = CompoundCommand::new("Selektion löschen");
    if let Some(command) = builders::remove_nodes(doc, &nodes) {
        compound.push(command);
    }
    for connection in connections {
        if doc.connection(connection).is_some() && !removed.contains(&connection) {
            compound.push(builders::remove_connection(connection));
            removed.push(connection);
        }
    }

    // Joints nach Connection gruppieren, damit Indizes zum Ausgangszustand passen
    let mut by_connection: Vec<(ConnectionId, Vec<usize>)> = Vec::new();
    for joint in joints {
        let Some(connection) = doc.joint(joint).map(|j| j.connection) else {
            continue;
        };
        if removed.contains(&connection) {
            continue;
        }
        let Some(index) = doc
            .connection(connection)
            .and_then(|c| c.joints.iter().position(|j| *j == joint))
        else {
            continue;
        };
        match by_connection.iter_mut().find(|(c, _)| *c == connection) {
            Some((_, indices)) => indices.push(index),
            None => by_connection.push((connection, vec![index])),
        }
    }
    for (connection, indices) in &by_connection {
        if let Some(command) = remove_joint_pairs(doc, state.positions.as_ref(), *connection, indices) {
            compound.push(command);
        }
    }

    if compound.is_empty() {
        return;
    }
    if state.history.execute(&mut state.document, Box::new(compound)) {
        log::info!("Selektion gelöscht ({} Nodes)", nodes.len());
    } else {
        log::warn!("Löschen der Selektion fehlgeschlagen");
    }
    state.selection.prune(&state.document);
}

/// Entfernt die Joints `indices` samt Partner (0/1, 2/3, …) und zieht die
/// verbleibenden Joints über die Lücke gerade.
fn remove_joint_pairs(
    doc: &GraphDocument,
    positions: &dyn ConnectorPositionProvider,
    connection: ConnectionId,
    indices: &[usize],
) -> Option<CompoundCommand> {
    let joints = doc.connection(connection)?.joints.clone();
    let mut doomed: Vec<usize> = Vec::with_capacity(indices.len() * 2);
    for &index in indices.iter().filter(|i| **i < joints.len()) {
        doomed.push(index);
        let partner = index ^ 1;
        if partner < joints.len() {
            doomed.push(partner);
        } else if index > 0 {
            doomed.push(index - 1);
        }
    }
    doomed.sort_unstable();
    doomed.dedup();

    let mut compound = builders::remove_joints(doc, connection, &doomed)?;

    let (Some(points), Some(horizontal)) = (
        path_points(doc, positions, connection),
        source_is_horizontal(doc, connection),
    ) else {
        return Some(compound);
    };
    // Punktindex 0 ist der Source-Anker, Joint i liegt auf Punkt i + 1
    let mut kept: Vec<(Option<JointId>, bool, Vec2)> = vec![(None, false, points[0])];
    for (i, joint) in joints.iter().enumerate() {
        if !doomed.contains(&i) {
            let gap_before = i > 0 && doomed.contains(&(i - 1));
            kept.push((Some(*joint), gap_before, points[i + 1]));
        }
    }
    kept.push((None, false, points[points.len() - 1]));

    let mut remaining: Vec<Vec2> = kept.iter().map(|(_, _, p)| *p).collect();
    for k in 1..remaining.len() - 1 {
        if kept[k].1 {
            let axis = if is_segment_horizontal(horizontal, k - 1) { 1 } else { 0 };
            remaining[k][axis] = remaining[k - 1][axis];
        }
    }
    align_endpoints(&mut remaining, horizontal, &[]);

    let moves: Vec<(Selectable, Vec2)> = kept
        .iter()
        .zip(&remaining)
        .filter_map(|((joint, _, _), position)| joint.map(|j| (Selectable::Joint(j), *position)))
        .collect();
    if let Some(command) = builders::move_elements(doc, &moves) {
        compound.push(command);
    }
    Some(compound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::builders::ConnectorSpec;
    use glam::Vec2;

    fn connected(state: &mut EditorState) -> (NodeId, NodeId, ConnectionId) {
        let specs = [
            ConnectorSpec::new("left-input", Vec2::new(0.0, 10.0), true),
            ConnectorSpec::new("right-output", Vec2::new(40.0, 10.0), true),
        ];
        let (a, a_conn, add_a) = builders::add_node(&mut state.document, "box", Vec2::ZERO, Vec2::new(40.0, 20.0), &specs);
        let (b, b_conn, add_b) = builders::add_node(
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
            a_conn[1],
            b_conn[0],
            "joint",
            &[Vec2::new(120.0, 10.0), Vec2::new(120.0, 110.0)],
        );
        assert!(state.history.execute(&mut state.document, Box::new(connect)));
        (a, b, connection)
    }

    #[test]
    fn deleting_a_node_takes_its_connections_along() {
        let mut state = EditorState::new();
        let (a, b, connection) = connected(&mut state);
        state.selection.select(a.into());
        state.selection.select(connection.into());

        delete_selected(&mut state);

        assert!(state.document.node(a).is_none());
        assert!(state.document.node(b).is_some());
        assert_eq!(state.document.connection_count(), 0);
        assert!(state.selection.is_empty());
        assert!(state.document.is_consistent());

        assert!(state.history.undo(&mut state.document));
        assert!(state.document.connection(connection).is_some());
        assert_eq!(state.document.joint_positions(connection).map(|j| j.len()), Some(2));
    }

    #[test]
    fn joints_are_removed_in_pairs() {
        let mut state = EditorState::new();
        let (_, _, connection) = connected(&mut state);
        let joints = state.document.connection(connection).map(|c| c.joints.clone()).expect("Connection vorhanden");
        state.selection.select(joints[1].into());

        delete_selected(&mut state);

        assert_eq!(state.document.joint_positions(connection), Some(vec![]));
        assert!(state.selection.is_empty());
        assert!(state.document.is_consistent());
    }

    #[test]
    fn remaining_joints_close_the_gap_orthogonally() {
        let mut state = EditorState::new();
        let (_, _, connection) = connected(&mut state);
        let stairs = [
            Vec2::new(80.0, 10.0),
            Vec2::new(80.0, 60.0),
            Vec2::new(160.0, 60.0),
            Vec2::new(160.0, 110.0),
        ];
        let replace = builders::replace_joints(&mut state.document, connection, &stairs, "joint").expect("Connection vorhanden");
        assert!(state.history.execute(&mut state.document, Box::new(replace)));
        let before = state.document.clone();
        let joints = state.document.connection(connection).map(|c| c.joints.clone()).expect("Connection vorhanden");
        state.selection.select(joints[1].into());

        delete_selected(&mut state);

        assert_eq!(
            state.document.joint_positions(connection),
            Some(vec![Vec2::new(160.0, 10.0), Vec2::new(160.0, 110.0)])
        );
        assert!(state.document.is_consistent());

        assert!(state.history.undo(&mut state.document));
        assert_eq!(state.document, before);
    }
}
