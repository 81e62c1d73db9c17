//! Mapping von Eingabe-Intents auf mutierende Editor-Actions.

use super::{EditorAction, EditorIntent, EditorState};
use crate::core::Selectable;

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorAction`s.
///
/// Zeigerpositionen werden dabei ins Dokument umgerechnet.
pub fn map_intent_to_actions(state: &EditorState, intent: EditorIntent) -> Vec<EditorAction> {
    let to_doc = |pointer| state.view.screen_to_document(pointer);

    match intent {
        EditorIntent::NodePressed {
            node,
            pointer,
            shortcut,
        } => press_draggable(Selectable::Node(node), to_doc(pointer), shortcut),
        EditorIntent::NodeDragged { pointer } | EditorIntent::JointDragged { pointer } => {
            vec![EditorAction::UpdateMove {
                position: to_doc(pointer),
            }]
        }
        EditorIntent::NodeReleased | EditorIntent::JointReleased => vec![EditorAction::EndMove],

        EditorIntent::ResizeStarted {
            node,
            handle,
            pointer,
        } => vec![EditorAction::BeginResize {
            node,
            handle,
            position: to_doc(pointer),
        }],
        EditorIntent::ResizeDragged { pointer } => vec![EditorAction::UpdateResize {
            position: to_doc(pointer),
        }],
        EditorIntent::ResizeReleased => vec![EditorAction::EndResize],

        EditorIntent::ConnectorPressed { connector } => {
            vec![EditorAction::PressConnector { connector }]
        }
        EditorIntent::ConnectorDragged { pointer } => vec![EditorAction::DragConnector {
            position: to_doc(pointer),
        }],
        EditorIntent::ConnectorEntered { connector } => {
            vec![EditorAction::EnterConnector { connector }]
        }
        EditorIntent::ConnectorExited { connector, pointer } => vec![EditorAction::ExitConnector {
            connector,
            position: to_doc(pointer),
        }],
        EditorIntent::ConnectorReleased { over } => vec![EditorAction::ReleaseConnector { over }],

        EditorIntent::CanvasPressed { pointer, shortcut } => vec![EditorAction::BeginMarquee {
            position: to_doc(pointer),
            shortcut,
        }],
        EditorIntent::CanvasDragged { pointer } => vec![EditorAction::UpdateMarquee {
            position: to_doc(pointer),
        }],
        EditorIntent::CanvasReleased => vec![EditorAction::EndMarquee],

        EditorIntent::ConnectionPressed {
            connection,
            pointer,
            shortcut,
        } => vec![
            EditorAction::SelectItem {
                item: Selectable::Connection(connection),
                shortcut,
            },
            EditorAction::BeginJointInsert {
                connection,
                position: to_doc(pointer),
                tolerance: state
                    .view
                    .document_per_pixel(state.options.joint_insert_tolerance),
            },
        ],
        EditorIntent::ConnectionDragged { pointer } => vec![EditorAction::UpdateJointInsert {
            position: to_doc(pointer),
        }],
        EditorIntent::ConnectionReleased => vec![EditorAction::EndJointInsert],

        EditorIntent::JointPressed {
            joint,
            pointer,
            shortcut,
        } => press_draggable(Selectable::Joint(joint), to_doc(pointer), shortcut),

        EditorIntent::PanStarted => vec![EditorAction::BeginPan],
        EditorIntent::PanDragged { delta } => vec![EditorAction::Pan { delta }],
        EditorIntent::PanReleased => vec![EditorAction::EndPan],
        EditorIntent::ZoomScrolled { factor, pointer } => vec![EditorAction::Zoom {
            factor,
            pivot: pointer,
        }],

        EditorIntent::AddNodeRequested {
            kind,
            pointer,
            connectors,
        } => vec![EditorAction::AddNode {
            kind,
            position: to_doc(pointer),
            connectors,
        }],
        EditorIntent::DeleteSelectedRequested => {
            if state.selection.is_empty() {
                vec![]
            } else {
                vec![EditorAction::CancelGesture, EditorAction::DeleteSelected]
            }
        }
        EditorIntent::ClearDocumentRequested => {
            vec![EditorAction::CancelGesture, EditorAction::ClearDocument]
        }
        EditorIntent::ClearConnectorsRequested => {
            if state.selection.node_ids().is_empty() {
                vec![]
            } else {
                vec![EditorAction::CancelGesture, EditorAction::ClearConnectors]
            }
        }
        EditorIntent::SelectAllRequested => vec![EditorAction::SelectAll],
        EditorIntent::ClearSelectionRequested => vec![EditorAction::ClearSelection],
        EditorIntent::UndoRequested => vec![EditorAction::Undo],
        EditorIntent::RedoRequested => vec![EditorAction::Redo],
        EditorIntent::CancelGestureRequested => vec![EditorAction::CancelGesture],
        EditorIntent::OptionsChanged { options } => vec![EditorAction::ApplyOptions { options }],
    }
}

/// Klick auf ein ziehbares Element: selektieren, dann Gruppen-Drag vorbereiten.
fn press_draggable(item: Selectable, position: glam::Vec2, shortcut: bool) -> Vec<EditorAction> {
    vec![
        EditorAction::SelectItem { item, shortcut },
        EditorAction::BeginMove {
            master: item,
            position,
        },
    ]
}
