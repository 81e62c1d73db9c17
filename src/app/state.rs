//! Editor-Sitzung: Dokument, Verlauf und alle laufenden Interaktionen.

use super::connector_drag::{ConnectionValidator, ConnectorDrag, DefaultConnectionValidator, Tail};
use super::gesture::{GestureArbiter, GestureOwner};
use super::history::CommandStack;
use super::selection::{GroupDrag, Marquee, SelectionSet};
use crate::core::{
    ConnectionId, ConnectorPositionProvider, DocumentGeometry, GraphDocument, NodeId, Selectable,
    ViewTransform,
};
use crate::routing::{self, AlignmentTargets, ConnectionPath, ConnectionRenderer, FrameSettings, JointInsertion};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Griff eines Nodes für die Größenänderung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Ecke links oben
    TopLeft,
    /// Obere Kante
    Top,
    /// Ecke rechts oben
    TopRight,
    /// Rechte Kante
    Right,
    /// Ecke rechts unten
    BottomRight,
    /// Untere Kante
    Bottom,
    /// Ecke links unten
    BottomLeft,
    /// Linke Kante
    Left,
}

impl ResizeHandle {
    /// Bewegt der Griff die linke Kante?
    pub fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::Left | Self::BottomLeft)
    }

    /// Bewegt der Griff die rechte Kante?
    pub fn moves_right(self) -> bool {
        matches!(self, Self::TopRight | Self::Right | Self::BottomRight)
    }

    /// Bewegt der Griff die obere Kante?
    pub fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::Top | Self::TopRight)
    }

    /// Bewegt der Griff die untere Kante?
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::Bottom | Self::BottomRight)
    }
}

/// Laufende Größenänderung eines Nodes
#[derive(Debug, Clone, PartialEq)]
pub struct NodeResize {
    /// Node
    pub node: NodeId,
    /// Gezogener Griff
    pub handle: ResizeHandle,
    /// Zeigerposition beim Start
    pub pointer_start: Vec2,
    /// Node-Position beim Start
    pub start_position: Vec2,
    /// Node-Größe beim Start
    pub start_size: Vec2,
    /// Startpositionen der Joints angehängter Connections
    pub joint_starts: Vec<(Selectable, Vec2)>,
}

impl NodeResize {
    /// Besitzer der Resize-Geste
    pub fn owner(&self) -> GestureOwner {
        GestureOwner::Element(self.node.into())
    }
}

/// Laufendes Verschieben der Selektion
#[derive(Debug)]
pub struct ActiveMove {
    /// Master/Slave-Drag
    pub drag: GroupDrag,
    /// Abstand Zeiger → Master-Position beim Drücken
    pub grab_offset: Vec2,
    /// Connections, deren Joints mitgeführt werden
    pub connections: Vec<ConnectionId>,
}

impl ActiveMove {
    /// Besitzer der Move-Geste
    pub fn owner(&self) -> GestureOwner {
        GestureOwner::Element(self.drag.master())
    }
}

/// Zentraler Zustand einer Editor-Sitzung
pub struct EditorState {
    /// Graph-Dokument
    pub document: GraphDocument,
    /// Undo/Redo-Stack
    pub history: CommandStack,
    /// Gesten-Arbiter
    pub gestures: GestureArbiter,
    /// Selektion
    pub selection: SelectionSet,
    /// Connector-Drag-Automat
    pub connector_drag: ConnectorDrag,
    /// Laufendes Verschieben
    pub active_move: Option<ActiveMove>,
    /// Laufende Rahmen-Selektion
    pub marquee: Option<Marquee>,
    /// Laufender Joint-Insert
    pub joint_insertion: Option<JointInsertion>,
    /// Laufende Größenänderung
    pub resize: Option<NodeResize>,
    /// Aktive Ausrichtungs-Hilfslinien (für die Darstellung)
    pub guides: AlignmentTargets,
    /// Verbindungsregeln
    pub validator: Box<dyn ConnectionValidator>,
    /// Connector-Positionen der Darstellung
    pub positions: Box<dyn ConnectorPositionProvider>,
    /// Sicht-Transformation
    pub view: ViewTransform,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Leere Sitzung mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Leere Sitzung mit den angegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            document: GraphDocument::default(),
            history: CommandStack::new_with_capacity(options.history_max_depth),
            gestures: GestureArbiter::new(),
            selection: SelectionSet::new(),
            connector_drag: ConnectorDrag::new(),
            active_move: None,
            marquee: None,
            joint_insertion: None,
            resize: None,
            guides: AlignmentTargets::default(),
            validator: Box::new(DefaultConnectionValidator),
            positions: Box::new(DocumentGeometry),
            view: ViewTransform::new(),
            options,
        }
    }

    /// Ersetzt die Verbindungsregeln.
    pub fn with_validator(mut self, validator: Box<dyn ConnectionValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Ersetzt die Positionsabfrage.
    pub fn with_positions(mut self, positions: Box<dyn ConnectorPositionProvider>) -> Self {
        self.positions = positions;
        self
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.document.node_count()
    }

    /// Gibt die Anzahl der Connections zurück (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.document.connection_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Gezogener Tail (für die Darstellung)
    pub fn tail(&self) -> Option<&Tail> {
        self.connector_drag.tail()
    }

    /// Berechnet und zeichnet alle Connections eines Frames.
    ///
    /// Ein laufender Joint-Insert wird als Vorschau eingesetzt.
    pub fn route_frame(&self, renderer: &mut dyn ConnectionRenderer) -> Vec<ConnectionPath> {
        let settings = FrameSettings {
            filter: self.options.intersection_filter,
            style: self.options.crossing_style,
        };
        let preview = self
            .joint_insertion
            .as_ref()
            .map(|insertion| (insertion.connection(), insertion.preview()));
        routing::route_frame(&self.document, self.positions.as_ref(), settings, preview, renderer)
    }
}
