use crate::app::commands::builders::ConnectorSpec;
use crate::app::state::ResizeHandle;
use crate::core::{ConnectionId, ConnectorId, JointId, NodeId};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Intents sind Eingaben der Darstellungsschicht ohne eigene Mutationslogik.
///
/// Zeigerpositionen (`pointer`) sind Bildschirm-Koordinaten; die Umrechnung
/// ins Dokument passiert beim Mapping auf Actions.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Zeiger auf einem Node gedrückt
    NodePressed {
        node: NodeId,
        pointer: Vec2,
        shortcut: bool,
    },
    /// Node (samt Selektion) gezogen
    NodeDragged { pointer: Vec2 },
    /// Node losgelassen
    NodeReleased,

    /// Größenänderung an einem Griff begonnen
    ResizeStarted {
        node: NodeId,
        handle: ResizeHandle,
        pointer: Vec2,
    },
    /// Griff gezogen
    ResizeDragged { pointer: Vec2 },
    /// Griff losgelassen
    ResizeReleased,

    /// Zeiger auf einem Connector gedrückt
    ConnectorPressed { connector: ConnectorId },
    /// Tail gezogen
    ConnectorDragged { pointer: Vec2 },
    /// Zeiger betritt einen Connector während eines Tail-Drags
    ConnectorEntered { connector: ConnectorId },
    /// Zeiger verlässt einen Connector während eines Tail-Drags
    ConnectorExited { connector: ConnectorId, pointer: Vec2 },
    /// Tail losgelassen (optional über einem Connector)
    ConnectorReleased { over: Option<ConnectorId> },

    /// Zeiger auf leerer Zeichenfläche gedrückt (Rahmen-Selektion)
    CanvasPressed { pointer: Vec2, shortcut: bool },
    /// Rahmen gezogen
    CanvasDragged { pointer: Vec2 },
    /// Rahmen losgelassen
    CanvasReleased,

    /// Zeiger auf einer Connection gedrückt (Joint-Insert)
    ConnectionPressed {
        connection: ConnectionId,
        pointer: Vec2,
        shortcut: bool,
    },
    /// Neues Joint-Paar gezogen
    ConnectionDragged { pointer: Vec2 },
    /// Joint-Insert losgelassen
    ConnectionReleased,

    /// Zeiger auf einem Joint gedrückt
    JointPressed {
        joint: JointId,
        pointer: Vec2,
        shortcut: bool,
    },
    /// Joint (samt Selektion) gezogen
    JointDragged { pointer: Vec2 },
    /// Joint losgelassen
    JointReleased,

    /// Ansicht-Verschieben begonnen
    PanStarted,
    /// Ansicht um ein Bildschirm-Delta verschieben
    PanDragged { delta: Vec2 },
    /// Ansicht-Verschieben beendet
    PanReleased,
    /// Mausrad-Zoom um `pointer`
    ZoomScrolled { factor: f32, pointer: Vec2 },

    /// Neuen Node an Zeigerposition anlegen
    AddNodeRequested {
        kind: String,
        pointer: Vec2,
        connectors: Vec<ConnectorSpec>,
    },
    /// Selektierte Elemente löschen
    DeleteSelectedRequested,
    /// Dokument leeren
    ClearDocumentRequested,
    /// Connectors der selektierten Nodes entfernen
    ClearConnectorsRequested,
    /// Alles selektieren
    SelectAllRequested,
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Rückgängig
    UndoRequested,
    /// Wiederholen
    RedoRequested,
    /// Laufende Geste abbrechen (z.B. Escape)
    CancelGestureRequested,
    /// Optionen übernehmen
    OptionsChanged { options: Box<EditorOptions> },
}
