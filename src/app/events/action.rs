use crate::app::commands::builders::ConnectorSpec;
use crate::app::state::ResizeHandle;
use crate::core::{ConnectionId, ConnectorId, NodeId, Selectable};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Actions sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Positionen sind bereits Dokument-Koordinaten.
#[derive(Debug, Clone)]
pub enum EditorAction {
    /// Klick-Selektion
    SelectItem { item: Selectable, shortcut: bool },
    /// Alles selektieren
    SelectAll,
    /// Selektion aufheben
    ClearSelection,
    /// Rahmen-Selektion starten
    BeginMarquee { position: Vec2, shortcut: bool },
    /// Rahmen aktualisieren
    UpdateMarquee { position: Vec2 },
    /// Rahmen-Selektion beenden
    EndMarquee,

    /// Gruppen-Drag mit `master` starten
    BeginMove { master: Selectable, position: Vec2 },
    /// Gruppen-Drag aktualisieren
    UpdateMove { position: Vec2 },
    /// Gruppen-Drag übernehmen
    EndMove,

    /// Größenänderung starten
    BeginResize {
        node: NodeId,
        handle: ResizeHandle,
        position: Vec2,
    },
    /// Größenänderung aktualisieren
    UpdateResize { position: Vec2 },
    /// Größenänderung übernehmen
    EndResize,

    /// Connector gedrückt
    PressConnector { connector: ConnectorId },
    /// Tail ziehen
    DragConnector { position: Vec2 },
    /// Kandidat betreten
    EnterConnector { connector: ConnectorId },
    /// Kandidat verlassen
    ExitConnector { connector: ConnectorId, position: Vec2 },
    /// Tail loslassen
    ReleaseConnector { over: Option<ConnectorId> },

    /// Joint-Insert starten
    BeginJointInsert {
        connection: ConnectionId,
        position: Vec2,
        tolerance: f32,
    },
    /// Joint-Insert aktualisieren
    UpdateJointInsert { position: Vec2 },
    /// Joint-Insert übernehmen
    EndJointInsert,

    /// Node anlegen
    AddNode {
        kind: String,
        position: Vec2,
        connectors: Vec<ConnectorSpec>,
    },
    /// Selektion löschen
    DeleteSelected,
    /// Dokument leeren
    ClearDocument,
    /// Connectors der selektierten Nodes entfernen
    ClearConnectors,

    /// Undo
    Undo,
    /// Redo
    Redo,

    /// Pan starten
    BeginPan,
    /// Ansicht verschieben (Bildschirm-Delta)
    Pan { delta: Vec2 },
    /// Pan beenden
    EndPan,
    /// Zoomen um einen Bildschirmpunkt
    Zoom { factor: f32, pivot: Vec2 },

    /// Jede laufende Geste verwerfen
    CancelGesture,
    /// Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
}
