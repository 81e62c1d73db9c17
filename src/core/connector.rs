//! Connectors: Andockpunkte an Nodes, an denen Connections beginnen oder enden.

use super::{ConnectionId, ConnectorId, NodeId};
use glam::Vec2;

/// Seite des Nodes, an der ein Connector sitzt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorSide {
    /// Linke Kante
    Left,
    /// Rechte Kante
    Right,
    /// Obere Kante
    Top,
    /// Untere Kante
    Bottom,
}

impl ConnectorSide {
    /// Links/Rechts → das erste Segment einer Connection läuft horizontal.
    pub fn is_horizontal(self) -> bool {
        matches!(self, ConnectorSide::Left | ConnectorSide::Right)
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "left" => Some(ConnectorSide::Left),
            "right" => Some(ConnectorSide::Right),
            "top" => Some(ConnectorSide::Top),
            "bottom" => Some(ConnectorSide::Bottom),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ConnectorSide::Left => "left",
            ConnectorSide::Right => "right",
            ConnectorSide::Top => "top",
            ConnectorSide::Bottom => "bottom",
        }
    }
}

/// Ein- oder Ausgang
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorPolarity {
    /// Eingang
    Input,
    /// Ausgang
    Output,
}

impl ConnectorPolarity {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "input" => Some(ConnectorPolarity::Input),
            "output" => Some(ConnectorPolarity::Output),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ConnectorPolarity::Input => "input",
            ConnectorPolarity::Output => "output",
        }
    }
}

/// Aufgeschlüsselter Connector-Typ im Format `<seite>-<input|output>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorKind {
    /// Seite am Node
    pub side: ConnectorSide,
    /// Richtung
    pub polarity: ConnectorPolarity,
}

impl ConnectorKind {
    /// Erstellt einen Typ aus Seite und Richtung.
    pub fn new(side: ConnectorSide, polarity: ConnectorPolarity) -> Self {
        Self { side, polarity }
    }

    /// Parst einen Typ-Tag wie `"left-input"`. Unbekannte Tags → `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        let (side, polarity) = tag.split_once('-')?;
        Some(Self {
            side: ConnectorSide::parse(side)?,
            polarity: ConnectorPolarity::parse(polarity)?,
        })
    }

    /// Erzeugt den Typ-Tag (`"right-output"` usw.)
    pub fn tag(&self) -> String {
        format!("{}-{}", self.side.as_str(), self.polarity.as_str())
    }
}

/// Ein Connector an einem Node (oder frei für Drag-Tails)
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Eindeutige ID
    pub id: ConnectorId,
    /// Typ-Tag, kodiert Seite und Ein-/Ausgang
    pub kind: String,
    /// Mittelpunkt relativ zum Node (bei freien Connectors absolut)
    pub position: Vec2,
    /// Besitzender Node, `None` für freie Connectors
    pub parent: Option<NodeId>,
    /// Angehängte Connections in Reihenfolge
    pub connections: Vec<ConnectionId>,
    /// Ziehen am Connector löst eine bestehende Connection (statt eine weitere zu erzeugen)
    pub detach_on_drag: bool,
}

impl Connector {
    /// Erstellt einen Connector für einen Node
    pub fn new(
        id: ConnectorId,
        parent: NodeId,
        kind: impl Into<String>,
        position: Vec2,
        detach_on_drag: bool,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            position,
            parent: Some(parent),
            connections: Vec::new(),
            detach_on_drag,
        }
    }

    /// Erstellt einen freien Connector ohne Node (Position absolut)
    pub fn free(id: ConnectorId, kind: impl Into<String>, position: Vec2) -> Self {
        Self {
            id,
            kind: kind.into(),
            position,
            parent: None,
            connections: Vec::new(),
            detach_on_drag: false,
        }
    }

    /// Typ-Tag aufgeschlüsselt, falls im Standardformat
    pub fn parsed_kind(&self) -> Option<ConnectorKind> {
        ConnectorKind::parse(&self.kind)
    }

    /// Seite des Connectors; unbekannte Tags gelten als links.
    pub fn side(&self) -> ConnectorSide {
        self.parsed_kind()
            .map_or(ConnectorSide::Left, |kind| kind.side)
    }

    /// Ist der Connector ein Eingang?
    pub fn is_input(&self) -> bool {
        self.parsed_kind()
            .is_some_and(|kind| kind.polarity == ConnectorPolarity::Input)
    }

    /// Hat der Connector mindestens eine Connection?
    pub fn is_connected(&self) -> bool {
        !self.connections.is_empty()
    }
}
