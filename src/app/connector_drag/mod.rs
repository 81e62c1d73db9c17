//! Zustandsautomat für das Ziehen von Connections aus Connectors.
//!
//! Zustände:
//! - `Idle`: nichts los
//! - `CreatingTail`: ein Tail hängt an einem Connector, das freie Ende folgt dem Cursor
//! - `DetachingExisting`: Druck auf einen Connector mit lösbarer Connection;
//!   beim ersten Drag (oder erneutem Betreten des Connectors) wird sie entfernt
//!   und vom Gegen-Connector aus weitergezogen
//!
//! Strukturelle Änderungen laufen ausschließlich über den `CommandStack`.

mod tail;
mod validator;

pub use tail::Tail;
pub use validator::{ConnectionValidator, DefaultConnectionValidator};

use crate::app::commands::builders;
use crate::app::gesture::{GestureArbiter, GestureKind, GestureOwner, PointerPhase};
use crate::app::history::CommandStack;
use crate::core::{ConnectionId, ConnectorId, ConnectorPositionProvider, GraphDocument, Selectable};
use glam::Vec2;

/// Ergebnis der Validierung beim Überfahren eines Kandidaten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    /// Verbindung erlaubt
    HoveringValid,
    /// Verbindung verboten
    HoveringInvalid,
}

/// Aktuell überfahrener Kandidat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hover {
    /// Kandidat
    pub connector: ConnectorId,
    /// Darstellungsstil
    pub state: HoverState,
}

/// Vor dem Lösen gesicherte Connection
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedConnection {
    /// Connection
    pub connection: ConnectionId,
    /// Connector am anderen Ende
    pub opposite: ConnectorId,
    /// Connector-Anzahl des Gegen-Nodes beim Druck
    pub opposite_connector_count: Option<usize>,
    /// Joint-Positionen, gelesen vom gezogenen Ende aus
    pub joints: Vec<Vec2>,
}

/// Zustand des Automaten
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConnectorDragState {
    /// Keine Interaktion
    #[default]
    Idle,
    /// Tail wird gezogen
    CreatingTail {
        /// Anker-Connector (wird Source der neuen Connection)
        source: ConnectorId,
        /// Geometrie
        tail: Tail,
        /// Überfahrener Kandidat
        hover: Option<Hover>,
    },
    /// Lösen einer bestehenden Connection steht bevor
    DetachingExisting {
        /// Gedrückter Connector
        connector: ConnectorId,
        /// Gesicherte Connections
        recorded: Vec<RecordedConnection>,
    },
}

/// Alles, was der Automat pro Event braucht
pub struct DragContext<'a> {
    /// Dokument
    pub doc: &'a mut GraphDocument,
    /// Undo/Redo-Stack
    pub history: &'a mut CommandStack,
    /// Gesten-Arbiter
    pub gestures: &'a mut GestureArbiter,
    /// Connector-Positionen der Darstellung
    pub positions: &'a dyn ConnectorPositionProvider,
    /// Verbindungsregeln
    pub validator: &'a dyn ConnectionValidator,
}

/// Connector-Drag-Automat
#[derive(Debug, Clone, Default)]
pub struct ConnectorDrag {
    state: ConnectorDragState,
    owner: Option<GestureOwner>,
}

impl ConnectorDrag {
    /// Automat im Ruhezustand
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Zustand
    pub fn state(&self) -> &ConnectorDragState {
        &self.state
    }

    /// Nichts los?
    pub fn is_idle(&self) -> bool {
        matches!(self.state, ConnectorDragState::Idle)
    }

    /// Gezogener Tail (für die Darstellung)
    pub fn tail(&self) -> Option<&Tail> {
        match &self.state {
            ConnectorDragState::CreatingTail { tail, .. } => Some(tail),
            _ => None,
        }
    }

    /// Überfahrener Kandidat
    pub fn hover(&self) -> Option<Hover> {
        match &self.state {
            ConnectorDragState::CreatingTail { hover, .. } => *hover,
            _ => None,
        }
    }

    /// Zeiger gedrückt auf `connector`.
    ///
    /// Gibt `true` zurück, wenn der Automat die Geste übernommen hat.
    pub fn press(&mut self, ctx: &mut DragContext<'_>, connector: ConnectorId) -> bool {
        if !self.is_idle() {
            return false;
        }
        let Some(pressed) = ctx.doc.connector(connector) else {
            return false;
        };
        let detachable = pressed.detach_on_drag && pressed.is_connected();
        let horizontal = pressed.side().is_horizontal();

        let owner = GestureOwner::Element(Selectable::Connector(connector));
        if !ctx.gestures.activate(GestureKind::Connect, PointerPhase::Pressed, owner) {
            return false;
        }
        self.owner = Some(owner);

        if detachable {
            let recorded = record_connections(ctx.doc, connector);
            log::debug!("{} Connection(s) an {} werden gelöst", recorded.len(), connector);
            self.state = ConnectorDragState::DetachingExisting { connector, recorded };
            return true;
        }

        let start = ctx
            .validator
            .can_start(ctx.doc, connector)
            .then(|| ctx.positions.connector_position(ctx.doc, connector))
            .flatten();
        match start {
            Some(start) => {
                self.state = ConnectorDragState::CreatingTail {
                    source: connector,
                    tail: Tail::new(connector, horizontal, start),
                    hover: None,
                };
                true
            }
            None => {
                self.finish_gesture(ctx.gestures);
                false
            }
        }
    }

    /// Zeiger mit gedrückter Taste bewegt (`cursor` in Dokument-Koordinaten).
    ///
    /// In `DetachingExisting` löst bereits das erste Drag-Event: die
    /// Darstellung meldet Drags erst, wenn der Zeiger den gedrückten
    /// Connector verlässt. Meldet sie stattdessen das erneute Betreten des
    /// Connectors, löst [`enter`](Self::enter) auf dieselbe Weise.
    pub fn drag(&mut self, ctx: &mut DragContext<'_>, cursor: Vec2) {
        if matches!(self.state, ConnectorDragState::DetachingExisting { .. }) {
            self.detach(ctx, cursor);
            return;
        }
        if let ConnectorDragState::CreatingTail { tail, hover: None, .. } = &mut self.state {
            tail.set_end(cursor);
        }
    }

    /// Entfernt die gesicherten Connections und zieht vom ersten geeigneten
    /// Gegen-Connector aus einen neuen Tail.
    fn detach(&mut self, ctx: &mut DragContext<'_>, cursor: Vec2) {
        let ConnectorDragState::DetachingExisting { recorded, .. } =
            std::mem::take(&mut self.state)
        else {
            return;
        };

        let mut follow_up: Option<(ConnectorId, Tail)> = None;
        for record in recorded {
            if ctx.doc.connection(record.connection).is_none() {
                continue;
            }
            let removal = builders::remove_connection(record.connection);
            if !ctx.history.execute(ctx.doc, Box::new(removal)) {
                log::warn!("Connection {} konnte nicht gelöst werden", record.connection);
                continue;
            }
            if follow_up.is_none() {
                follow_up = reattach_tail(ctx, &record, cursor);
            }
        }

        match follow_up {
            Some((source, tail)) => {
                log::debug!("Tail wird von {} aus weitergezogen", source);
                self.state = ConnectorDragState::CreatingTail {
                    source,
                    tail,
                    hover: None,
                };
            }
            None => {
                log::debug!("Kein Gegen-Connector geeignet, Drag endet");
                self.finish_gesture(ctx.gestures);
            }
        }
    }

    /// Zeiger betritt einen Kandidaten-Connector.
    ///
    /// Das freie Ende rastet auf den Kandidaten ein, unabhängig vom Ergebnis.
    /// Betritt der Zeiger während `DetachingExisting` den gedrückten Connector
    /// erneut, werden dessen Connections gelöst.
    pub fn enter(&mut self, ctx: &mut DragContext<'_>, candidate: ConnectorId) -> Option<HoverState> {
        if let ConnectorDragState::DetachingExisting { connector, .. } = &self.state {
            if *connector == candidate {
                let cursor = ctx.positions.connector_position(ctx.doc, candidate)?;
                self.detach(ctx, cursor);
            }
            return None;
        }
        let ConnectorDragState::CreatingTail { source, tail, hover } = &mut self.state else {
            return None;
        };
        if candidate == *source {
            return None;
        }
        let position = ctx.positions.connector_position(ctx.doc, candidate)?;
        let state = if is_allowed(ctx, *source, candidate) {
            HoverState::HoveringValid
        } else {
            HoverState::HoveringInvalid
        };
        *hover = Some(Hover {
            connector: candidate,
            state,
        });
        tail.set_end(position);
        Some(state)
    }

    /// Zeiger verlässt einen Kandidaten-Connector.
    pub fn exit(&mut self, candidate: ConnectorId, cursor: Vec2) {
        if let ConnectorDragState::CreatingTail { tail, hover, .. } = &mut self.state {
            if hover.is_some_and(|h| h.connector == candidate) {
                *hover = None;
                tail.set_end(cursor);
            }
        }
    }

    /// Zeiger losgelassen, optional über einem Connector.
    ///
    /// Liefert die neue Connection, falls eine erzeugt wurde.
    pub fn release(&mut self, ctx: &mut DragContext<'_>, over: Option<ConnectorId>) -> Option<ConnectionId> {
        let state = std::mem::take(&mut self.state);
        let created = match state {
            ConnectorDragState::CreatingTail { source, tail, hover } => over
                .or(hover.map(|h| h.connector))
                .and_then(|target| commit(ctx, source, tail, target)),
            _ => None,
        };
        if created.is_none() {
            log::debug!("Tail verworfen");
        }
        self.finish_gesture(ctx.gestures);
        created
    }

    /// Bricht ohne Änderung ab.
    pub fn cancel(&mut self, gestures: &mut GestureArbiter) {
        self.state = ConnectorDragState::Idle;
        self.finish_gesture(gestures);
    }

    /// Bricht still ab, wenn ein beteiligter Connector nicht mehr existiert.
    ///
    /// Gibt `true` zurück, wenn abgebrochen wurde.
    pub fn abandon_if_dangling(&mut self, doc: &GraphDocument, gestures: &mut GestureArbiter) -> bool {
        let dangling = match &mut self.state {
            ConnectorDragState::Idle => false,
            ConnectorDragState::CreatingTail { source, hover, .. } => {
                if hover.is_some_and(|h| doc.connector(h.connector).is_none()) {
                    *hover = None;
                }
                doc.connector(*source).is_none()
            }
            ConnectorDragState::DetachingExisting { connector, .. } => doc.connector(*connector).is_none(),
        };
        if dangling {
            log::debug!("Connector-Drag abgebrochen: Element entfernt");
            self.state = ConnectorDragState::Idle;
            if let Some(owner) = self.owner.take() {
                gestures.release_orphaned(owner);
            }
        }
        dangling
    }

    fn finish_gesture(&mut self, gestures: &mut GestureArbiter) {
        if let Some(owner) = self.owner.take() {
            gestures.finish(GestureKind::Connect, owner);
        }
    }
}

fn is_allowed(ctx: &DragContext<'_>, source: ConnectorId, target: ConnectorId) -> bool {
    ctx.validator.prevalidate(ctx.doc, source, target) && ctx.validator.validate(ctx.doc, source, target)
}

fn record_connections(doc: &GraphDocument, connector: ConnectorId) -> Vec<RecordedConnection> {
    let Some(pressed) = doc.connector(connector) else {
        return Vec::new();
    };
    pressed
        .connections
        .iter()
        .filter_map(|id| {
            let connection = doc.connection(*id)?;
            let opposite = connection.opposite(connector)?;
            let mut joints = doc.joint_positions(*id)?;
            if connection.target() == connector {
                joints.reverse();
            }
            let opposite_connector_count = doc
                .parent_of(opposite)
                .and_then(|node| doc.node(node))
                .map(|node| node.connectors.len());
            Some(RecordedConnection {
                connection: *id,
                opposite,
                opposite_connector_count,
                joints,
            })
        })
        .collect()
}

/// Neuer Tail am Gegen-Connector, sofern dieser noch geeignet ist.
fn reattach_tail(ctx: &DragContext<'_>, record: &RecordedConnection, cursor: Vec2) -> Option<(ConnectorId, Tail)> {
    let opposite = ctx.doc.connector(record.opposite)?;
    let count = opposite
        .parent
        .and_then(|node| ctx.doc.node(node))
        .map(|node| node.connectors.len());
    if count.is_none() || count != record.opposite_connector_count {
        return None;
    }
    if !ctx.validator.can_start(ctx.doc, record.opposite) {
        return None;
    }
    let start = ctx.positions.connector_position(ctx.doc, record.opposite)?;
    let joints: Vec<Vec2> = record.joints.iter().rev().copied().collect();
    let mut tail = Tail::seeded(record.opposite, opposite.side().is_horizontal(), start, joints);
    tail.set_end(cursor);
    Some((record.opposite, tail))
}

/// Erzeugt die Connection `source → target` als ein Command.
fn commit(ctx: &mut DragContext<'_>, source: ConnectorId, mut tail: Tail, target: ConnectorId) -> Option<ConnectionId> {
    if !is_allowed(ctx, source, target) {
        return None;
    }
    let end = ctx.positions.connector_position(ctx.doc, target)?;
    tail.set_end(end);
    let joints = tail.joint_positions();
    let kind = ctx.validator.create_connection_type(ctx.doc, source, target);
    let joint_kind = ctx.validator.create_joint_type(ctx.doc, source, target);

    let (id, command) = builders::add_connection(ctx.doc, &kind, source, target, &joint_kind, &joints);
    if ctx.history.execute(ctx.doc, Box::new(command)) {
        log::info!("Connection {} erstellt: {} → {}", id, source, target);
        Some(id)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::EditCommand;
    use crate::core::DocumentGeometry;

    struct Fixture {
        doc: GraphDocument,
        history: CommandStack,
        gestures: GestureArbiter,
        a: Vec<ConnectorId>,
        b: Vec<ConnectorId>,
    }

    impl Fixture {
        fn new() -> Self {
            let mut doc = GraphDocument::default();
            let specs = [
                builders::ConnectorSpec::new("left-input", Vec2::new(0.0, 10.0), true),
                builders::ConnectorSpec::new("right-output", Vec2::new(40.0, 10.0), true),
            ];
            let (_, a, mut add_a) =
                builders::add_node(&mut doc, "box", Vec2::ZERO, Vec2::new(40.0, 20.0), &specs);
            let (_, b, mut add_b) =
                builders::add_node(&mut doc, "box", Vec2::new(100.0, 40.0), Vec2::new(40.0, 20.0), &specs);
            assert!(add_a.execute(&mut doc) && add_b.execute(&mut doc));
            Self {
                doc,
                history: CommandStack::default(),
                gestures: GestureArbiter::new(),
                a,
                b,
            }
        }

        fn ctx(&mut self) -> DragContext<'_> {
            DragContext {
                doc: &mut self.doc,
                history: &mut self.history,
                gestures: &mut self.gestures,
                positions: &DocumentGeometry,
                validator: &DefaultConnectionValidator,
            }
        }
    }

    #[test]
    fn press_on_free_connector_starts_tail() {
        let mut fx = Fixture::new();
        let mut drag = ConnectorDrag::new();
        let out = fx.a[1];

        assert!(drag.press(&mut fx.ctx(), out));
        assert!(fx.gestures.is_active(GestureKind::Connect));
        assert_eq!(drag.tail().map(Tail::start), Some(Vec2::new(40.0, 10.0)));

        drag.drag(&mut fx.ctx(), Vec2::new(80.0, 30.0));
        assert_eq!(drag.tail().map(Tail::end), Some(Vec2::new(80.0, 30.0)));
    }

    #[test]
    fn press_is_refused_while_other_gesture_runs() {
        let mut fx = Fixture::new();
        assert!(fx
            .gestures
            .activate(GestureKind::Pan, PointerPhase::Pressed, GestureOwner::Canvas));
        let mut drag = ConnectorDrag::new();
        let out = fx.a[1];

        assert!(!drag.press(&mut fx.ctx(), out));
        assert!(drag.is_idle());
    }

    #[test]
    fn hover_reports_validation_and_snaps() {
        let mut fx = Fixture::new();
        let mut drag = ConnectorDrag::new();
        let (out, other_out, target) = (fx.a[1], fx.b[1], fx.b[0]);
        assert!(drag.press(&mut fx.ctx(), out));

        assert_eq!(drag.enter(&mut fx.ctx(), other_out), Some(HoverState::HoveringInvalid));
        drag.exit(other_out, Vec2::new(90.0, 20.0));
        assert_eq!(drag.hover(), None);

        assert_eq!(drag.enter(&mut fx.ctx(), target), Some(HoverState::HoveringValid));
        assert_eq!(drag.tail().map(Tail::end), Some(Vec2::new(100.0, 50.0)));
    }

    #[test]
    fn release_elsewhere_discards_tail() {
        let mut fx = Fixture::new();
        let mut drag = ConnectorDrag::new();
        let out = fx.a[1];
        assert!(drag.press(&mut fx.ctx(), out));
        drag.drag(&mut fx.ctx(), Vec2::new(300.0, 300.0));

        assert_eq!(drag.release(&mut fx.ctx(), None), None);
        assert!(drag.is_idle());
        assert!(!fx.gestures.is_busy());
        assert_eq!(fx.doc.connection_count(), 0);
        assert!(!fx.history.can_undo());
    }

    #[test]
    fn reentering_pressed_connector_detaches() {
        let mut fx = Fixture::new();
        let (out, input, other) = (fx.a[1], fx.b[0], fx.a[0]);
        let (connection, connect) = builders::add_connection(
            &mut fx.doc,
            "connection",
            out,
            input,
            "joint",
            &[Vec2::new(70.0, 10.0), Vec2::new(70.0, 50.0)],
        );
        assert!(fx.history.execute(&mut fx.doc, Box::new(connect)));
        let mut drag = ConnectorDrag::new();

        assert!(drag.press(&mut fx.ctx(), input));
        assert!(matches!(drag.state(), ConnectorDragState::DetachingExisting { .. }));
        // Anderer Connector löst nichts
        assert_eq!(drag.enter(&mut fx.ctx(), other), None);
        assert!(fx.doc.connection(connection).is_some());

        assert_eq!(drag.enter(&mut fx.ctx(), input), None);
        assert!(fx.doc.connection(connection).is_none());
        assert_eq!(drag.tail().map(Tail::anchor), Some(out));
        assert_eq!(
            drag.tail().map(Tail::joint_positions),
            Some(vec![Vec2::new(70.0, 10.0), Vec2::new(70.0, 50.0)])
        );
    }

    #[test]
    fn removed_source_aborts_silently() {
        let mut fx = Fixture::new();
        let mut drag = ConnectorDrag::new();
        let out = fx.a[1];
        assert!(drag.press(&mut fx.ctx(), out));

        let node = fx.doc.parent_of(out).expect("Connector hat Node");
        let remove = builders::remove_nodes(&fx.doc, &[node]).expect("Node vorhanden");
        assert!(fx.history.execute(&mut fx.doc, Box::new(remove)));

        assert!(drag.abandon_if_dangling(&fx.doc, &mut fx.gestures));
        assert!(drag.is_idle());
        assert!(!fx.gestures.is_busy());
    }
}
