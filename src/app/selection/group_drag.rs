//! Gruppiertes Verschieben: Master/Slave-Drag aller selektierten Elemente.
//!
//! Während des Drags werden Positionen direkt (transient) gesetzt. Beim
//! Abschluss wird alles auf den Startzustand zurückgesetzt und die Differenz
//! als Liste neuer Positionen geliefert, die der Aufrufer als ein Command
//! ausführt.

use super::SelectionSet;
use crate::core::{GraphDocument, PropertyValue, Selectable};
use glam::Vec2;
use std::fmt;

/// Ein mitgezogenes Element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMember {
    /// Element
    pub item: Selectable,
    /// Position beim Drag-Start
    pub start: Vec2,
    /// Versatz zum Master beim Drag-Start
    pub offset: Vec2,
}

type PositionHook = Box<dyn FnMut(Selectable, Vec2)>;

/// Laufender Gruppen-Drag
pub struct GroupDrag {
    master: Selectable,
    master_start: Vec2,
    members: Vec<DragMember>,
    min: Vec2,
    max: Vec2,
    snapshot: Vec<(Selectable, Vec2)>,
    hooks: Vec<PositionHook>,
}

impl fmt::Debug for GroupDrag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupDrag")
            .field("master", &self.master)
            .field("members", &self.members)
            .field("min", &self.min)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}

impl GroupDrag {
    /// Startet einen Drag mit `master`; alle anderen selektierten, ziehbaren
    /// Elemente werden Slaves mit festem Versatz.
    pub fn begin(doc: &GraphDocument, selection: &SelectionSet, master: Selectable) -> Option<Self> {
        if !master.is_draggable() {
            return None;
        }
        let master_start = doc.position_of(master)?;
        let master_size = doc.extent_of(master);
        let content = doc.content_size();

        let members: Vec<DragMember> = selection
            .items()
            .filter(|item| *item != master && item.is_draggable())
            .filter_map(|item| {
                let start = doc.position_of(item)?;
                Some(DragMember {
                    item,
                    start,
                    offset: start - master_start,
                })
            })
            .collect();

        // Zulässiger Bereich des Masters, sodass jedes Mitglied im Inhalt bleibt
        let mut min = Vec2::ZERO;
        let mut max = content - master_size;
        for member in &members {
            let size = doc.extent_of(member.item);
            min = min.max(-member.offset);
            max = max.min(content - size - member.offset);
        }
        let max = max.max(min);

        let mut snapshot = vec![(master, master_start)];
        snapshot.extend(members.iter().map(|m| (m.item, m.start)));

        log::debug!("Gruppen-Drag gestartet: {} mit {} Slaves", master, members.len());
        Some(Self {
            master,
            master_start,
            members,
            min,
            max,
            snapshot,
            hooks: Vec::new(),
        })
    }

    /// Registriert einen Hook, der für jedes mitgezogene Element nach dessen
    /// Positionsänderung aufgerufen wird.
    pub fn on_position_changed(&mut self, hook: impl FnMut(Selectable, Vec2) + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Merkt sich ein weiteres Element für das Zurücksetzen (z.B. mitgeführte Joints).
    pub fn track(&mut self, doc: &GraphDocument, item: Selectable) {
        if self.snapshot.iter().any(|(i, _)| *i == item) {
            return;
        }
        if let Some(position) = doc.position_of(item) {
            self.snapshot.push((item, position));
        }
    }

    /// Master
    pub fn master(&self) -> Selectable {
        self.master
    }

    /// Startposition des Masters
    pub fn master_start(&self) -> Vec2 {
        self.master_start
    }

    /// Zulässiger Bereich der Master-Position
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.min, self.max)
    }

    /// Master und alle Slaves
    pub fn moving_items(&self) -> impl Iterator<Item = Selectable> + '_ {
        std::iter::once(self.master).chain(self.members.iter().map(|m| m.item))
    }

    /// Wird das Element mitgezogen?
    pub fn is_moving(&self, item: Selectable) -> bool {
        self.master == item || self.members.iter().any(|m| m.item == item)
    }

    /// Setzt den Master auf `desired` (geklemmt) und zieht alle Slaves nach.
    ///
    /// Gibt die tatsächlich gesetzte Master-Position zurück.
    pub fn drag_to(&mut self, doc: &mut GraphDocument, desired: Vec2) -> Vec2 {
        let position = desired.clamp(self.min, self.max);
        let _ = doc.set_property(self.master, PropertyValue::Position(position));
        for member in &self.members {
            let target = position + member.offset;
            let _ = doc.set_property(member.item, PropertyValue::Position(target));
            for hook in self.hooks.iter_mut() {
                hook(member.item, target);
            }
        }
        position
    }

    /// Beendet den Drag: setzt alles zurück und liefert die Endpositionen.
    ///
    /// Hooks werden dabei verworfen.
    pub fn finish(self, doc: &mut GraphDocument) -> Vec<(Selectable, Vec2)> {
        let mut moves = Vec::with_capacity(self.snapshot.len());
        for (item, start) in self.snapshot {
            if let Some(end) = doc.position_of(item) {
                let _ = doc.set_property(item, PropertyValue::Position(start));
                moves.push((item, end));
            }
        }
        moves
    }

    /// Bricht ab und stellt die Startpositionen wieder her.
    pub fn cancel(self, doc: &mut GraphDocument) {
        for (item, start) in self.snapshot {
            let _ = doc.set_property(item, PropertyValue::Position(start));
        }
    }
}
