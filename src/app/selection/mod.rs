//! Selektions-Subsystem: beobachtbare Selektionsmenge, Rahmen-Selektion
//! und gruppiertes Verschieben.

mod group_drag;
mod marquee;

pub use group_drag::{DragMember, GroupDrag};
pub use marquee::Marquee;

use crate::core::{GraphDocument, Selectable};
use indexmap::IndexSet;
use std::fmt;

/// Änderung an der Selektionsmenge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Element neu selektiert
    Added(Selectable),
    /// Element abgewählt
    Removed(Selectable),
}

type SelectionListener = Box<dyn FnMut(SelectionChange)>;

/// Geordnete Menge selektierter Elemente mit synchronen Listenern.
#[derive(Default)]
pub struct SelectionSet {
    items: IndexSet<Selectable>,
    listeners: Vec<SelectionListener>,
}

impl fmt::Debug for SelectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSet")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SelectionSet {
    /// Leere Selektion
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Listener für Selektionsänderungen.
    pub fn add_listener(&mut self, listener: impl FnMut(SelectionChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, change: SelectionChange) {
        for listener in self.listeners.iter_mut() {
            listener(change);
        }
    }

    /// Selektiert ein Element; `false` wenn es bereits selektiert war.
    pub fn select(&mut self, item: Selectable) -> bool {
        let added = self.items.insert(item);
        if added {
            self.notify(SelectionChange::Added(item));
        }
        added
    }

    /// Hebt die Selektion eines Elements auf.
    pub fn clear_selection_of(&mut self, item: Selectable) -> bool {
        let removed = self.items.shift_remove(&item);
        if removed {
            self.notify(SelectionChange::Removed(item));
        }
        removed
    }

    /// Hebt die gesamte Selektion auf.
    pub fn clear_selection(&mut self) {
        let removed: Vec<Selectable> = self.items.drain(..).collect();
        for item in removed {
            self.notify(SelectionChange::Removed(item));
        }
    }

    /// Selektiert alle Nodes, Connections und Joints des Dokuments.
    pub fn select_all(&mut self, doc: &GraphDocument) {
        let all: Vec<Selectable> = doc
            .nodes()
            .map(|n| Selectable::Node(n.id))
            .chain(doc.connections().map(|c| Selectable::Connection(c.id)))
            .chain(doc.joints().map(|j| Selectable::Joint(j.id)))
            .collect();
        for item in all {
            self.select(item);
        }
    }

    /// Ist das Element selektiert?
    pub fn is_selected(&self, item: Selectable) -> bool {
        self.items.contains(&item)
    }

    /// Selektierte Elemente in Selektionsreihenfolge
    pub fn items(&self) -> impl Iterator<Item = Selectable> + '_ {
        self.items.iter().copied()
    }

    /// Anzahl selektierter Elemente
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Nichts selektiert
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selektierte Node-IDs
    pub fn node_ids(&self) -> Vec<crate::core::NodeId> {
        self.items
            .iter()
            .filter_map(|item| match item {
                Selectable::Node(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Klick-Selektion: ohne Shortcut ersetzt, mit Shortcut umgeschaltet.
    pub fn click(&mut self, item: Selectable, shortcut: bool) {
        if shortcut {
            if !self.clear_selection_of(item) {
                self.select(item);
            }
        } else if !self.is_selected(item) {
            self.clear_selection();
            self.select(item);
        }
    }

    /// Entfernt Elemente, die im Dokument nicht mehr existieren (z.B. nach Undo).
    pub fn prune(&mut self, doc: &GraphDocument) {
        let stale: Vec<Selectable> = self.items.iter().copied().filter(|i| !doc.contains(*i)).collect();
        for item in stale {
            self.clear_selection_of(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{JointId, NodeId};
    use std::cell::RefCell;
    use std::rc::Rc;

    const A: Selectable = Selectable::Node(NodeId(1));
    const B: Selectable = Selectable::Node(NodeId(2));
    const J: Selectable = Selectable::Joint(JointId(3));

    #[test]
    fn plain_click_replaces_selection() {
        let mut selection = SelectionSet::new();
        selection.select(A);
        selection.click(B, false);

        assert!(!selection.is_selected(A));
        assert!(selection.is_selected(B));
    }

    #[test]
    fn plain_click_on_selected_item_keeps_group() {
        let mut selection = SelectionSet::new();
        selection.select(A);
        selection.select(B);
        selection.click(A, false);

        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn shortcut_click_toggles_membership() {
        let mut selection = SelectionSet::new();
        selection.select(A);
        selection.click(J, true);
        assert_eq!(selection.items().collect::<Vec<_>>(), vec![A, J]);

        selection.click(A, true);
        assert_eq!(selection.items().collect::<Vec<_>>(), vec![J]);
    }

    #[test]
    fn listeners_see_every_change() {
        let mut selection = SelectionSet::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        selection.add_listener(move |change| sink.borrow_mut().push(change));

        selection.select(A);
        selection.select(A);
        selection.clear_selection();

        assert_eq!(
            *log.borrow(),
            vec![SelectionChange::Added(A), SelectionChange::Removed(A)]
        );
    }
}
