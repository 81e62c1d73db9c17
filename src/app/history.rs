//! Undo/Redo-Stack auf Basis von Commands.

use super::commands::EditCommand;
use crate::core::GraphDocument;
use std::fmt;

/// Art der Stack-Änderung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackChange {
    /// Neuer Command ausgeführt
    Executed,
    /// Command rückgängig gemacht
    Undone,
    /// Command wiederholt
    Redone,
    /// Stacks geleert
    Cleared,
}

/// Benachrichtigung nach jeder Stack-Änderung
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStackEvent {
    /// Art der Änderung
    pub change: StackChange,
    /// Beschriftung des betroffenen Commands (leer bei `Cleared`)
    pub label: String,
    /// Undo danach möglich
    pub can_undo: bool,
    /// Redo danach möglich
    pub can_redo: bool,
}

/// Handle zum späteren Abmelden eines Listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type StackListener = Box<dyn FnMut(&CommandStackEvent)>;

/// Undo/Redo-Manager mit zwei Stacks (done/undone) pro Dokument.
pub struct CommandStack {
    done: Vec<Box<dyn EditCommand>>,
    undone: Vec<Box<dyn EditCommand>>,
    max_depth: usize,
    listeners: Vec<(ListenerId, StackListener)>,
    next_listener: u64,
}

impl fmt::Debug for CommandStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandStack")
            .field("done", &self.done.len())
            .field("undone", &self.undone.len())
            .field("max_depth", &self.max_depth)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for CommandStack {
    fn default() -> Self {
        Self::new_with_capacity(crate::shared::options::HISTORY_MAX_DEPTH)
    }
}

impl CommandStack {
    /// Erstellt einen neuen Stack mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            done: Vec::with_capacity(max_depth.min(64)),
            undone: Vec::new(),
            max_depth,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Registriert einen Listener, der synchron nach jeder Stack-Änderung aufgerufen wird.
    pub fn add_listener(&mut self, listener: impl FnMut(&CommandStackEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Meldet einen Listener ab; `false` wenn unbekannt.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Führt einen Command aus und legt ihn auf den Undo-Stack.
    ///
    /// Ist die Vorbedingung nicht erfüllt, passiert nichts (`false`).
    pub fn execute(&mut self, doc: &mut GraphDocument, mut command: Box<dyn EditCommand>) -> bool {
        if !command.can_execute(doc) {
            log::debug!("Command '{}' nicht ausführbar, übersprungen", command.label());
            return false;
        }
        if !command.execute(doc) {
            log::debug!("Command '{}' ohne Wirkung", command.label());
            return false;
        }
        log::debug!("Command ausgeführt: {}", command.label());
        let label = command.label().to_string();
        if self.done.len() >= self.max_depth {
            self.done.remove(0);
        }
        self.done.push(command);
        self.undone.clear();
        self.notify(StackChange::Executed, label);
        true
    }

    /// Macht den letzten Command rückgängig.
    pub fn undo(&mut self, doc: &mut GraphDocument) -> bool {
        let Some(mut command) = self.done.pop() else {
            log::debug!("Undo: nichts zu tun");
            return false;
        };
        command.undo(doc);
        let label = command.label().to_string();
        self.undone.push(command);
        log::info!("Undo ausgeführt: {}", label);
        self.notify(StackChange::Undone, label);
        true
    }

    /// Wiederholt den zuletzt rückgängig gemachten Command.
    pub fn redo(&mut self, doc: &mut GraphDocument) -> bool {
        let Some(mut command) = self.undone.pop() else {
            log::debug!("Redo: nichts zu tun");
            return false;
        };
        command.redo(doc);
        let label = command.label().to_string();
        self.done.push(command);
        log::info!("Redo ausgeführt: {}", label);
        self.notify(StackChange::Redone, label);
        true
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Anzahl der rückgängig machbaren Schritte
    pub fn undo_depth(&self) -> usize {
        self.done.len()
    }

    /// Beschriftung des nächsten Undo-Schritts
    pub fn undo_label(&self) -> Option<&str> {
        self.done.last().map(|c| c.label())
    }

    /// Ändert die maximale Tiefe; überzählige älteste Undo-Schritte entfallen.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        if self.done.len() > self.max_depth {
            let excess = self.done.len() - self.max_depth;
            self.done.drain(..excess);
        }
    }

    /// Verwirft beide Stacks (z.B. nach Laden eines neuen Dokuments).
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
        self.notify(StackChange::Cleared, String::new());
    }

    fn notify(&mut self, change: StackChange, label: String) {
        let event = CommandStackEvent {
            change,
            label,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
