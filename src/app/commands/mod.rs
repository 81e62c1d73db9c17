//! Command-Engine: undo-fähige Mutationen des Graph-Dokuments.
//!
//! Jede strukturelle Änderung am [`GraphDocument`] läuft über ein
//! [`EditCommand`], das vom [`CommandStack`](crate::app::history::CommandStack)
//! ausgeführt wird. Primitive Commands decken Hinzufügen, Entfernen und das
//! Setzen einer Eigenschaft ab; [`CompoundCommand`] bündelt sie atomar.

pub mod builders;
mod compound;
mod primitive;

pub use compound::CompoundCommand;
pub use primitive::{AddElement, RemoveElement, SetProperty};

use crate::core::GraphDocument;
use std::fmt;

/// Eine undo-fähige Arbeitseinheit auf dem Dokument.
///
/// `execute` darf nur nach erfolgreichem `can_execute` aufgerufen werden;
/// ein Aufruf ohne erfüllte Vorbedingung ist ein No-op und liefert `false`.
pub trait EditCommand: fmt::Debug {
    /// Kurzbeschreibung für Log und History-Anzeige
    fn label(&self) -> &str;

    /// Prüft die Vorbedingungen gegen den aktuellen Dokumentzustand
    fn can_execute(&self, doc: &GraphDocument) -> bool;

    /// Führt den Command aus; `false` wenn nichts geändert wurde
    fn execute(&mut self, doc: &mut GraphDocument) -> bool;

    /// Macht eine vorherige Ausführung rückgängig
    fn undo(&mut self, doc: &mut GraphDocument);

    /// Wiederholt eine rückgängig gemachte Ausführung
    fn redo(&mut self, doc: &mut GraphDocument);

    /// Unabhängige Kopie (für Trockenläufe in `CompoundCommand::can_execute`)
    fn box_clone(&self) -> Box<dyn EditCommand>;
}

impl Clone for Box<dyn EditCommand> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
