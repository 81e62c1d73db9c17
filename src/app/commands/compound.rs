//! Zusammengesetzter Command mit Alles-oder-nichts-Semantik.

use super::EditCommand;
use crate::core::GraphDocument;

/// Geordnete Liste von Sub-Commands, die als eine Einheit ausgeführt wird.
#[derive(Debug, Clone)]
pub struct CompoundCommand {
    label: String,
    commands: Vec<Box<dyn EditCommand>>,
}

impl CompoundCommand {
    /// Leerer Compound mit Beschriftung
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            commands: Vec::new(),
        }
    }

    /// Hängt einen Sub-Command an
    pub fn push(&mut self, command: impl EditCommand + 'static) {
        self.commands.push(Box::new(command));
    }

    /// Hängt einen bereits geboxten Sub-Command an
    pub fn push_boxed(&mut self, command: Box<dyn EditCommand>) {
        self.commands.push(command);
    }

    /// Builder-Variante von [`push`](Self::push)
    pub fn with(mut self, command: impl EditCommand + 'static) -> Self {
        self.push(command);
        self
    }

    /// Anzahl der Sub-Commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Keine Sub-Commands vorhanden
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl EditCommand for CompoundCommand {
    fn label(&self) -> &str {
        &self.label
    }

    /// Trockenlauf auf einer Kopie: spätere Schritte sehen die Effekte der früheren.
    fn can_execute(&self, doc: &GraphDocument) -> bool {
        if self.commands.is_empty() {
            return false;
        }
        let mut scratch = doc.clone();
        for command in &self.commands {
            let mut trial = command.box_clone();
            if !trial.can_execute(&scratch) || !trial.execute(&mut scratch) {
                return false;
            }
        }
        true
    }

    fn execute(&mut self, doc: &mut GraphDocument) -> bool {
        if self.commands.is_empty() {
            return false;
        }
        for i in 0..self.commands.len() {
            let ok = self.commands[i].can_execute(doc) && self.commands[i].execute(doc);
            if !ok {
                log::debug!(
                    "Compound '{}' abgebrochen bei Schritt {}, Rollback",
                    self.label,
                    i
                );
                for done in self.commands[..i].iter_mut().rev() {
                    done.undo(doc);
                }
                return false;
            }
        }
        true
    }

    fn undo(&mut self, doc: &mut GraphDocument) {
        for command in self.commands.iter_mut().rev() {
            command.undo(doc);
        }
    }

    fn redo(&mut self, doc: &mut GraphDocument) {
        for command in self.commands.iter_mut() {
            command.redo(doc);
        }
    }

    fn box_clone(&self) -> Box<dyn EditCommand> {
        Box::new(self.clone())
    }
}
