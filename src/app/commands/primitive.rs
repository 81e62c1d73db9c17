//! Primitive Commands: Element hinzufügen, Element entfernen, Eigenschaft setzen.

use super::EditCommand;
use crate::core::{DetachedElement, GraphDocument, GraphElement, PropertyValue, Selectable};

/// Fügt ein neues Element in seine Sammlung ein.
#[derive(Debug, Clone)]
pub struct AddElement {
    element: GraphElement,
    index: Option<usize>,
}

impl AddElement {
    /// Anhängen am Ende der jeweiligen Sammlung
    pub fn new(element: GraphElement) -> Self {
        Self {
            element,
            index: None,
        }
    }

    /// Einfügen an fester Position (Z-Order bzw. Listenindex beim Besitzer)
    pub fn at(element: GraphElement, index: usize) -> Self {
        Self {
            element,
            index: Some(index),
        }
    }

    /// Handle des hinzugefügten Elements
    pub fn target(&self) -> Selectable {
        self.element.handle()
    }
}

impl EditCommand for AddElement {
    fn label(&self) -> &str {
        "Element hinzufügen"
    }

    fn can_execute(&self, doc: &GraphDocument) -> bool {
        doc.can_insert(&self.element, self.index)
    }

    fn execute(&mut self, doc: &mut GraphDocument) -> bool {
        doc.insert(self.element.clone(), self.index)
    }

    fn undo(&mut self, doc: &mut GraphDocument) {
        let _ = doc.detach(self.element.handle());
    }

    fn redo(&mut self, doc: &mut GraphDocument) {
        let _ = self.execute(doc);
    }

    fn box_clone(&self) -> Box<dyn EditCommand> {
        Box::new(self.clone())
    }
}

/// Entfernt ein Element (mit Kaskade) und merkt sich alles für ein exaktes Undo.
#[derive(Debug, Clone)]
pub struct RemoveElement {
    target: Selectable,
    detached: Option<DetachedElement>,
}

impl RemoveElement {
    /// Entfernt das Element `target`
    pub fn new(target: impl Into<Selectable>) -> Self {
        Self {
            target: target.into(),
            detached: None,
        }
    }

    /// Handle des entfernten Elements
    pub fn target(&self) -> Selectable {
        self.target
    }
}

impl EditCommand for RemoveElement {
    fn label(&self) -> &str {
        "Element entfernen"
    }

    fn can_execute(&self, doc: &GraphDocument) -> bool {
        doc.contains(self.target)
    }

    fn execute(&mut self, doc: &mut GraphDocument) -> bool {
        self.detached = doc.detach(self.target);
        self.detached.is_some()
    }

    fn undo(&mut self, doc: &mut GraphDocument) {
        if let Some(detached) = self.detached.take() {
            doc.restore(detached);
        }
    }

    fn redo(&mut self, doc: &mut GraphDocument) {
        let _ = self.execute(doc);
    }

    fn box_clone(&self) -> Box<dyn EditCommand> {
        Box::new(self.clone())
    }
}

/// Setzt eine Eigenschaft und merkt sich den vorherigen Wert.
#[derive(Debug, Clone)]
pub struct SetProperty {
    target: Selectable,
    value: PropertyValue,
    previous: Option<PropertyValue>,
}

impl SetProperty {
    /// Setzt `value` auf `target`
    pub fn new(target: impl Into<Selectable>, value: PropertyValue) -> Self {
        Self {
            target: target.into(),
            value,
            previous: None,
        }
    }
}

impl EditCommand for SetProperty {
    fn label(&self) -> &str {
        "Eigenschaft setzen"
    }

    fn can_execute(&self, doc: &GraphDocument) -> bool {
        doc.property(self.target, self.value.key()).is_some()
    }

    fn execute(&mut self, doc: &mut GraphDocument) -> bool {
        self.previous = doc.set_property(self.target, self.value.clone());
        self.previous.is_some()
    }

    fn undo(&mut self, doc: &mut GraphDocument) {
        if let Some(previous) = self.previous.clone() {
            let _ = doc.set_property(self.target, previous);
        }
    }

    fn redo(&mut self, doc: &mut GraphDocument) {
        let _ = doc.set_property(self.target, self.value.clone());
    }

    fn box_clone(&self) -> Box<dyn EditCommand> {
        Box::new(self.clone())
    }
}
