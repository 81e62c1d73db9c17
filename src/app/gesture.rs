//! Gegenseitiger Ausschluss von Zeiger-Gesten (Pan, Zoom, Resize, Move, Connect, Select).
//!
//! Jede interaktive Komponente fragt den Arbiter, bevor sie ein Zeiger-Event
//! konsumiert. Es ist immer höchstens eine Geste aktiv; nur ihr Besitzer kann
//! sie beenden.

use crate::core::Selectable;

/// Klasse einer exklusiven Zeiger-Interaktion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Ansicht verschieben
    Pan,
    /// Ansicht zoomen
    Zoom,
    /// Node-Größe ändern
    Resize,
    /// Elemente verschieben
    Move,
    /// Connection aus einem Connector ziehen
    Connect,
    /// Rahmen-Selektion
    Select,
}

/// Besitzer einer Geste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureOwner {
    /// Leere Zeichenfläche (Marquee, Pan)
    Canvas,
    /// Ein Element des Dokuments
    Element(Selectable),
    /// Komponente außerhalb der Engine (z.B. Minimap), frei vergebene Kennung
    External(u64),
}

/// Art des auslösenden Zeiger-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Taste gedrückt
    Pressed,
    /// Bewegung mit gedrückter Taste
    Dragged,
    /// Taste losgelassen
    Released,
    /// Diskretes Event ohne Loslassen (Mausrad)
    Scrolled,
}

impl PointerPhase {
    /// Diskrete Events erhalten die Geste, ohne sie zu belegen.
    pub fn is_discrete(self) -> bool {
        matches!(self, PointerPhase::Scrolled)
    }
}

/// Einzelner Slot für die aktive Geste
#[derive(Debug, Clone, Default)]
pub struct GestureArbiter {
    active: Option<(GestureKind, GestureOwner)>,
}

impl GestureArbiter {
    /// Leerer Arbiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Beantragt eine Geste.
    ///
    /// Erfolgreich, wenn keine Geste aktiv ist oder bereits dasselbe Paar aus
    /// Geste und Besitzer. Diskrete Events werden genehmigt, ohne den Slot zu belegen.
    pub fn activate(&mut self, gesture: GestureKind, event: PointerPhase, owner: GestureOwner) -> bool {
        match self.active {
            None => {
                if !event.is_discrete() {
                    self.active = Some((gesture, owner));
                    log::debug!("Geste aktiviert: {:?} durch {:?}", gesture, owner);
                }
                true
            }
            Some(current) => current == (gesture, owner),
        }
    }

    /// Beendet eine Geste; nur der exakte Besitzer darf das.
    pub fn finish(&mut self, gesture: GestureKind, owner: GestureOwner) -> bool {
        if self.active == Some((gesture, owner)) {
            self.active = None;
            log::debug!("Geste beendet: {:?}", gesture);
            true
        } else {
            false
        }
    }

    /// Aktive Geste mit Besitzer
    pub fn active(&self) -> Option<(GestureKind, GestureOwner)> {
        self.active
    }

    /// Ist genau diese Geste aktiv?
    pub fn is_active(&self, gesture: GestureKind) -> bool {
        self.active.is_some_and(|(g, _)| g == gesture)
    }

    /// Ist überhaupt eine Geste aktiv?
    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    /// Gibt den Slot bedingungslos frei, wenn der Besitzer nicht mehr existiert.
    pub fn release_orphaned(&mut self, owner: GestureOwner) {
        if self.active.is_some_and(|(_, o)| o == owner) {
            self.active = None;
        }
    }
}
