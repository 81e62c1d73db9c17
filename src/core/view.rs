//! Sicht-Transformation der Zeichenfläche für Pan und Zoom.

use glam::Vec2;

/// Abbildung Dokument → Bildschirm: `screen = (doc - offset) * scale`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Dokument-Koordinate der linken oberen Bildschirmecke
    pub offset: Vec2,
    /// Skalierung (1.0 = normal, 2.0 = doppelt so groß)
    pub scale: f32,
}

impl ViewTransform {
    /// Minimaler Zoom-Faktor.
    pub const SCALE_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const SCALE_MAX: f32 = 10.0;

    /// Identität
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Verschiebt die Ansicht um ein Bildschirm-Delta (Pan)
    pub fn pan(&mut self, screen_delta: Vec2) {
        self.offset -= screen_delta / self.scale;
    }

    /// Zoomt um `factor`, der Dokumentpunkt unter `pivot` bleibt stehen.
    pub fn zoom_at(&mut self, factor: f32, pivot: Vec2) {
        let anchor = self.screen_to_document(pivot);
        self.scale = (self.scale * factor).clamp(Self::SCALE_MIN, Self::SCALE_MAX);
        self.offset = anchor - pivot / self.scale;
    }

    /// Bildschirm → Dokument
    pub fn screen_to_document(&self, screen: Vec2) -> Vec2 {
        screen / self.scale + self.offset
    }

    /// Dokument → Bildschirm
    pub fn document_to_screen(&self, doc: Vec2) -> Vec2 {
        (doc - self.offset) * self.scale
    }

    /// Wandelt ein Bildschirm-Delta in ein Dokument-Delta um.
    pub fn screen_delta_to_document(&self, delta: Vec2) -> Vec2 {
        delta / self.scale
    }

    /// Toleranz in Dokument-Einheiten für einen Pixel-Wert
    pub fn document_per_pixel(&self, pixels: f32) -> f32 {
        pixels / self.scale
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}
