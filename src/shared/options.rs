//! Zentrale Konfiguration für die Graph-Editor-Engine.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Nodes ───────────────────────────────────────────────────────────

/// Minimale Breite/Höhe eines Nodes beim Resize.
pub const NODE_MIN_SIZE: f32 = 20.0;
/// Standardgröße neu hinzugefügter Nodes.
pub const NODE_DEFAULT_SIZE: [f32; 2] = [150.0, 100.0];

// ── Connectors ──────────────────────────────────────────────────────

/// Neue Connectors lösen bestehende Connections beim Ziehen.
pub const CONNECTOR_DETACH_ON_DRAG: bool = true;

// ── Routing ─────────────────────────────────────────────────────────

/// Maximaler Abstand (Bildschirm-Pixel) zwischen Cursor und Segment für Joint-Insert.
pub const JOINT_INSERT_TOLERANCE: f32 = 5.0;
/// Einrast-Schwelle (Bildschirm-Pixel) für Ausrichtungs-Hilfslinien beim Joint-Drag.
pub const ALIGNMENT_SNAP_THRESHOLD: f32 = 8.0;

// ── Kreuzungen ──────────────────────────────────────────────────────

/// Welche anderen Connections bei der Kreuzungserkennung berücksichtigt werden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IntersectionFilter {
    /// Alle anderen Connections
    All,
    /// Nur Connections mit kleinerem Z-Index (dahinter)
    #[default]
    Behind,
    /// Nur Connections mit größerem Z-Index (davor)
    InFront,
}

/// Darstellung einer Kreuzung (wird nur an die Darstellung durchgereicht)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CrossingStyle {
    /// Linie an der Kreuzung unterbrechen
    #[default]
    Gap,
    /// Kleiner Bogen über die Kreuzung
    Detour,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `graph_editor_engine.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    pub history_max_depth: usize,

    // ── Nodes ───────────────────────────────────────────────────
    /// Minimale Node-Größe beim Resize
    pub node_min_size: f32,
    /// Größe neuer Nodes
    #[serde(default = "default_node_size")]
    pub node_default_size: [f32; 2],

    // ── Connectors ──────────────────────────────────────────────
    /// Detach-Flag für neu erzeugte Connectors
    #[serde(default = "default_detach_on_drag")]
    pub connector_detach_on_drag: bool,

    // ── Routing ─────────────────────────────────────────────────
    /// Toleranz für Joint-Insert auf einem Segment
    pub joint_insert_tolerance: f32,
    /// Einrast-Schwelle für Ausrichtungs-Hilfslinien
    pub alignment_snap_threshold: f32,
    /// Filter für die Kreuzungserkennung
    #[serde(default)]
    pub intersection_filter: IntersectionFilter,
    /// Darstellung von Kreuzungen
    #[serde(default)]
    pub crossing_style: CrossingStyle,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_max_depth: HISTORY_MAX_DEPTH,

            node_min_size: NODE_MIN_SIZE,
            node_default_size: NODE_DEFAULT_SIZE,

            connector_detach_on_drag: CONNECTOR_DETACH_ON_DRAG,

            joint_insert_tolerance: JOINT_INSERT_TOLERANCE,
            alignment_snap_threshold: ALIGNMENT_SNAP_THRESHOLD,
            intersection_filter: IntersectionFilter::default(),
            crossing_style: CrossingStyle::default(),
        }
    }
}

/// Serde-Default für `node_default_size` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_node_size() -> [f32; 2] {
    NODE_DEFAULT_SIZE
}

/// Serde-Default für `connector_detach_on_drag`.
fn default_detach_on_drag() -> bool {
    CONNECTOR_DETACH_ON_DRAG
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("graph_editor_engine"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("graph_editor_engine.toml")
    }

    /// Prüft die Werte auf Plausibilität.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.history_max_depth > 0, "Undo-Tiefe muss größer als 0 sein");
        anyhow::ensure!(
            self.node_min_size >= 0.0,
            "Minimale Node-Größe darf nicht negativ sein: {}",
            self.node_min_size
        );
        anyhow::ensure!(
            self.node_default_size.iter().all(|v| *v >= self.node_min_size),
            "Standardgröße {:?} unterschreitet die Mindestgröße {}",
            self.node_default_size,
            self.node_min_size
        );
        anyhow::ensure!(
            self.joint_insert_tolerance >= 0.0 && self.alignment_snap_threshold >= 0.0,
            "Toleranzen dürfen nicht negativ sein"
        );
        Ok(())
    }

    /// Standardgröße neuer Nodes als Vektor
    pub fn default_node_size(&self) -> glam::Vec2 {
        glam::Vec2::from(self.node_default_size)
    }

    /// Minimale Node-Größe als Vektor
    pub fn min_node_size(&self) -> glam::Vec2 {
        glam::Vec2::splat(self.node_min_size.max(0.0))
    }
}
