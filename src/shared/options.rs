//! Zentrale Konfiguration für den Schaltprofil-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Profil ──────────────────────────────────────────────────────────

/// Standard-Periodenlänge (Grad einer Umdrehung).
pub const DEFAULT_PERIOD: f32 = 360.0;
/// Mindestabstand zwischen Kontrollpunkten und Nachbargrenzen (Phaseneinheiten).
pub const MIN_GAP: f32 = 5.0;
/// Breite neu angelegter Übergänge, vor und nach dem Punkt.
pub const DEFAULT_TRANSITION_WIDTH: f32 = 5.0;
/// Quantisierungs-Schwelle für Pegel-Eingaben.
pub const LEVEL_THRESHOLD: f32 = 0.5;

// ── Plot (von der View konsumiert) ──────────────────────────────────

/// Marker-Durchmesser in Pixeln.
pub const MARKER_SIZE_PX: f32 = 10.0;
/// Horizontales Plot-Padding in Pixeln.
pub const PLOT_PADDING_X_PX: f32 = 30.0;
/// Vertikales Plot-Padding in Pixeln.
pub const PLOT_PADDING_Y_PX: f32 = 30.0;
/// Mindesthöhe des Plot-Bereichs in Pixeln.
pub const MIN_PLOT_HEIGHT_PX: f32 = 100.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `schaltprofil_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Profil ──────────────────────────────────────────────────
    /// Periodenlänge neu angelegter Profile
    pub default_period: f32,

    // ── Plot ────────────────────────────────────────────────────
    /// Marker-Durchmesser in Pixeln
    pub marker_size_px: f32,
    /// Horizontales Plot-Padding in Pixeln
    pub plot_padding_x_px: f32,
    /// Vertikales Plot-Padding in Pixeln
    pub plot_padding_y_px: f32,
    /// Mindesthöhe des Plot-Bereichs in Pixeln
    #[serde(default = "default_min_plot_height_px")]
    pub min_plot_height_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_period: DEFAULT_PERIOD,
            marker_size_px: MARKER_SIZE_PX,
            plot_padding_x_px: PLOT_PADDING_X_PX,
            plot_padding_y_px: PLOT_PADDING_Y_PX,
            min_plot_height_px: MIN_PLOT_HEIGHT_PX,
        }
    }
}

/// Serde-Default für `min_plot_height_px` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_min_plot_height_px() -> f32 {
    MIN_PLOT_HEIGHT_PX
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
            .unwrap_or_else(|_| std::path::PathBuf::from("schaltprofil_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("schaltprofil_editor.toml")
    }

    /// Berechnet den Marker-Treffradius in Pixeln.
    ///
    /// `marker_size_px / 2` — die View meldet einen Marker als getroffen,
    /// wenn der Zeiger in beiden Achsen näher als dieser Radius liegt.
    pub fn marker_hit_radius(&self) -> f32 {
        self.marker_size_px / 2.0
    }
}
