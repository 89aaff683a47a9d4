//! Editor-Zustand: Profil und Laufzeit-Optionen.

use crate::core::Profile;
use crate::shared::EditorOptions;

/// Hauptzustand einer Editier-Sitzung.
///
/// Das Profil gehört exklusiv der Sitzung; über Sitzungsgrenzen hinweg
/// wird nichts geteilt.
pub struct EditorState {
    /// Das bearbeitete Schaltprofil
    pub profile: Profile,
    /// Laufzeit-Optionen (Perioden-Default, Plot-Maße)
    pub options: EditorOptions,
}

impl EditorState {
    /// Erstellt eine Sitzung mit dem Demo-Profil
    pub fn new() -> Self {
        Self {
            profile: Profile::default(),
            options: EditorOptions::default(),
        }
    }

    /// Erstellt eine Sitzung mit einem aufrufer-seitigen Profil
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile,
            options: EditorOptions::default(),
        }
    }

    /// Anzahl der Stützpunkte (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.profile.point_count()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
