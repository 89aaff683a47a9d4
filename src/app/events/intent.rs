use glam::Vec2;

/// Kanalname des angefassten Markers — die Auswahl-Identität, die die
/// View beim Ziehen oder Rechtsklick mitliefert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerChannel {
    /// Stützpunkt-Marker
    Handle,
    /// Kontrollgriff vor dem Punkt
    ControlHandleBefore,
    /// Kontrollgriff nach dem Punkt
    ControlHandleAfter,
    /// Startmarkierung
    StartHandle,
}

/// Eingaben aus der View, bereits in Modellkoordinaten übersetzt.
/// Intents tragen keine Mutationslogik.
#[derive(Debug, Clone)]
pub enum EditIntent {
    /// Marker wird gezogen (Zeigerposition in Modellkoordinaten)
    MarkerDragged {
        channel: MarkerChannel,
        index: usize,
        pos: Vec2,
    },
    /// Punkt an der Zeigerposition einfügen (Kontextmenü)
    AddRequested { pos: Vec2 },
    /// Punkt entfernen; der Index fehlt wenn kein Marker unter dem Zeiger liegt
    RemoveRequested { index: Option<usize> },
    /// Weichen Übergang am Punkt anlegen
    ApplyTransitionRequested { index: Option<usize> },
    /// Weichen Übergang am Punkt entfernen
    RemoveTransitionRequested { index: Option<usize> },
}
