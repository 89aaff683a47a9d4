//! Use-Cases: Stützpunkte einfügen, entfernen, ziehen; Startmarkierung setzen.

use crate::app::EditorState;
use crate::core::EditOutcome;

/// Fügt einen Punkt an der Zeigerposition ein.
///
/// Der Pegel wird quantisiert; liegt die Position auf keinem offenen
/// Intervall zweier Nachbarn, bleibt das Profil unverändert.
pub fn add_point(state: &mut EditorState, x: f32, y: f32) -> EditOutcome {
    let outcome = state.profile.add_point(x, y);
    match outcome {
        EditOutcome::Rejected => log::warn!(
            "Kein Punkt einfügbar: x = {:.1} liegt nicht strikt zwischen zwei Stützpunkten",
            x
        ),
        _ => log::info!(
            "Punkt bei ({:.1}, {:.1}) eingefügt ({} Punkte gesamt)",
            x,
            y,
            state.profile.point_count()
        ),
    }
    outcome
}

/// Entfernt den inneren Punkt `id`.
pub fn remove_point(state: &mut EditorState, id: usize) -> EditOutcome {
    let outcome = state.profile.remove_point(id);
    if outcome.was_applied() {
        log::info!(
            "Punkt {} entfernt ({} Punkte verbleiben)",
            id,
            state.profile.point_count()
        );
    }
    outcome
}

/// Zieht den Punkt `id` auf eine neue Position (mit Klemmen).
pub fn move_point(state: &mut EditorState, id: usize, new_x: f32, new_y: f32) -> EditOutcome {
    let outcome = state.profile.move_point(id, new_x, new_y);
    if outcome == EditOutcome::Clamped {
        log::debug!(
            "Punkt {} geklemmt: Vorschlag {:.1} → {:.1}",
            id,
            new_x,
            state.profile.points()[id].x
        );
    }
    outcome
}

/// Setzt die visuelle Startmarkierung.
pub fn move_start(state: &mut EditorState, new_x: f32) -> EditOutcome {
    let outcome = state.profile.move_start(new_x);
    if outcome.was_applied() {
        log::info!("Startmarkierung auf {:.1} gesetzt", new_x);
    }
    outcome
}
