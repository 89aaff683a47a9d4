//! Use-Cases: Weiche Übergänge anlegen, entfernen und formen.

use crate::app::EditorState;
use crate::core::{EditOutcome, TransitionSide};

/// Legt den Standard-Übergang am Punkt `id` an.
pub fn apply(state: &mut EditorState, id: usize) -> EditOutcome {
    let outcome = state.profile.apply_transition(id);
    if outcome.was_applied() {
        log::info!("Übergang an Punkt {} angelegt", id);
    }
    outcome
}

/// Setzt den Punkt `id` auf eine harte Flanke zurück.
pub fn remove(state: &mut EditorState, id: usize) -> EditOutcome {
    let outcome = state.profile.remove_transition(id);
    if outcome.was_applied() {
        log::info!("Übergang an Punkt {} entfernt", id);
    }
    outcome
}

/// Zieht einen Kontrollgriff des Übergangs am Punkt `id`.
pub fn move_handle(state: &mut EditorState, id: usize, side: TransitionSide, new_x: f32) -> EditOutcome {
    let outcome = state.profile.move_transition_handle(id, side, new_x);
    if outcome == EditOutcome::Clamped {
        log::debug!(
            "Übergangsgriff {:?} an Punkt {} geklemmt (Vorschlag {:.1})",
            side,
            id,
            new_x
        );
    }
    outcome
}
