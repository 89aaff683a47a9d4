//! Editor-Controller für die zentrale Event-Verarbeitung.

use super::{intent_mapping, use_cases};
use super::{EditCommand, EditIntent, EditorState};
use crate::core::EditOutcome;

/// Orchestriert View-Intents und Use-Cases auf dem EditorState.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command-Mapping.
    ///
    /// Intents ohne ausführbares Command (z.B. fehlender Marker-Index)
    /// werden als `Rejected` gemeldet.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditIntent,
    ) -> anyhow::Result<EditOutcome> {
        match intent_mapping::map_intent_to_command(intent) {
            Some(command) => self.handle_command(state, command),
            None => Ok(EditOutcome::Rejected),
        }
    }

    /// Führt ein mutierendes Command auf dem EditorState aus.
    ///
    /// Die Vorbedingung wird vor dem Dispatch geprüft; das Modell
    /// validiert bei der Ausführung unabhängig davon erneut.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditCommand,
    ) -> anyhow::Result<EditOutcome> {
        if !command.can_execute(&state.profile) {
            log::debug!("Command abgelehnt (Vorbedingung): {:?}", command);
            return Ok(EditOutcome::Rejected);
        }

        let outcome = match command {
            EditCommand::AddPoint { x, y } => use_cases::editing::add_point(state, x, y),
            EditCommand::RemovePoint { id } => use_cases::editing::remove_point(state, id),
            EditCommand::MovePoint { id, new_x, new_y } => {
                use_cases::editing::move_point(state, id, new_x, new_y)
            }
            EditCommand::ApplyTransition { id } => use_cases::transitions::apply(state, id),
            EditCommand::RemoveTransition { id } => use_cases::transitions::remove(state, id),
            EditCommand::MoveTransitionHandle { id, side, new_x } => {
                use_cases::transitions::move_handle(state, id, side, new_x)
            }
            EditCommand::MoveStart { new_x } => use_cases::editing::move_start(state, new_x),
        };

        Ok(outcome)
    }
}
