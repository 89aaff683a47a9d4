//! Mapping von View-Intents auf mutierende Edit-Commands.

use super::{EditCommand, EditIntent, MarkerChannel};
use crate::core::TransitionSide;

/// Übersetzt einen `EditIntent` in ein ausführbares `EditCommand`.
///
/// Intents ohne Ziel (fehlender Marker-Index unter dem Zeiger) ergeben
/// kein Command; die Vorbedingungs-Prüfung übernimmt der Controller.
pub fn map_intent_to_command(intent: EditIntent) -> Option<EditCommand> {
    match intent {
        EditIntent::MarkerDragged {
            channel,
            index,
            pos,
        } => Some(match channel {
            MarkerChannel::Handle => EditCommand::MovePoint {
                id: index,
                new_x: pos.x,
                new_y: pos.y,
            },
            MarkerChannel::ControlHandleBefore => EditCommand::MoveTransitionHandle {
                id: index,
                side: TransitionSide::Before,
                new_x: pos.x,
            },
            MarkerChannel::ControlHandleAfter => EditCommand::MoveTransitionHandle {
                id: index,
                side: TransitionSide::After,
                new_x: pos.x,
            },
            MarkerChannel::StartHandle => EditCommand::MoveStart { new_x: pos.x },
        }),
        EditIntent::AddRequested { pos } => Some(EditCommand::AddPoint { x: pos.x, y: pos.y }),
        EditIntent::RemoveRequested { index } => index.map(|id| EditCommand::RemovePoint { id }),
        EditIntent::ApplyTransitionRequested { index } => {
            index.map(|id| EditCommand::ApplyTransition { id })
        }
        EditIntent::RemoveTransitionRequested { index } => {
            index.map(|id| EditCommand::RemoveTransition { id })
        }
    }
}
