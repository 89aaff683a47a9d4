//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
mod intent_mapping;
/// Editor-Zustand einer Sitzung (Profil + Optionen)
pub mod state;
pub mod use_cases;

pub use controller::EditorController;
pub use events::{EditCommand, EditIntent, MarkerChannel};
pub use state::EditorState;
