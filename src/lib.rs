//! Schaltprofil-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und die Frontends.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{EditCommand, EditIntent, EditorController, EditorState, MarkerChannel};
pub use core::{
    boundary_split, interpolate, interpolate_t, wrap_phase, BoundarySplit, EditOutcome, Level,
    Profile, ProfilePoint, Transition, TransitionPoints, TransitionSide,
};
pub use shared::EditorOptions;
