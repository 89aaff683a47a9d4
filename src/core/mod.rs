//! Core-Domänentypen: Stützpunkte, Übergänge, Profil und Geometrie.

pub mod geometry;
pub mod point;
/// Core-Datenmodell des Schaltprofil-Editors
///
/// Dieses Modul definiert die Haupt-Datenstruktur:
/// - Profile: periodische Punktfolge mit geschützten Editier-Operationen
pub mod profile;

pub use geometry::{boundary_split, interpolate, interpolate_t, wrap_phase};
pub use geometry::{BoundarySplit, TransitionPoints};
pub use point::{Level, ProfilePoint, Transition, TransitionSide};
pub use profile::{EditOutcome, Profile};
