//! Layer-neutrale Konfiguration und Konstanten.

pub mod options;

pub use options::EditorOptions;
