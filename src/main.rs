//! Schaltprofil-Editor (headless Demo-Session).
//!
//! Spielt eine kurze Editier-Sitzung auf dem Demo-Profil ab und
//! protokolliert jeden Schritt. Die grafischen Frontends binden die
//! Library direkt ein; diese Binary dient als Smoke-Lauf.

use glam::Vec2;
use schaltprofil_editor::{
    EditIntent, EditorController, EditorOptions, EditorState, MarkerChannel,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Schaltprofil-Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = EditorState::new();
    state.options = options;
    let mut controller = EditorController::new();

    // Kurze Demo-Sitzung: Punkt einfügen, ziehen, Übergang anlegen und formen
    let script = [
        EditIntent::AddRequested {
            pos: Vec2::new(90.0, 0.8),
        },
        EditIntent::MarkerDragged {
            channel: MarkerChannel::Handle,
            index: 2,
            pos: Vec2::new(100.0, 0.9),
        },
        EditIntent::ApplyTransitionRequested { index: Some(2) },
        EditIntent::MarkerDragged {
            channel: MarkerChannel::ControlHandleAfter,
            index: 2,
            pos: Vec2::new(130.0, 0.5),
        },
        EditIntent::MarkerDragged {
            channel: MarkerChannel::StartHandle,
            index: 0,
            pos: Vec2::new(45.0, 0.0),
        },
    ];

    for intent in script {
        let outcome = controller.handle_intent(&mut state, intent)?;
        log::info!("Ergebnis: {:?}", outcome);
    }

    for (i, point) in state.profile.points().iter().enumerate() {
        match state.profile.transition_points(i) {
            Some(tp) => log::info!(
                "Punkt {}: x = {:.1}, Pegel = {:.0}, Übergang ({:.1} → {:.1})",
                i,
                point.x,
                point.level.value(),
                tp.p1.x,
                tp.p3.x
            ),
            None => log::info!(
                "Punkt {}: x = {:.1}, Pegel = {:.0}, harte Flanke",
                i,
                point.x,
                point.level.value()
            ),
        }
    }

    Ok(())
}
