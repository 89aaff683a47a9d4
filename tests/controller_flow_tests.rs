//! Integrationstests für den Intent→Command→Outcome-Datenfluss:
//! - Marker-Drags über alle Kanäle
//! - Vorbedingungs-Verweigerung ohne Zustandsänderung
//! - Kontextmenü-Intents mit fehlendem Marker-Index

use glam::Vec2;
use schaltprofil_editor::{
    EditCommand, EditIntent, EditOutcome, EditorController, EditorState, Level, MarkerChannel,
    Profile, ProfilePoint,
};

/// Sitzung über dem Referenzprofil mit drei harten Flanken (0 → 100 → 200).
fn session_0_100_200() -> (EditorController, EditorState) {
    let profile = Profile::from_points(
        360.0,
        vec![
            ProfilePoint::new(0.0, Level::Low),
            ProfilePoint::new(100.0, Level::High),
            ProfilePoint::new(200.0, Level::Low),
        ],
    )
    .expect("Seed ist gültig");
    (EditorController::new(), EditorState::with_profile(profile))
}

#[test]
fn test_handle_drag_bewegt_punkt() {
    let (mut controller, mut state) = session_0_100_200();

    let outcome = controller
        .handle_intent(
            &mut state,
            EditIntent::MarkerDragged {
                channel: MarkerChannel::Handle,
                index: 1,
                pos: Vec2::new(120.0, 0.2),
            },
        )
        .expect("Intent darf nicht fehlschlagen");

    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(state.profile.points()[1].x, 120.0);
    assert_eq!(state.profile.points()[1].level, Level::Low);
}

#[test]
fn test_handle_drag_ausserhalb_der_domaene_wird_verweigert() {
    let (mut controller, mut state) = session_0_100_200();
    let before = state.profile.points().to_vec();

    let outcome = controller
        .handle_intent(
            &mut state,
            EditIntent::MarkerDragged {
                channel: MarkerChannel::Handle,
                index: 1,
                pos: Vec2::new(400.0, 1.0),
            },
        )
        .expect("Intent darf nicht fehlschlagen");

    assert_eq!(outcome, EditOutcome::Rejected);
    assert_eq!(state.profile.points(), &before[..]);
}

#[test]
fn test_kontrollgriff_drag_formt_uebergang() {
    let (mut controller, mut state) = session_0_100_200();

    controller
        .handle_intent(
            &mut state,
            EditIntent::ApplyTransitionRequested { index: Some(1) },
        )
        .expect("Intent darf nicht fehlschlagen");

    let outcome = controller
        .handle_intent(
            &mut state,
            EditIntent::MarkerDragged {
                channel: MarkerChannel::ControlHandleBefore,
                index: 1,
                pos: Vec2::new(70.0, 0.5),
            },
        )
        .expect("Intent darf nicht fehlschlagen");

    assert_eq!(outcome, EditOutcome::Applied);
    let t = state.profile.points()[1].transition.expect("Übergang vorhanden");
    assert_eq!(t.before, 30.0);

    let tp = state.profile.transition_points(1).expect("Übergang vorhanden");
    assert_eq!(tp.p1.x, 70.0);
}

#[test]
fn test_start_drag_setzt_markierung() {
    let (mut controller, mut state) = session_0_100_200();

    let outcome = controller
        .handle_intent(
            &mut state,
            EditIntent::MarkerDragged {
                channel: MarkerChannel::StartHandle,
                index: 0,
                pos: Vec2::new(42.0, 0.3),
            },
        )
        .expect("Intent darf nicht fehlschlagen");

    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(state.profile.start(), Some(42.0));
}

#[test]
fn test_fehlender_marker_index_wird_verweigert() {
    let (mut controller, mut state) = session_0_100_200();
    let before = state.profile.points().to_vec();

    for intent in [
        EditIntent::RemoveRequested { index: None },
        EditIntent::ApplyTransitionRequested { index: None },
        EditIntent::RemoveTransitionRequested { index: None },
    ] {
        let outcome = controller
            .handle_intent(&mut state, intent)
            .expect("Intent darf nicht fehlschlagen");
        assert_eq!(outcome, EditOutcome::Rejected);
    }
    assert_eq!(state.profile.points(), &before[..]);
}

#[test]
fn test_vorbedingungen_der_commands() {
    let (_, state) = session_0_100_200();
    let last = state.profile.point_count() - 1;

    // Endpunkte sind nie löschbar, innere Punkte immer
    assert!(!EditCommand::RemovePoint { id: 0 }.can_execute(&state.profile));
    assert!(!EditCommand::RemovePoint { id: last }.can_execute(&state.profile));
    assert!(EditCommand::RemovePoint { id: 1 }.can_execute(&state.profile));

    // Einfügen ist vorbehaltlos erlaubt
    assert!(EditCommand::AddPoint { x: 999.0, y: 0.0 }.can_execute(&state.profile));

    // Übergang: anlegen nur ohne, entfernen nur mit vorhandenem Übergang
    assert!(EditCommand::ApplyTransition { id: 1 }.can_execute(&state.profile));
    assert!(!EditCommand::RemoveTransition { id: 1 }.can_execute(&state.profile));

    // Startmarkierung: halboffene Domäne
    assert!(EditCommand::MoveStart { new_x: 0.0 }.can_execute(&state.profile));
    assert!(!EditCommand::MoveStart { new_x: 360.0 }.can_execute(&state.profile));
}

#[test]
fn test_verweigertes_command_aendert_nichts() {
    let (mut controller, mut state) = session_0_100_200();
    let before = state.profile.points().to_vec();

    let outcome = controller
        .handle_command(&mut state, EditCommand::RemovePoint { id: 0 })
        .expect("Command darf nicht fehlschlagen");

    assert_eq!(outcome, EditOutcome::Rejected);
    assert_eq!(state.profile.points(), &before[..]);
}

#[test]
fn test_drag_sequenz_erhaelt_ordnung() {
    let (mut controller, mut state) = session_0_100_200();

    // Simulierter Drag: Punkt 1 in mehreren Schritten weit nach links
    for new_x in [80.0, 50.0, 20.0, 4.0, 1.0, 0.0] {
        controller
            .handle_intent(
                &mut state,
                EditIntent::MarkerDragged {
                    channel: MarkerChannel::Handle,
                    index: 1,
                    pos: Vec2::new(new_x, 1.0),
                },
            )
            .expect("Intent darf nicht fehlschlagen");

        for pair in state.profile.points().windows(2) {
            assert!(
                pair[0].x < pair[1].x,
                "Ordnung verletzt bei Drag auf {}",
                new_x
            );
        }
        assert_eq!(state.profile.points()[0].x, 0.0);
    }

    // Endlage: an der Formel-Grenze (Vorgänger 0 + Mindestabstand 5) geklemmt
    assert_eq!(state.profile.points()[1].x, 5.0);
}

#[test]
fn test_add_entfernen_lebenszyklus() {
    let (mut controller, mut state) = session_0_100_200();

    controller
        .handle_intent(
            &mut state,
            EditIntent::AddRequested {
                pos: Vec2::new(150.0, 0.8),
            },
        )
        .expect("Intent darf nicht fehlschlagen");
    assert_eq!(state.point_count(), 4);
    assert_eq!(state.profile.points()[2].x, 150.0);
    assert_eq!(state.profile.points()[2].level, Level::High);

    let outcome = controller
        .handle_intent(&mut state, EditIntent::RemoveRequested { index: Some(2) })
        .expect("Intent darf nicht fehlschlagen");
    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(state.point_count(), 3);
}
