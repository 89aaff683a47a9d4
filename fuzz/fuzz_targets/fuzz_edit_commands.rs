#![no_main]

use libfuzzer_sys::fuzz_target;
use schaltprofil_editor::{Profile, TransitionSide};

/// Prüft die Modell-Invarianten nach jeder Operation.
fn assert_invariants(profile: &Profile) {
    let points = profile.points();
    assert!(points.len() >= 2);
    assert_eq!(points[0].x, 0.0);
    for pair in points.windows(2) {
        assert!(pair[0].x < pair[1].x);
    }
    assert!(points[points.len() - 1].x < profile.period());
    for point in points {
        if let Some(t) = point.transition {
            assert!(t.before > 0.0);
            assert!(t.after > 0.0);
        }
    }
}

// Jeder 6-Byte-Block wird zu einer Operation dekodiert. Egal welche Folge
// der Fuzzer erzeugt: das Profil muss nach jedem Schritt gültig bleiben.
fuzz_target!(|data: &[u8]| {
    let mut profile = Profile::default();

    for chunk in data.chunks_exact(6) {
        let id = chunk[1] as usize;
        let x_raw = u16::from_le_bytes([chunk[2], chunk[3]]) as f32;
        let x = x_raw / 65535.0 * 540.0 - 90.0;
        let y = chunk[4] as f32 / 255.0 * 1.2 - 0.1;
        let side = if chunk[5] % 2 == 0 {
            TransitionSide::Before
        } else {
            TransitionSide::After
        };

        match chunk[0] % 7 {
            0 => {
                profile.add_point(x, y);
            }
            1 => {
                profile.remove_point(id);
            }
            2 => {
                profile.move_point(id, x, y);
            }
            3 => {
                profile.apply_transition(id);
            }
            4 => {
                profile.remove_transition(id);
            }
            5 => {
                profile.move_transition_handle(id, side, x);
            }
            _ => {
                profile.move_start(x);
            }
        }

        assert_invariants(&profile);
    }
});
