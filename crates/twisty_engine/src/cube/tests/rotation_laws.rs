//! Whole-engine rotation laws
//!
//! These drive the public session boundary the way a host frame loop would:
//! request a move, tick `update` with small frame deltas until the handle
//! resolves, then check the resulting grid state.

use crate::config::CubeConfig;
use crate::cube::grid::CubieKey;
use crate::cube::selector::{self, LAYER_SIZE};
use crate::cube::sequencer::CubeSession;
use crate::cube::{Axis, Face};
use crate::foundation::math::constants::HALF_PI;
use crate::foundation::math::{Quat, Vec3};
use approx::assert_relative_eq;

const FRAME: f32 = 0.016;
const MOVE_MS: f32 = 120.0;

fn session() -> CubeSession {
    CubeSession::new(CubeConfig::default()).unwrap()
}

fn run_move(session: &mut CubeSession, face: &str, invert: bool) {
    let handle = session.rotate_face(face, invert, MOVE_MS);
    let mut frames = 0;
    while !handle.is_resolved() {
        session.update(FRAME);
        frames += 1;
        assert!(frames < 1000, "move {}{:?} never completed", face, invert);
    }
    assert_eq!(handle.succeeded(), Some(true), "move {} refused", face);
}

fn poses(session: &CubeSession) -> Vec<(CubieKey, Vec3, Quat)> {
    session
        .grid()
        .cubies()
        .map(|(key, cubie)| (key, cubie.transform.position, cubie.transform.rotation))
        .collect()
}

fn assert_same_poses(before: &[(CubieKey, Vec3, Quat)], session: &CubeSession) {
    for (key, position, rotation) in before {
        let cubie = session.grid().cubie(*key).unwrap();
        assert_relative_eq!(cubie.transform.position, *position, epsilon = 1e-4);
        let dot = cubie.transform.rotation.coords.dot(&rotation.coords);
        assert!(
            dot.abs() > 0.999,
            "cubie {:?} orientation changed: dot = {}",
            key,
            dot
        );
    }
}

#[test]
fn test_four_quarter_turns_restore_every_cubie() {
    let mut session = session();
    let solved = poses(&session);

    for _ in 0..4 {
        run_move(&mut session, "R", false);
    }

    assert_same_poses(&solved, &session);
}

#[test]
fn test_face_then_prime_is_identity() {
    let mut session = session();
    let solved = poses(&session);

    run_move(&mut session, "F", false);
    run_move(&mut session, "F", true);

    assert_same_poses(&solved, &session);
}

#[test]
fn test_up_face_alternation_scenario() {
    let mut session = session();
    let solved = poses(&session);

    run_move(&mut session, "U", false);
    run_move(&mut session, "U", true);
    run_move(&mut session, "U", false);
    run_move(&mut session, "U", true);

    assert_same_poses(&solved, &session);
}

#[test]
fn test_right_turn_carries_front_column_to_top() {
    let mut session = session();
    let spacing = session.grid().spacing();

    run_move(&mut session, "R", false);

    // Clockwise R viewed from the right: the right-front-middle cubie ends up
    // right-top-middle, oriented a quarter turn about X.
    let (_, cubie) = session
        .grid()
        .cubies()
        .find(|(_, c)| c.home == (1, 0, 1))
        .unwrap();
    assert_relative_eq!(
        cubie.transform.position,
        Vec3::new(spacing, spacing, 0.0),
        epsilon = 1e-4
    );

    let expected = Quat::from_axis_angle(&Vec3::x_axis(), -HALF_PI);
    let dot = cubie.transform.rotation.coords.dot(&expected.coords);
    assert!(dot.abs() > 0.999);
}

#[test]
fn test_grid_invariant_survives_long_sequences() {
    let mut session = session();

    // A fixed scramble long enough for float drift to surface if the
    // per-move snap were missing.
    let scramble = [
        "R", "U", "F", "L", "D", "B", "R", "F", "U", "L", "B", "D", "F", "R", "U", "B", "L", "D",
        "U", "R", "F", "B", "L", "D", "R", "U", "F", "L", "B", "D",
    ];

    for (index, face) in scramble.iter().enumerate() {
        run_move(&mut session, face, index % 3 == 0);
        assert!(
            session.grid().is_aligned(),
            "grid drifted after move {} ({})",
            index,
            face
        );
    }

    // Every layer classification still resolves cleanly.
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        for layer in [-1i8, 0, 1] {
            assert_eq!(
                selector::select(session.grid(), axis, layer).len(),
                LAYER_SIZE
            );
        }
    }

    // All cubies still occupy distinct canonical points.
    let points = session.grid().canonical_points();
    let mut occupied = vec![false; points.len()];
    for (_, cubie) in session.grid().cubies() {
        let slot = points
            .iter()
            .position(|p| (p - cubie.transform.position).norm() < 1e-3)
            .expect("cubie off the canonical lattice");
        assert!(!occupied[slot], "two cubies on one grid point");
        occupied[slot] = true;
    }
}

#[test]
fn test_each_face_turn_permutes_only_its_layer() {
    for face in Face::ALL {
        let mut session = session();
        let spec = crate::cube::resolve(face, false);
        let members = selector::select(session.grid(), spec.axis, spec.layer);
        let others: Vec<_> = poses(&session)
            .into_iter()
            .filter(|(key, _, _)| !members.contains(key))
            .collect();

        run_move(&mut session, &face.letter().to_string(), false);

        assert_same_poses(&others, &session);
    }
}
