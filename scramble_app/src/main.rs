//! Headless scramble demo
//!
//! Drives the rotation engine the way a rendering host would: a timer-based
//! frame loop ticks the session while a randomly generated scramble is fed
//! one move at a time. No window is opened; the point is to exercise the
//! full move lifecycle (accept, animate, snap, complete) end to end.

use rand::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;
use twisty_engine::config::Config;
use twisty_engine::foundation::logging;
use twisty_engine::prelude::*;

/// Number of random moves in the scramble
const SCRAMBLE_LENGTH: usize = 20;

/// Path checked for an optional geometry override
const CONFIG_PATH: &str = "cube.toml";

/// Sleep per frame, emulating a render loop cadence
const FRAME_BUDGET: Duration = Duration::from_millis(8);

fn load_config() -> CubeConfig {
    if std::path::Path::new(CONFIG_PATH).exists() {
        match CubeConfig::load_from_file(CONFIG_PATH) {
            Ok(config) => {
                log::info!("loaded cube config from {}", CONFIG_PATH);
                return config;
            }
            Err(err) => {
                log::warn!("failed to load {}: {}; using defaults", CONFIG_PATH, err);
            }
        }
    }
    CubeConfig::default()
}

fn random_scramble(length: usize) -> Vec<(Face, bool)> {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let face = *Face::ALL.choose(&mut rng).expect("faces are non-empty");
            (face, rng.gen_bool(0.5))
        })
        .collect()
}

fn format_scramble(moves: &[(Face, bool)]) -> String {
    moves
        .iter()
        .map(|(face, invert)| format!("{}{}", face.letter(), if *invert { "'" } else { "" }))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), CubeError> {
    logging::init();

    let config = load_config();
    let duration_ms = config.default_move_duration_ms;
    let mut session = CubeSession::new(config)?;

    let completed = Rc::new(Cell::new(0usize));
    let observed = Rc::clone(&completed);
    session.set_move_observer(move || observed.set(observed.get() + 1));

    let scramble = random_scramble(SCRAMBLE_LENGTH);
    log::info!("scramble: {}", format_scramble(&scramble));

    let mut timer = Timer::new();
    let mut pending = scramble.into_iter();
    let mut current: Option<MoveHandle> = None;

    loop {
        timer.update();
        session.update(timer.delta_time());

        let in_flight = current.as_ref().is_some_and(|handle| !handle.is_resolved());
        if !in_flight {
            match pending.next() {
                Some((face, invert)) => {
                    log::info!(
                        "applying {}{}",
                        face.letter(),
                        if invert { "'" } else { "" }
                    );
                    current = Some(session.rotate(face, invert, duration_ms));
                }
                None => break,
            }
        }

        thread::sleep(FRAME_BUDGET);
    }

    log::info!(
        "scramble finished: {} moves in {:.2}s over {} frames, grid aligned: {}",
        completed.get(),
        timer.total_time(),
        timer.frame_count(),
        session.grid().is_aligned()
    );

    Ok(())
}
