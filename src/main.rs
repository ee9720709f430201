//! Headless demo entry point
//!
//! Runs the simulation with a simple auto-swing policy and logs the
//! play-by-play. Useful for smoke-testing balance changes and for watching
//! a full seeded game without a renderer attached.
//!
//! Usage: `sandlot-slugger [seed] [--ticks N] [--tuning FILE]`

use std::time::Instant;

use sandlot_slugger::Tuning;
use sandlot_slugger::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Default cap so a demo run always terminates
const DEFAULT_MAX_TICKS: u64 = 200_000;

struct Args {
    seed: u64,
    max_ticks: u64,
    tuning: Tuning,
}

fn parse_args() -> Args {
    let mut args = Args {
        seed: rand::random(),
        max_ticks: DEFAULT_MAX_TICKS,
        tuning: Tuning::default(),
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ticks" => {
                if let Some(n) = iter.next().and_then(|v| v.parse().ok()) {
                    args.max_ticks = n;
                }
            }
            "--tuning" => {
                if let Some(path) = iter.next() {
                    match std::fs::read_to_string(&path) {
                        Ok(json) => match Tuning::from_json(&json) {
                            Ok(tuning) => args.tuning = tuning,
                            Err(e) => log::warn!("Bad tuning file {path}: {e}; using defaults"),
                        },
                        Err(e) => log::warn!("Cannot read tuning file {path}: {e}"),
                    }
                }
            }
            other => {
                if let Ok(seed) = other.parse() {
                    args.seed = seed;
                }
            }
        }
    }
    args
}

/// Demo batter: swing as soon as an unstruck pitch gets close to the plate
fn auto_trigger(state: &GameState) -> bool {
    match state.phase {
        GamePhase::PreGame => true,
        GamePhase::GameOver => false,
        _ => {
            state.ball.is_moving
                && !state.ball.hit
                && !state.bat.is_swinging
                && state.ball.pos.y > 460.0
        }
    }
}

fn log_event(event: GameEvent, state: &GameState) {
    match event {
        GameEvent::TitleShown => log::info!("Play ball! Facing {}", state.fielders[0].label),
        GameEvent::PitchReleased => log::debug!("Pitch away at {:.1}", state.current_pitch_speed),
        GameEvent::ContactMade => log::debug!("Contact!"),
        GameEvent::OutRecorded => log::info!(
            "{} (inning {}, {} out)",
            state.message,
            state.inning.min(3),
            state.outs
        ),
        GameEvent::BaseHit(kind) => log::info!("{}", kind.message()),
        GameEvent::HomeRun => log::info!("HOMERUN!"),
        GameEvent::RunScored => log::info!("Run scores: {}", state.score),
        GameEvent::GameOver => log::info!("Game over - final score {}", state.score),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();
    log::info!("Seed {}, max {} ticks", args.seed, args.max_ticks);

    let mut state = GameState::with_tuning(args.seed, args.tuning);
    let started = Instant::now();

    for _ in 0..args.max_ticks {
        let input = TickInput {
            trigger: auto_trigger(&state),
        };
        tick(&mut state, &input);
        for event in state.take_events() {
            log_event(event, &state);
        }
        if state.game_over() {
            break;
        }
    }

    log::info!(
        "Final score {} after {} ticks ({:.0?} wall)",
        state.score,
        state.time_ticks,
        started.elapsed()
    );
}
