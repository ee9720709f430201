//! Runner advancement engine
//!
//! A hit spawns one batch of runners: one for each occupied base plus the
//! batter. Bases vacate the moment the batch starts moving; occupancy and
//! scoring commit only when *every* runner in the batch has reached its
//! final target.

use super::field::{base_position, batters_box};
use super::schedule::Action;
use super::state::{GameEvent, GameState, Runner, ZoneKind};

/// Spawn the runner batch for a hit and vacate the bases.
///
/// Each occupied base produces a runner bound for `base + advance`; the
/// batter starts from the box bound for `advance - 1`. A final target of 3
/// or more means home.
pub fn spawn_batch(state: &mut GameState, kind: ZoneKind) {
    let Some(advance) = kind.advance() else {
        debug_assert!(false, "spawn_batch called with a non-hit outcome");
        return;
    };
    let advance = advance as i8;

    state.message = kind.message().to_string();
    state.runners.clear();
    for (i, occupied) in state.bases.into_iter().enumerate() {
        if occupied {
            state.runners.push(Runner {
                pos: base_position(i),
                current_target: i as i8,
                final_target: i as i8 + advance,
            });
        }
    }
    state.runners.push(Runner {
        pos: batters_box(),
        current_target: -1,
        final_target: advance - 1,
    });
    state.bases = [false; 3];
}

/// Advance every live runner one tick; commit the batch when all finish.
///
/// Runners chase the base after their current target (capped at home),
/// covering a fixed fraction of the remaining distance per tick and
/// snapping when close. Commit scores every runner whose final target is
/// home or beyond, re-occupies bases for the rest, and defers the inning
/// check so the scoreboard settles before play resumes.
pub fn advance(state: &mut GameState) {
    if state.runners.is_empty() {
        return;
    }

    let lerp = state.tuning.runner_lerp;
    let snap = state.tuning.runner_snap_dist;
    let mut all_finished = true;

    for runner in &mut state.runners {
        let next = runner.current_target + 1;
        let target = base_position(next.min(3) as usize);
        let delta = target - runner.pos;

        if delta.length() > snap {
            runner.pos += delta * lerp;
            all_finished = false;
        } else {
            runner.pos = target;
            if next < runner.final_target {
                runner.current_target = next;
                all_finished = false;
            }
        }
    }

    if !all_finished {
        return;
    }

    for runner in std::mem::take(&mut state.runners) {
        if runner.final_target >= 3 {
            state.score += 1;
            state.emit(GameEvent::RunScored);
        } else {
            debug_assert!((0..3).contains(&runner.final_target));
            state.bases[runner.final_target as usize] = true;
        }
    }

    state.queue.schedule(
        state.time_ticks + state.tuning.runner_epilogue_ticks as u64,
        state.pitch_serial,
        Action::RecheckInning,
    );
}
