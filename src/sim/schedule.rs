//! Deferred one-shot actions
//!
//! The arcade original leaned on wall-clock timers for "commit the ground
//! out in half a second" style sequencing. Here those become scheduled
//! actions keyed by (fire tick, guard token), polled once per tick by the
//! simulation. A pitch reset bumps the state's serial, so an action aimed
//! at a superseded pitch is dropped instead of mutating the new one.

use serde::{Deserialize, Serialize};

use super::state::ZoneKind;

/// What a deferred action does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Commit a finalized outcome (ground-out delay)
    CommitOutcome(ZoneKind),
    /// Reset the ball for a fresh pitch (foul delay)
    ResetPitch,
    /// Re-check inning end and reset, after a runner batch finishes
    RecheckInning,
}

/// An action waiting for its tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scheduled {
    pub fire_tick: u64,
    /// Pitch serial this action was scheduled against
    pub guard: u64,
    pub action: Action,
}

/// FIFO queue of deferred actions, drained once per simulation tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionQueue {
    pending: Vec<Scheduled>,
}

impl ActionQueue {
    /// Schedule `action` to fire at `fire_tick`, guarded by `guard`
    pub fn schedule(&mut self, fire_tick: u64, guard: u64, action: Action) {
        self.pending.push(Scheduled {
            fire_tick,
            guard,
            action,
        });
    }

    /// Remove every action due at or before `now` and return the ones whose
    /// guard still matches `current_guard`. Stale actions are dropped
    /// silently. Due actions keep their scheduling order.
    pub fn drain_due(&mut self, now: u64, current_guard: u64) -> Vec<Action> {
        let mut due = Vec::new();
        self.pending.retain(|s| {
            if s.fire_tick > now {
                return true;
            }
            if s.guard == current_guard {
                due.push(s.action);
            }
            false
        });
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
