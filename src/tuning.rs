//! Data-driven game balance
//!
//! Every balance knob the simulation reads lives here, with defaults that
//! reproduce the classic arcade feel. Overrides load from JSON; a bad file
//! is logged and ignored rather than aborting the game.
//!
//! Rates and delays are expressed per tick / in ticks (the sim runs at a
//! fixed 60 Hz, see [`crate::consts::TICK_HZ`]).

use serde::{Deserialize, Serialize};

/// Balance parameters for one game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Velocity multiplier applied to the ball every tick
    pub friction: f32,
    /// Idle ticks before an automatic follow-up pitch is released
    pub pitch_idle_ticks: u32,
    /// Ticks per countdown step before the first pitch of an inning
    pub countdown_step_ticks: u32,

    /// Distance from bat pivot to bat tip
    pub bat_length: f32,
    /// Contact radius around the bat tip
    pub bat_contact_radius: f32,
    /// Swing sweep rate (radians per tick)
    pub bat_swing_rate: f32,
    /// Ball must be at least this deep (y) for a swing to connect
    pub bat_approach_depth: f32,
    /// Pivot distance above which contact counts as barrel contact
    pub barrel_threshold: f32,
    /// Launch power multiplier for barrel contact
    pub barrel_power: f32,
    /// Launch power multiplier for handle contact
    pub handle_power: f32,
    /// Base launch speed of a struck ball (per tick)
    pub hit_base_speed: f32,

    /// Rebound trigger distance inside the outfield fence
    pub rebound_margin: f32,
    /// Fixed speed of the inward rebound
    pub rebound_speed: f32,
    /// Combined |vx|+|vy| below which a struck ball has settled
    pub settle_threshold: f32,

    /// Delay before a settled ball commits as a ground out
    pub ground_out_delay_ticks: u32,
    /// Delay before a foul ball resets to a fresh pitch
    pub foul_reset_delay_ticks: u32,
    /// Fielder highlight duration after recording an out
    pub blink_ticks: u32,

    /// Scale lost per shrink step when an outcome resolves
    pub shrink_step: f32,
    /// Ticks between shrink steps
    pub shrink_interval_ticks: u32,

    /// Ticks between slot-machine flickers during the reshuffle ritual
    pub flicker_interval_ticks: u32,
    /// Flicker steps before the shuffle commits
    pub flicker_count: u32,

    /// Fraction of remaining distance a runner covers per tick
    pub runner_lerp: f32,
    /// Snap-to-base distance
    pub runner_snap_dist: f32,
    /// Delay between a finished runner batch and the next inning check
    pub runner_epilogue_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            friction: 0.99,
            pitch_idle_ticks: 60,
            countdown_step_ticks: 60,
            bat_length: 65.0,
            bat_contact_radius: 45.0,
            bat_swing_rate: 0.38,
            bat_approach_depth: 480.0,
            barrel_threshold: 60.0,
            barrel_power: 1.1,
            handle_power: 0.6,
            hit_base_speed: 10.0,
            rebound_margin: 18.0,
            rebound_speed: 5.0,
            settle_threshold: 0.15,
            ground_out_delay_ticks: 30,
            foul_reset_delay_ticks: 60,
            blink_ticks: 60,
            shrink_step: 0.15,
            shrink_interval_ticks: 2,
            flicker_interval_ticks: 3,
            flicker_count: 21,
            runner_lerp: 0.08,
            runner_snap_dist: 5.0,
            runner_epilogue_ticks: 24,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_roundtrip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.friction, tuning.friction);
        assert_eq!(back.pitch_idle_ticks, tuning.pitch_idle_ticks);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{"hit_base_speed": 12.5}"#).unwrap();
        assert_eq!(tuning.hit_base_speed, 12.5);
        assert_eq!(tuning.friction, 0.99);
        assert_eq!(tuning.flicker_count, 21);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
