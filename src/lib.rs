//! Sandlot Slugger - an arcade baseball mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio, and input capture live outside this crate. A renderer
//! consumes the serializable [`sim::GameState`] snapshot once per tick, an
//! audio backend drains the [`sim::GameEvent`]s produced that tick, and all
//! input is reduced to the single trigger in [`sim::TickInput`].

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; all per-tick rates assume this)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Simulation rate in ticks per second
    pub const TICK_HZ: u32 = 60;

    /// Field layout, in the classic canvas frame: x grows right, y grows
    /// *down* toward the plate, with the outfield arc above.
    pub const FIELD_CENTER_X: f32 = 400.0;
    pub const FIELD_CENTER_Y: f32 = 570.0;
    /// Outfield fence radius from the field center
    pub const FIELD_RADIUS: f32 = 520.0;
    /// Half-angle of fair territory around straightaway center (radians)
    pub const FOUL_SPREAD: f32 = 0.75;
    /// Distance from field center to first/third base along the foul lines
    pub const INFIELD_DIST: f32 = 210.0;

    /// Hit-zone ring along the outfield arc
    pub const ZONE_RING_RADIUS: f32 = 470.0;
    pub const ZONE_COUNT: usize = 11;
    pub const ZONE_WIDTH: f32 = 55.0;
    pub const ZONE_HEIGHT: f32 = 40.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Pitch release point (the mound)
    pub const BALL_SPAWN_X: f32 = 400.0;
    pub const BALL_SPAWN_Y: f32 = 395.0;
    /// Depth past which an un-hit pitch becomes a called strike
    pub const STRIKE_DEPTH: f32 = 600.0;

    /// Bat pivot (the batter's hands)
    pub const BAT_PIVOT_X: f32 = 350.0;
    pub const BAT_PIVOT_Y: f32 = 530.0;
    /// Bat rest angle; a swing sweeps until 90 degrees past this
    pub const BAT_REST_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

    /// Fielder sway phase advance per tick
    pub const FIELDER_SWAY_RATE: f32 = 2.0 / TICK_HZ as f32;

    /// Innings in a full game; inning `PLAYABLE_INNINGS + 1` is terminal
    pub const PLAYABLE_INNINGS: u8 = 3;
}

/// Center of the playing field
#[inline]
pub fn field_center() -> Vec2 {
    Vec2::new(consts::FIELD_CENTER_X, consts::FIELD_CENTER_Y)
}

/// Point at polar offset (r, theta) from the field center
#[inline]
pub fn field_polar(r: f32, theta: f32) -> Vec2 {
    field_center() + Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of a point as seen from the field center
#[inline]
pub fn angle_from_center(pos: Vec2) -> f32 {
    let rel = pos - field_center();
    rel.y.atan2(rel.x)
}
