//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (60 Hz ticks)
//! - Seeded RNG only
//! - Stable iteration order (roster order for fielders, slot order for zones)
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod field;
pub mod runners;
pub mod schedule;
pub mod state;
pub mod tick;

pub use collision::{Contact, check_bat_contact, resolve_contact};
pub use field::{FielderRole, RotatedRect, base_position, is_foul, zone_slot};
pub use schedule::{Action, ActionQueue};
pub use state::{
    Ball, Bat, Countdown, Fielder, GameEvent, GamePhase, GameState, HitZone, Pitcher, Runner,
    ZONE_TYPES, ZoneKind,
};
pub use tick::{TickInput, tick};
