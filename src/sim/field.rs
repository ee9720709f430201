//! Static field geometry: bases, foul lines, zone slots, fielder posts
//!
//! Everything here is fixed layout. The only per-inning variation is which
//! outcome *type* each zone slot carries, and that assignment lives in game
//! state, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{field_center, field_polar};

/// Angle of the left foul line (third-base side) from the field center
#[inline]
pub fn left_foul_angle() -> f32 {
    std::f32::consts::PI * 1.5 - FOUL_SPREAD
}

/// Angle of the right foul line (first-base side) from the field center
#[inline]
pub fn right_foul_angle() -> f32 {
    std::f32::consts::PI * 1.5 + FOUL_SPREAD
}

/// Position of a base: 0 = first, 1 = second, 2 = third, 3 = home
pub fn base_position(idx: usize) -> Vec2 {
    let center = field_center();
    match idx {
        0 => field_polar(INFIELD_DIST, right_foul_angle()),
        1 => Vec2::new(center.x, center.y - INFIELD_DIST * 1.4),
        2 => field_polar(INFIELD_DIST, left_foul_angle()),
        _ => Vec2::new(center.x, center.y - 20.0),
    }
}

/// The batter's box, where the batter-runner starts
#[inline]
pub fn batters_box() -> Vec2 {
    base_position(3)
}

/// Whether a point lies outside the fair-territory cone.
///
/// Fair territory opens away from the plate between the two foul lines;
/// a point is foul when its center-relative offset falls outside the cone
/// with half-angle [`FOUL_SPREAD`].
pub fn is_foul(pos: Vec2) -> bool {
    let rel = pos - field_center();
    let slope = FOUL_SPREAD.tan();
    rel.x > -rel.y * slope || rel.x < rel.y * slope
}

/// A rectangle rotated about its center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotatedRect {
    pub center: Vec2,
    /// Half-width and half-height in the rect's local frame
    pub half_extents: Vec2,
    /// Rotation of the local frame (radians)
    pub angle: f32,
}

impl RotatedRect {
    pub fn new(center: Vec2, width: f32, height: f32, angle: f32) -> Self {
        Self {
            center,
            half_extents: Vec2::new(width / 2.0, height / 2.0),
            angle,
        }
    }

    /// Check containment by inverse-rotating the offset into the local frame
    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = point - self.center;
        let (sin, cos) = (-self.angle).sin_cos();
        let local = Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos);
        local.x.abs() < self.half_extents.x && local.y.abs() < self.half_extents.y
    }
}

/// Geometry of hit-zone slot `idx` along the outfield arc.
///
/// The 11 slots fan across slightly less than the full fair cone, tangent
/// to the arc (each rect is rotated a quarter turn past its radial angle).
pub fn zone_slot(idx: usize) -> RotatedRect {
    let first = std::f32::consts::PI * 1.5 - FOUL_SPREAD * 0.88;
    let step = FOUL_SPREAD * 1.76 / (ZONE_COUNT - 1) as f32;
    let theta = first + idx as f32 * step;
    RotatedRect::new(
        field_polar(ZONE_RING_RADIUS, theta),
        ZONE_WIDTH,
        ZONE_HEIGHT,
        theta + std::f32::consts::FRAC_PI_2,
    )
}

/// Defensive positions on the diamond
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FielderRole {
    Pitcher,
    First,
    Second,
    Shortstop,
    Third,
    Left,
    Center,
    Right,
}

impl FielderRole {
    pub fn abbrev(&self) -> &'static str {
        match self {
            FielderRole::Pitcher => "P",
            FielderRole::First => "1B",
            FielderRole::Second => "2B",
            FielderRole::Shortstop => "SS",
            FielderRole::Third => "3B",
            FielderRole::Left => "LF",
            FielderRole::Center => "CF",
            FielderRole::Right => "RF",
        }
    }
}

/// Fixed roster slot: role, home position, hitbox half-extents, sway range
pub struct FielderPost {
    pub role: FielderRole,
    pub home: Vec2,
    pub half_extents: Vec2,
    pub sway_range: f32,
}

/// The 8 defensive posts. The pitcher stands still; everyone else drifts
/// sideways around their home position.
pub fn fielder_posts() -> [FielderPost; 8] {
    let post = |role, x, y| FielderPost {
        role,
        home: Vec2::new(x, y),
        half_extents: Vec2::new(29.0 / 2.0, 19.0 / 2.0),
        sway_range: 30.0,
    };
    [
        FielderPost {
            role: FielderRole::Pitcher,
            home: Vec2::new(400.0, 390.0),
            half_extents: Vec2::new(18.0 / 2.0, 12.0 / 2.0),
            sway_range: 0.0,
        },
        post(FielderRole::First, 525.0, 380.0),
        post(FielderRole::Second, 460.0, 320.0),
        post(FielderRole::Shortstop, 340.0, 320.0),
        post(FielderRole::Third, 275.0, 380.0),
        post(FielderRole::Left, 250.0, 230.0),
        post(FielderRole::Center, 400.0, 185.0),
        post(FielderRole::Right, 550.0, 230.0),
    ]
}
