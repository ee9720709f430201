//! Bat contact and batted-ball outcome resolution
//!
//! Two independent checks can finalize a batted ball: a fielder catching it
//! or the ball landing in a hit zone. The priority is explicit here rather
//! than an artifact of loop order: **fielders are checked before zones**,
//! in roster order, then zones in slot order; the first match wins and the
//! ball deactivates, so a fielder standing on a zone boundary always takes
//! the ball.

use glam::Vec2;

use super::state::{Ball, Bat, Fielder, HitZone};
use crate::Tuning;

/// Position of the bat tip at the bat's current angle
#[inline]
pub fn bat_tip(bat: &Bat, length: f32) -> Vec2 {
    bat.pivot + Vec2::new(bat.angle.cos(), bat.angle.sin()) * length
}

/// Launch power multiplier for contact at `dist_from_pivot`: barrel contact
/// (past the threshold) launches hot, handle contact launches weak
#[inline]
pub fn power_multiplier(dist_from_pivot: f32, tuning: &Tuning) -> f32 {
    if dist_from_pivot > tuning.barrel_threshold {
        tuning.barrel_power
    } else {
        tuning.handle_power
    }
}

/// Test the swinging bat against the ball and compute the launch velocity
/// on contact.
///
/// Valid only mid-swing, against a not-yet-hit ball that has come deep
/// enough to reach. Contact is a radius test around the bat tip; launch
/// direction is perpendicular to the bat (90 degrees ahead of its angle).
pub fn check_bat_contact(bat: &Bat, ball: &Ball, tuning: &Tuning) -> Option<Vec2> {
    if !bat.is_swinging || ball.hit || ball.pos.y <= tuning.bat_approach_depth {
        return None;
    }

    let tip = bat_tip(bat, tuning.bat_length);
    if ball.pos.distance(tip) >= tuning.bat_contact_radius {
        return None;
    }

    let launch_angle = bat.angle - std::f32::consts::FRAC_PI_2;
    let power = power_multiplier(ball.pos.distance(bat.pivot), tuning);
    let speed = tuning.hit_base_speed * power;
    Some(Vec2::new(launch_angle.cos(), launch_angle.sin()) * speed)
}

/// What a batted ball ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Caught by the fielder at this index
    Fielder(usize),
    /// Landed in the zone at this index
    Zone(usize),
}

/// Resolve a live batted ball against fielders then zones.
///
/// Returns the first contact in priority order, or `None` while the ball
/// is still in play.
pub fn resolve_contact(fielders: &[Fielder], zones: &[HitZone], ball_pos: Vec2) -> Option<Contact> {
    for (i, fielder) in fielders.iter().enumerate() {
        if ball_pos.distance(fielder.pos) < fielder.catch_radius() {
            return Some(Contact::Fielder(i));
        }
    }
    for (i, zone) in zones.iter().enumerate() {
        if zone.rect.contains_point(ball_pos) {
            return Some(Contact::Zone(i));
        }
    }
    None
}
