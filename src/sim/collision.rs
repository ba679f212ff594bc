//! Collision and termination checks
//!
//! Evaluated once per tick after integration. Checks short-circuit in a fixed
//! priority order and the first hit decides the outcome:
//! 1. leaving the field
//! 2. touching the platform
//! 3. touching a projectile
//! 4. touching the terrain
//! 5. hovering just above the platform slowly enough to count as landed
//!
//! Platform contact is tested before the landing predicate, so a ship that
//! has already sunk into the platform crashes even if it was slow. Landing
//! only counts while the ship is strictly above the platform top.

use super::geometry::{Rect, near_segment, overlaps};
use super::state::{CrashCause, Outcome, Ship, Terrain, World};
use crate::settings::Settings;

/// True if any edge of the ship lies outside the field (edges on the border are inside)
pub fn out_of_bounds(ship: &Rect, settings: &Settings) -> bool {
    ship.top() < 0.0
        || ship.bottom() > settings.field_height
        || ship.left() < 0.0
        || ship.right() > settings.field_width
}

/// True if either bottom corner of the ship is near a terrain segment
pub fn touches_terrain(ship: &Rect, terrain: &Terrain, epsilon: f64) -> bool {
    let corners = [ship.bottom_left(), ship.bottom_right()];
    terrain
        .segments()
        .any(|(a, b)| corners.iter().any(|&p| near_segment(a, b, p, epsilon)))
}

/// Slow enough and resting just above the platform, fully within its span
///
/// Velocities are compared signed: a ship rising fast still qualifies.
pub fn is_soft_landing(ship: &Ship, platform: &Rect, settings: &Settings) -> bool {
    let r = &ship.rect;
    ship.vel.x < settings.landing_max_dx
        && ship.vel.y < settings.landing_max_dy
        && r.left() > platform.left()
        && r.right() < platform.right()
        && r.bottom() < platform.top()
        && platform.top() - r.bottom() < settings.landing_buffer
}

/// Decide this tick's outcome from the current world
pub fn check(world: &World, settings: &Settings) -> Outcome {
    let ship = &world.ship;

    if out_of_bounds(&ship.rect, settings) {
        return Outcome::Crashed(CrashCause::OutOfBounds);
    }
    if overlaps(&ship.rect, &world.platform) {
        return Outcome::Crashed(CrashCause::Platform);
    }
    if world
        .projectiles
        .iter()
        .any(|p| overlaps(&ship.rect, &p.rect))
    {
        return Outcome::Crashed(CrashCause::Projectile);
    }
    if touches_terrain(&ship.rect, &world.terrain, settings.terrain_epsilon) {
        return Outcome::Crashed(CrashCause::Terrain);
    }
    if is_soft_landing(ship, &world.platform, settings) {
        return Outcome::Landed;
    }
    Outcome::Airborne
}
