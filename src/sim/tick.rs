//! Simulation tick
//!
//! One call = integrate, then check. The tick rate belongs to the host; every
//! call advances by the same fixed increments.

use super::collision;
use super::input::EngineFlags;
use super::physics;
use super::state::{Outcome, World};
use crate::settings::Settings;

/// Advance the world by one tick and return the resulting outcome
///
/// Once the ship has crashed or landed the world is frozen: further calls
/// return the stored outcome without touching any state.
pub fn tick(world: &mut World, engines: &EngineFlags, settings: &Settings) -> Outcome {
    if world.ship.outcome.is_terminal() {
        return world.ship.outcome;
    }

    world.time_ticks += 1;
    physics::step(world, engines, settings);

    let outcome = collision::check(world, settings);
    world.ship.outcome = outcome;
    outcome
}
