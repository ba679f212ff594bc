//! World state and core simulation types
//!
//! Everything a tick reads or writes lives in [`World`]. The host owns the
//! RNG and hands it in whenever randomized state is (re)generated, so a seed
//! reproduces a whole game.

use glam::DVec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::settings::Settings;

/// Seeded RNG used for world generation
pub type SimRng = Pcg32;

/// Create the world RNG for a game seed
pub fn seeded_rng(seed: u64) -> SimRng {
    Pcg32::seed_from_u64(seed)
}

/// What ended the flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Left the playfield
    OutOfBounds,
    /// Touched the platform without landing on it
    Platform,
    /// Hit a falling projectile
    Projectile,
    /// Touched the ground profile
    Terrain,
}

/// Terminal state of the ship
///
/// A single enum so crashed and landed can never both hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Airborne,
    Crashed(CrashCause),
    Landed,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Airborne)
    }

    /// Human-readable status line for the frontend (None while airborne)
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            Outcome::Airborne => None,
            Outcome::Crashed(_) => Some("GAME OVER - crashed"),
            Outcome::Landed => Some("LANDED - you win!"),
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub rect: Rect,
    pub vel: DVec2,
    /// Remaining fuel; may dip below zero on the tick it runs out
    pub fuel: f64,
    pub outcome: Outcome,
}

impl Ship {
    /// Place a ship with a random position, velocity and fuel load
    pub fn spawn(settings: &Settings, rng: &mut SimRng) -> Self {
        let x = settings.ship_spawn_min + rng.random::<f64>() * settings.ship_spawn_span;
        let y = settings.ship_spawn_min + rng.random::<f64>() * settings.ship_spawn_span;
        let vel = DVec2::new(rng.random::<f64>(), rng.random::<f64>());
        let fuel = if settings.ship_fuel_max > settings.ship_fuel_min {
            rng.random_range(settings.ship_fuel_min..settings.ship_fuel_max)
        } else {
            settings.ship_fuel_min
        };

        Self {
            rect: Rect::new(x, y, settings.ship_width, settings.ship_height),
            vel,
            fuel,
            outcome: Outcome::Airborne,
        }
    }

    #[inline]
    pub fn has_fuel(&self) -> bool {
        self.fuel > 0.0
    }

    /// Fuel as shown to the player (never negative)
    pub fn fuel_display(&self) -> f64 {
        self.fuel.max(0.0)
    }

    pub fn crashed(&self) -> bool {
        matches!(self.outcome, Outcome::Crashed(_))
    }

    pub fn landed(&self) -> bool {
        self.outcome == Outcome::Landed
    }
}

/// A falling hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub vel: DVec2,
}

impl Projectile {
    /// Drop a projectile from the top of the field at a random column
    pub fn spawn(settings: &Settings, rng: &mut SimRng) -> Self {
        let x = (rng.random::<f64>() * settings.field_width).floor();
        let vel = DVec2::new(rng.random_range(-1.0..1.0), rng.random::<f64>());
        Self {
            rect: Rect::new(x, 0.0, settings.projectile_size, settings.projectile_size),
            vel,
        }
    }
}

/// Ground profile as an ordered polyline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    pub points: Vec<DVec2>,
}

impl Terrain {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Consecutive point pairs, used for ship/ground collision
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Closed outline for filling the ground: drops from the first point to
    /// the field floor and back up to the last point
    pub fn outline(&self, field_height: f64) -> Vec<DVec2> {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Vec::new();
        };
        let mut outline = Vec::with_capacity(self.points.len() + 2);
        outline.push(DVec2::new(first.x, field_height));
        outline.extend(self.points.iter().copied());
        outline.push(DVec2::new(last.x, field_height));
        outline
    }
}

/// Complete simulation state for one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub platform: Rect,
    pub terrain: Terrain,
    /// Ticks advanced since the game started
    pub time_ticks: u64,
}

impl World {
    /// Build a fresh world: random ship and projectiles, fixed platform and terrain
    pub fn new(settings: &Settings, rng: &mut SimRng) -> Self {
        let mut world = Self {
            ship: Ship::spawn(settings, rng),
            projectiles: Vec::new(),
            platform: settings.platform,
            terrain: Terrain::new(settings.terrain.clone()),
            time_ticks: 0,
        };
        world.init_projectiles(settings, rng);
        world
    }

    /// Replace the projectile set with a newly generated one
    pub fn init_projectiles(&mut self, settings: &Settings, rng: &mut SimRng) {
        self.projectiles.clear();
        self.projectiles
            .extend((0..settings.projectile_count).map(|_| Projectile::spawn(settings, rng)));
        log::debug!("Generated {} projectiles", self.projectiles.len());
    }

    pub fn outcome(&self) -> Outcome {
        self.ship.outcome
    }
}
