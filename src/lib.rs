//! Lunar Lander - A 2D landing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, world state)
//! - `game`: Start/stop control surface and frontend hooks
//! - `settings`: Runtime-tunable physics and scenario configuration

pub mod game;
pub mod settings;
pub mod sim;

pub use game::{FrameStatus, Frontend, Game};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels, y grows downward)
    pub const FIELD_WIDTH: f64 = 400.0;
    pub const FIELD_HEIGHT: f64 = 400.0;

    /// Downward acceleration applied to every body each tick
    pub const GRAVITY: f64 = 0.01;
    /// Horizontal impulse from a side engine per tick
    pub const SIDE_ENGINE_THRUST: f64 = 0.01;
    /// Upward impulse from the main engine per tick
    pub const MAIN_ENGINE_THRUST: f64 = 0.03;
    /// Fuel burned per tick = thrust * this factor
    pub const FUEL_COST_FACTOR: f64 = 100.0;

    /// Ship size
    pub const SHIP_WIDTH: f64 = 8.0;
    pub const SHIP_HEIGHT: f64 = 22.0;
    /// Ship spawn box (top-left corner), each axis in [MIN, MIN + SPAN)
    pub const SHIP_SPAWN_MIN: f64 = 150.0;
    pub const SHIP_SPAWN_SPAN: f64 = 100.0;
    /// Starting fuel range [MIN, MAX)
    pub const SHIP_FUEL_MIN: f64 = 800.0;
    pub const SHIP_FUEL_MAX: f64 = 1200.0;

    /// Landing platform (x, y, w, h)
    pub const PLATFORM_X: f64 = 190.0;
    pub const PLATFORM_Y: f64 = 345.0;
    pub const PLATFORM_WIDTH: f64 = 25.0;
    pub const PLATFORM_HEIGHT: f64 = 5.0;

    /// Max gap between ship bottom and platform top that still counts as landed
    pub const LANDING_BUFFER: f64 = 3.0;
    /// Velocity limits for a soft landing (signed compare)
    pub const LANDING_MAX_DX: f64 = 0.2;
    pub const LANDING_MAX_DY: f64 = 0.2;

    /// Slack for the near-segment terrain test
    pub const TERRAIN_EPSILON: f64 = 0.1;

    /// Projectiles per game
    pub const PROJECTILE_COUNT: usize = 10;
    pub const PROJECTILE_SIZE: f64 = 4.0;

    /// Ground profile, left field edge to right field edge
    pub const TERRAIN_POINTS: [(f64, f64); 8] = [
        (0.0, 380.0),
        (60.0, 360.0),
        (120.0, 385.0),
        (190.0, 350.0),
        (215.0, 350.0),
        (280.0, 370.0),
        (340.0, 355.0),
        (400.0, 380.0),
    ];
}
