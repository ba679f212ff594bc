//! Runtime physics and scenario settings
//!
//! Mirrors every constant in [`crate::consts`]. Settings can be loaded from
//! JSON; missing keys fall back to the compile-time defaults, so a file only
//! needs the values it overrides.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Rect;

/// Errors raised while loading settings
#[derive(Debug)]
pub enum SettingsError {
    /// The JSON document could not be parsed
    Parse(serde_json::Error),
    /// A value is outside the range the simulation can work with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(err) => write!(f, "failed to parse settings: {err}"),
            SettingsError::Invalid { field, reason } => {
                write!(f, "invalid setting `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(err) => Some(err),
            SettingsError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Physics tuning and scenario layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f64,
    pub field_height: f64,

    // === Physics ===
    pub gravity: f64,
    pub side_engine_thrust: f64,
    pub main_engine_thrust: f64,
    pub fuel_cost_factor: f64,

    // === Ship ===
    pub ship_width: f64,
    pub ship_height: f64,
    pub ship_spawn_min: f64,
    pub ship_spawn_span: f64,
    pub ship_fuel_min: f64,
    pub ship_fuel_max: f64,

    // === Landing ===
    pub platform: Rect,
    pub landing_buffer: f64,
    pub landing_max_dx: f64,
    pub landing_max_dy: f64,

    // === Hazards ===
    pub terrain_epsilon: f64,
    pub terrain: Vec<DVec2>,
    pub projectile_count: usize,
    pub projectile_size: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            gravity: GRAVITY,
            side_engine_thrust: SIDE_ENGINE_THRUST,
            main_engine_thrust: MAIN_ENGINE_THRUST,
            fuel_cost_factor: FUEL_COST_FACTOR,

            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_spawn_min: SHIP_SPAWN_MIN,
            ship_spawn_span: SHIP_SPAWN_SPAN,
            ship_fuel_min: SHIP_FUEL_MIN,
            ship_fuel_max: SHIP_FUEL_MAX,

            platform: Rect::new(PLATFORM_X, PLATFORM_Y, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            landing_buffer: LANDING_BUFFER,
            landing_max_dx: LANDING_MAX_DX,
            landing_max_dy: LANDING_MAX_DY,

            terrain_epsilon: TERRAIN_EPSILON,
            terrain: TERRAIN_POINTS
                .iter()
                .map(|&(x, y)| DVec2::new(x, y))
                .collect(),
            projectile_count: PROJECTILE_COUNT,
            projectile_size: PROJECTILE_SIZE,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON (handy as a template for overrides)
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
            if value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be greater than zero",
                })
            }
        }

        fn non_negative(field: &'static str, value: f64) -> Result<(), SettingsError> {
            if value >= 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must not be negative",
                })
            }
        }

        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("ship_width", self.ship_width)?;
        positive("ship_height", self.ship_height)?;
        positive("projectile_size", self.projectile_size)?;
        positive("platform.w", self.platform.w)?;
        positive("platform.h", self.platform.h)?;

        non_negative("gravity", self.gravity)?;
        non_negative("side_engine_thrust", self.side_engine_thrust)?;
        non_negative("main_engine_thrust", self.main_engine_thrust)?;
        non_negative("fuel_cost_factor", self.fuel_cost_factor)?;
        non_negative("ship_spawn_span", self.ship_spawn_span)?;
        non_negative("ship_fuel_min", self.ship_fuel_min)?;
        non_negative("landing_buffer", self.landing_buffer)?;
        non_negative("terrain_epsilon", self.terrain_epsilon)?;

        if self.ship_fuel_max < self.ship_fuel_min {
            return Err(SettingsError::Invalid {
                field: "ship_fuel_max",
                reason: "must not be below ship_fuel_min",
            });
        }
        if self.terrain.len() < 2 {
            return Err(SettingsError::Invalid {
                field: "terrain",
                reason: "needs at least two points",
            });
        }
        Ok(())
    }

    /// Fuel burned by one tick of a side engine
    #[inline]
    pub fn side_engine_cost(&self) -> f64 {
        self.side_engine_thrust * self.fuel_cost_factor
    }

    /// Fuel burned by one tick of the main engine
    #[inline]
    pub fn main_engine_cost(&self) -> f64 {
        self.main_engine_thrust * self.fuel_cost_factor
    }

    /// Load settings for the native host from an optional JSON file
    ///
    /// Falls back to defaults when no path is given or the file is unusable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Browser host always runs the stock scenario
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}
