//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-call increments only (no wall-clock time)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod input;
pub mod physics;
pub mod state;
pub mod tick;

pub use geometry::{Rect, distance, near_segment, overlaps};
pub use input::{EngineFlags, EngineLine, InputEvent};
pub use state::{CrashCause, Outcome, Projectile, Ship, SimRng, Terrain, World, seeded_rng};
pub use tick::tick;
