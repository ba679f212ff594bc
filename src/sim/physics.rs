//! Per-tick integration
//!
//! Constant-acceleration explicit Euler: velocity first, then position.
//! One call advances exactly one tick; nothing here depends on wall-clock time.

use super::input::EngineFlags;
use super::state::{Projectile, Ship, World};
use crate::settings::Settings;

/// Apply gravity and any fueled thrusters to the ship, then move it
pub fn update_ship(ship: &mut Ship, engines: &EngineFlags, settings: &Settings) {
    ship.vel.y += settings.gravity;

    // Each engine re-checks fuel, so an earlier burn this tick can starve a later one
    if engines.right && ship.has_fuel() {
        ship.vel.x -= settings.side_engine_thrust;
        ship.fuel -= settings.side_engine_cost();
    }
    if engines.left && ship.has_fuel() {
        ship.vel.x += settings.side_engine_thrust;
        ship.fuel -= settings.side_engine_cost();
    }
    if engines.main && ship.has_fuel() {
        ship.vel.y -= settings.main_engine_thrust;
        ship.fuel -= settings.main_engine_cost();
    }

    ship.rect.translate(ship.vel);
}

/// Projectiles only feel gravity
pub fn update_projectile(projectile: &mut Projectile, settings: &Settings) {
    projectile.vel.y += settings.gravity;
    projectile.rect.translate(projectile.vel);
}

/// Advance every body in the world by one tick
pub fn step(world: &mut World, engines: &EngineFlags, settings: &Settings) {
    update_ship(&mut world.ship, engines, settings);
    for projectile in &mut world.projectiles {
        update_projectile(projectile, settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use crate::sim::state::Outcome;
    use glam::DVec2;

    fn ship_at_rest(fuel: f64) -> Ship {
        Ship {
            rect: Rect::new(100.0, 100.0, 8.0, 22.0),
            vel: DVec2::ZERO,
            fuel,
            outcome: Outcome::Airborne,
        }
    }

    #[test]
    fn test_gravity_only() {
        let settings = Settings::default();
        let mut ship = ship_at_rest(100.0);
        update_ship(&mut ship, &EngineFlags::default(), &settings);
        assert_eq!(ship.vel, DVec2::new(0.0, 0.01));
        // Velocity is applied before position
        assert!((ship.rect.y - 100.01).abs() < 1e-12);
        assert_eq!(ship.rect.x, 100.0);
        assert_eq!(ship.fuel, 100.0);
    }

    #[test]
    fn test_main_engine_drains_exactly() {
        let settings = Settings::default();
        let mut ship = ship_at_rest(100.0);
        let engines = EngineFlags {
            main: true,
            ..Default::default()
        };
        update_ship(&mut ship, &engines, &settings);
        assert_eq!(ship.fuel, 97.0);
        assert!((ship.vel.y - (0.01 - 0.03)).abs() < 1e-15);
    }

    #[test]
    fn test_side_engines_push_opposite_ways() {
        let settings = Settings::default();

        let mut ship = ship_at_rest(100.0);
        let right = EngineFlags {
            right: true,
            ..Default::default()
        };
        update_ship(&mut ship, &right, &settings);
        assert_eq!(ship.vel.x, -0.01);
        assert_eq!(ship.fuel, 99.0);

        let mut ship = ship_at_rest(100.0);
        let left = EngineFlags {
            left: true,
            ..Default::default()
        };
        update_ship(&mut ship, &left, &settings);
        assert_eq!(ship.vel.x, 0.01);
        assert_eq!(ship.fuel, 99.0);
    }

    #[test]
    fn test_all_engines_drain_together() {
        let settings = Settings::default();
        let mut ship = ship_at_rest(100.0);
        let all = EngineFlags {
            main: true,
            left: true,
            right: true,
        };
        update_ship(&mut ship, &all, &settings);
        // Side burns cancel, main still fires
        assert_eq!(ship.vel.x, 0.0);
        assert_eq!(ship.fuel, 95.0);
    }

    #[test]
    fn test_no_thrust_without_fuel() {
        let settings = Settings::default();
        let all = EngineFlags {
            main: true,
            left: true,
            right: true,
        };
        for fuel in [0.0, -2.0] {
            let mut ship = ship_at_rest(fuel);
            update_ship(&mut ship, &all, &settings);
            assert_eq!(ship.vel, DVec2::new(0.0, 0.01));
            assert_eq!(ship.fuel, fuel);
        }
    }

    #[test]
    fn test_fuel_can_go_negative_then_starves_later_engines() {
        let settings = Settings::default();
        let mut ship = ship_at_rest(0.5);
        let engines = EngineFlags {
            main: true,
            right: true,
            ..Default::default()
        };
        update_ship(&mut ship, &engines, &settings);
        // Right engine fires on 0.5 fuel and overdraws; main is then starved
        assert_eq!(ship.fuel, -0.5);
        assert_eq!(ship.vel.x, -0.01);
        assert_eq!(ship.vel.y, 0.01);
        assert_eq!(ship.fuel_display(), 0.0);
    }

    #[test]
    fn test_projectile_falls() {
        let settings = Settings::default();
        let mut p = Projectile {
            rect: Rect::new(50.0, 0.0, 4.0, 4.0),
            vel: DVec2::new(-0.5, 0.25),
        };
        update_projectile(&mut p, &settings);
        assert_eq!(p.vel.x, -0.5);
        assert!((p.vel.y - 0.26).abs() < 1e-12);
        assert_eq!(p.rect.x, 49.5);
        assert_eq!(p.rect.y, p.vel.y);
    }

    #[test]
    fn test_step_moves_every_body() {
        let settings = Settings::default();
        let mut rng = crate::sim::state::seeded_rng(5);
        let mut world = World::new(&settings, &mut rng);
        let before: Vec<f64> = world.projectiles.iter().map(|p| p.rect.y).collect();
        let ship_y = world.ship.rect.y;

        step(&mut world, &EngineFlags::default(), &settings);

        assert!(world.ship.rect.y > ship_y);
        for (p, y) in world.projectiles.iter().zip(before) {
            assert!(p.rect.y > y);
        }
    }
}
