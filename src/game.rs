//! Game session: start/stop control surface around the simulation
//!
//! The host drives [`Game::frame`] from its frame scheduler (e.g.
//! `requestAnimationFrame`) and forwards key events to [`Game::handle_key`].
//! Everything visible goes out through the [`Frontend`] hooks.

use crate::settings::Settings;
use crate::sim::{EngineFlags, InputEvent, Outcome, SimRng, World, seeded_rng, tick};

/// Hooks the host implements to show the game
pub trait Frontend {
    /// Draw the current world and engine state; called once per non-terminal frame
    fn render(&mut self, world: &World, engines: &EngineFlags);

    /// Show the outcome; called exactly once when a game ends
    fn show_status(&mut self, message: &str);

    /// Clear any previous outcome when a new game starts
    fn clear_status(&mut self) {}

    /// Enable or disable the start control
    fn set_start_enabled(&mut self, _enabled: bool) {}
}

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Halted,
}

/// A playable session
pub struct Game<F: Frontend> {
    settings: Settings,
    frontend: F,
    rng: SimRng,
    world: World,
    engines: EngineFlags,
    /// Input source attached (key events are consumed)
    listening: bool,
    /// Tick loop active
    running: bool,
}

impl<F: Frontend> Game<F> {
    pub fn new(settings: Settings, frontend: F, seed: u64) -> Self {
        let mut rng = seeded_rng(seed);
        let world = World::new(&settings, &mut rng);
        Self {
            settings,
            frontend,
            rng,
            world,
            engines: EngineFlags::default(),
            listening: false,
            running: false,
        }
    }

    /// Start a new game from scratch
    ///
    /// Returns false (and changes nothing) if a game is already running.
    pub fn start(&mut self, seed: u64) -> bool {
        if self.running {
            log::warn!("Start ignored: a game is already running");
            return false;
        }

        self.frontend.set_start_enabled(false);
        self.frontend.clear_status();

        self.rng = seeded_rng(seed);
        self.world = World::new(&self.settings, &mut self.rng);
        self.engines.clear();

        self.listening = true;
        self.running = true;
        log::info!("Game started with seed: {}", seed);
        true
    }

    /// Detach input and re-enable starting
    fn stop(&mut self) {
        self.listening = false;
        self.running = false;
        self.frontend.set_start_enabled(true);
    }

    /// Run one tick; render if still flying, otherwise report and stop
    pub fn frame(&mut self) -> FrameStatus {
        if !self.running {
            return FrameStatus::Halted;
        }

        let outcome = tick(&mut self.world, &self.engines, &self.settings);
        match outcome {
            Outcome::Airborne => {
                self.frontend.render(&self.world, &self.engines);
                FrameStatus::Continue
            }
            Outcome::Crashed(cause) => {
                log::debug!("Crash cause: {:?}", cause);
                self.finish(outcome)
            }
            Outcome::Landed => self.finish(outcome),
        }
    }

    fn finish(&mut self, outcome: Outcome) -> FrameStatus {
        log::info!(
            "Game over after {} ticks: {:?} (fuel left {:.1})",
            self.world.time_ticks,
            outcome,
            self.world.ship.fuel_display()
        );
        if let Some(message) = outcome.status_message() {
            self.frontend.show_status(message);
        }
        self.stop();
        FrameStatus::Halted
    }

    /// Feed a raw key event; returns true if it was consumed
    ///
    /// Consumed events should have their default host behavior suppressed.
    /// Keys without an engine binding, and any key while no game is
    /// listening, are left alone.
    pub fn handle_key(&mut self, key_code: u32, pressed: bool) -> bool {
        if !self.listening {
            return false;
        }
        match InputEvent::from_key(key_code, pressed) {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Set or clear an engine flag directly
    pub fn apply(&mut self, event: InputEvent) {
        self.engines.apply(event);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for scripted scenarios
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn engines(&self) -> &EngineFlags {
        &self.engines
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}
