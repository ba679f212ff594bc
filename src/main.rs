//! Lunar Lander entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Element, HtmlButtonElement, HtmlCanvasElement, KeyboardEvent,
    };

    use glam::DVec2;
    use lunar_lander::sim::{EngineFlags, World};
    use lunar_lander::{FrameStatus, Frontend, Game, Settings};

    /// Canvas 2D renderer plus the status line and start button
    struct CanvasFrontend {
        ctx: CanvasRenderingContext2d,
        status: Element,
        start_btn: HtmlButtonElement,
        width: f64,
        height: f64,
    }

    impl CanvasFrontend {
        fn fill_polygon(&self, points: &[DVec2], color: &str) {
            let Some((first, rest)) = points.split_first() else {
                return;
            };
            self.ctx.begin_path();
            self.ctx.move_to(first.x, first.y);
            for p in rest {
                self.ctx.line_to(p.x, p.y);
            }
            self.ctx.close_path();
            self.ctx.set_fill_style_str(color);
            self.ctx.fill();
        }

        fn draw_ship(&self, world: &World, engines: &EngineFlags) {
            let r = &world.ship.rect;
            self.ctx.set_fill_style_str("black");
            self.ctx.fill_rect(r.x, r.y, r.w, r.h);

            // Flicker the flames a little each frame
            let flicker = || js_sys::Math::random() * 10.0;
            let mid_y = r.center().y;
            if engines.main {
                self.fill_polygon(
                    &[
                        r.bottom_left(),
                        r.bottom_right(),
                        DVec2::new(r.center().x, r.bottom() + flicker()),
                    ],
                    "orange",
                );
            }
            if engines.right {
                self.fill_polygon(
                    &[
                        DVec2::new(r.right(), r.top() + r.h * 0.25),
                        DVec2::new(r.right() + flicker(), mid_y),
                        DVec2::new(r.right(), r.top() + r.h * 0.75),
                    ],
                    "orange",
                );
            }
            if engines.left {
                self.fill_polygon(
                    &[
                        DVec2::new(r.left(), r.top() + r.h * 0.25),
                        DVec2::new(r.left() - flicker(), mid_y),
                        DVec2::new(r.left(), r.top() + r.h * 0.75),
                    ],
                    "orange",
                );
            }
        }
    }

    impl Frontend for CanvasFrontend {
        fn render(&mut self, world: &World, engines: &EngineFlags) {
            self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

            self.fill_polygon(&world.terrain.outline(self.height), "gray");

            self.ctx.set_fill_style_str("red");
            for p in &world.projectiles {
                self.ctx.fill_rect(p.rect.x, p.rect.y, p.rect.w, p.rect.h);
            }

            self.draw_ship(world, engines);

            let platform = &world.platform;
            self.ctx.set_fill_style_str("blue");
            self.ctx.fill_rect(platform.x, platform.y, platform.w, platform.h);

            self.ctx.set_fill_style_str("black");
            let fuel = format!("Fuel: {:.0}", world.ship.fuel_display());
            let _ = self.ctx.fill_text(&fuel, 10.0, 20.0);
        }

        fn show_status(&mut self, message: &str) {
            self.status.set_text_content(Some(message));
        }

        fn clear_status(&mut self) {
            self.status.set_text_content(Some(""));
        }

        fn set_start_enabled(&mut self, enabled: bool) {
            self.start_btn.set_disabled(!enabled);
        }
    }

    type SharedGame = Rc<RefCell<Game<CanvasFrontend>>>;

    fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.request_animation_frame(f.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }

    /// Tick once per animation frame until the game halts
    fn run_loop(game: SharedGame) {
        let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();

        *g.borrow_mut() = Some(Closure::new(move |_time: f64| {
            let status = game.borrow_mut().frame();
            if status == FrameStatus::Continue {
                if let Some(cb) = f.borrow().as_ref() {
                    request_animation_frame(cb);
                }
            } else {
                // Drop our handle so the closure is freed once it returns
                let _ = f.borrow_mut().take();
            }
        }));

        if let Some(cb) = g.borrow().as_ref() {
            request_animation_frame(cb);
        }
    }

    fn setup_keyboard(game: SharedGame) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                // Don't let arrow keys scroll the page while they fly the ship
                if game.borrow_mut().handle_key(event.key_code(), pressed) {
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(game: SharedGame, btn: &HtmlButtonElement) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let seed = js_sys::Date::now() as u64;
            let started = game.borrow_mut().start(seed);
            if started {
                run_loop(game.clone());
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-area")
            .ok_or("missing #game-area canvas")?
            .dyn_into()?;
        let start_btn: HtmlButtonElement = document
            .get_element_by_id("startBtn")
            .ok_or("missing #startBtn")?
            .dyn_into()?;
        let status = document
            .get_element_by_id("status")
            .ok_or("missing #status")?;

        let settings = Settings::load();
        canvas.set_width(settings.field_width as u32);
        canvas.set_height(settings.field_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let frontend = CanvasFrontend {
            ctx,
            status,
            start_btn: start_btn.clone(),
            width: settings.field_width,
            height: settings.field_height,
        };
        let seed = js_sys::Date::now() as u64;
        let game: SharedGame = Rc::new(RefCell::new(Game::new(settings, frontend, seed)));

        setup_keyboard(game.clone());
        setup_start_button(game, &start_btn);

        log::info!("Lunar Lander ready");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lunar_lander::{FrameStatus, Game, Settings};
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Lunar Lander (native) starting...");
    log::info!("Native mode runs a headless autopilot - build for wasm32 to play");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = Settings::load(path.as_deref());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut game = Game::new(settings, headless::Headless::default(), seed);
    game.start(seed);

    // Safety net in case the autopilot hovers forever
    const MAX_FRAMES: u64 = 50_000;
    let mut frames = 0;
    while frames < MAX_FRAMES {
        let events = headless::autopilot(game.world(), game.engines(), game.settings());
        for event in events {
            game.apply(event);
        }
        if game.frame() == FrameStatus::Halted {
            break;
        }
        frames += 1;
    }

    let world = game.world();
    println!(
        "{} after {} ticks (fuel left {:.1})",
        game.frontend().status.as_deref().unwrap_or("Still flying"),
        world.time_ticks,
        world.ship.fuel_display()
    );
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use lunar_lander::sim::{EngineFlags, EngineLine, InputEvent, World};
    use lunar_lander::{Frontend, Settings};

    /// Frontend that only remembers the last status line
    #[derive(Default)]
    pub struct Headless {
        pub status: Option<String>,
    }

    impl Frontend for Headless {
        fn render(&mut self, world: &World, engines: &EngineFlags) {
            log::trace!(
                "tick {} pos=({:.1}, {:.1}) vel=({:.3}, {:.3}) engines={:?}",
                world.time_ticks,
                world.ship.rect.x,
                world.ship.rect.y,
                world.ship.vel.x,
                world.ship.vel.y,
                engines
            );
        }

        fn show_status(&mut self, message: &str) {
            self.status = Some(message.to_string());
        }
    }

    /// Simple steering toward the platform; returns only the flag changes
    pub fn autopilot(world: &World, engines: &EngineFlags, settings: &Settings) -> Vec<InputEvent> {
        let ship = &world.ship;
        let platform = &world.platform;

        let offset = platform.center().x - ship.rect.center().x;
        let target_vx = (offset * 0.02).clamp(-0.5, 0.5);
        let gap = platform.top() - ship.rect.bottom();
        let target_vy = if gap < 40.0 {
            settings.landing_max_dy * 0.5
        } else {
            0.6
        };

        let wanted = EngineFlags {
            main: ship.vel.y > target_vy,
            // Left engine pushes right, right engine pushes left
            left: ship.vel.x < target_vx - 0.02,
            right: ship.vel.x > target_vx + 0.02,
        };

        EngineLine::ALL
            .into_iter()
            .filter(|&line| wanted.is_on(line) != engines.is_on(line))
            .map(|line| {
                if wanted.is_on(line) {
                    InputEvent::EngineDown(line)
                } else {
                    InputEvent::EngineUp(line)
                }
            })
            .collect()
    }
}
