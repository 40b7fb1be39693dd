//! Climb High entry point
//!
//! wasm32: canvas + DOM glue, requestAnimationFrame for frames and a 16 ms
//! interval for horizontal input.
//! Native: a headless autopiloted run that logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use climb_high::consts::INPUT_INTERVAL;
    use climb_high::persistence::LocalStorage;
    use climb_high::platform::KeyAction;
    use climb_high::renderer::CanvasSurface;
    use climb_high::sim::{GamePhase, Viewport};
    use climb_high::{Game, Tuning};

    struct App {
        game: Game,
        canvas: HtmlCanvasElement,
        surface: CanvasSurface,
        last_phase: Option<GamePhase>,
    }

    impl App {
        fn frame(&mut self) {
            self.game.update();
            self.game.draw(&mut self.surface);
            self.update_hud();
        }

        /// Size the canvas to its container, capped at 400x600
        fn resize(&mut self, document: &Document) {
            let Some(container) = document.get_element_by_id("gameContainer") else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            self.game.resize(rect.width() as f32, rect.height() as f32);
            let Viewport { width, height } = self.game.viewport();
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
        }

        /// Push score readouts and swap screens on phase changes
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if self.game.settings().show_hud {
                set_text(&document, "scoreDisplay", &self.game.score().to_string());
                set_text(&document, "coinDisplay", &self.game.coins().to_string());
                set_text(&document, "highScoreDisplay", &self.game.best().to_string());
            }

            let phase = self.game.phase();
            if self.last_phase == Some(phase) {
                return;
            }
            self.last_phase = Some(phase);

            let playing = phase == GamePhase::Playing;
            set_hidden(&document, "menuScreen", phase != GamePhase::Menu);
            set_hidden(&document, "gameOverScreen", phase != GamePhase::GameOver);
            set_hidden(&document, "gameUI", !playing || !self.game.settings().show_hud);
            set_hidden(&document, "gameControls", !playing);

            if let Some(summary) = self.game.summary() {
                set_text(&document, "finalScore", &summary.score.to_string());
                set_text(&document, "finalCoins", &summary.coins.to_string());
                set_text(&document, "finalHighScore", &summary.best.to_string());
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Climb High starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            seed,
            Viewport::default(),
            Tuning::default(),
            Box::new(LocalStorage),
        );
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            canvas,
            surface: CanvasSurface::new(ctx),
            last_phase: None,
        }));
        app.borrow_mut().resize(&document);
        app.borrow_mut().update_hud();

        setup_resize(app.clone())?;
        setup_keyboard(app.clone())?;
        setup_buttons(app.clone());
        setup_input_interval(app.clone())?;
        request_animation_frame(app);

        log::info!("Climb High running!");
        Ok(())
    }

    fn setup_resize(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                app.borrow_mut().resize(&document);
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if climb_high::platform::key_action(&key).is_some() {
                    event.prevent_default();
                }
                let mut a = app.borrow_mut();
                a.game.key(&key, pressed);
                a.update_hud();
            });
            document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let commands: [(&str, fn(&mut Game) -> bool); 3] = [
            ("startBtn", Game::start),
            ("restartBtn", Game::restart),
            ("menuBtn", Game::return_to_menu),
        ];
        for (id, command) in commands {
            let Some(btn) = document.get_element_by_id(id) else {
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                command(&mut a.game);
                a.update_hud();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Held direction buttons, for both touch and mouse
        let holds = [
            ("touchstart", true),
            ("touchend", false),
            ("touchcancel", false),
            ("mousedown", true),
            ("mouseup", false),
        ];
        for (id, action) in [("leftBtn", KeyAction::Left), ("rightBtn", KeyAction::Right)] {
            let Some(btn) = document.get_element_by_id(id) else {
                continue;
            };
            for (event_name, pressed) in holds {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                    event.prevent_default();
                    app.borrow_mut().game.touch(action, pressed);
                });
                let _ = btn
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Horizontal movement runs on its own fixed interval
    fn setup_input_interval(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().game.input_step();
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            (INPUT_INTERVAL * 1000.0) as i32,
        )?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use anyhow::Context;

    use climb_high::persistence::FileStorage;
    use climb_high::renderer::DrawList;
    use climb_high::sim::{GamePhase, GameState, Viewport};
    use climb_high::{Game, QualityPreset, RunSummary, Settings, Tuning};

    /// Frame cap so a lucky autopilot cannot run forever
    const MAX_FRAMES: u32 = 60 * 60 * 5;
    const FRAME_DT: f32 = 1.0 / 60.0;
    const SAVE_PATH: &str = "climb_high_save.json";

    /// Steer under the nearest platform above the player's feet
    fn steer(state: &GameState) -> (bool, bool) {
        let player = &state.player;
        let feet = player.feet();
        let center_x = player.pos.x + player.size.x / 2.0;

        let target = state
            .platforms
            .iter()
            .filter(|p| p.pos.y > feet.y - 120.0 && p.pos.y < feet.y + 200.0)
            .filter(|p| player.vy > 0.0 || p.pos.y < feet.y)
            .min_by(|a, b| {
                let da = (a.pos.x + a.width / 2.0 - center_x).abs();
                let db = (b.pos.x + b.width / 2.0 - center_x).abs();
                da.total_cmp(&db)
            });

        match target {
            Some(p) => {
                let dx = p.pos.x + p.width / 2.0 - center_x;
                (dx < -4.0, dx > 4.0)
            }
            None => (false, false),
        }
    }

    pub fn run() -> anyhow::Result<()> {
        let mut args = std::env::args().skip(1);
        let seed = match args.next() {
            Some(s) => s.parse().with_context(|| format!("invalid seed {s:?}"))?,
            None => 0x5EED,
        };
        let tuning = match args.next() {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading tuning file {path}"))?;
                Tuning::from_json(&json).with_context(|| format!("parsing tuning file {path}"))?
            }
            None => Tuning::default(),
        };
        let preset = match args.next() {
            Some(name) => Some(
                QualityPreset::parse(&name)
                    .with_context(|| format!("unknown quality preset {name:?} (low, medium, high)"))?,
            ),
            None => None,
        };

        let storage = FileStorage::open(SAVE_PATH);
        let mut game = Game::new(seed, Viewport::default(), tuning, Box::new(storage));
        if let Some(preset) = preset {
            log::info!("Quality preset: {}", preset.as_str());
            game.set_settings(Settings::from_preset(preset));
        }
        game.start();

        let mut surface = DrawList::new();
        let mut frames = 0;
        while game.phase() == GamePhase::Playing && frames < MAX_FRAMES {
            let (left, right) = steer(game.state());
            game.set_input(left, right);
            surface.reset();
            game.advance(FRAME_DT, &mut surface);
            frames += 1;
        }

        match game.summary() {
            Some(RunSummary {
                score,
                coins,
                best,
                new_best,
            }) => log::info!(
                "Autopilot fell after {} frames: score {} coins {} best {}{}",
                frames,
                score,
                coins,
                best,
                if new_best { " (new best)" } else { "" }
            ),
            None => log::info!(
                "Autopilot still climbing after {} frames: score {} coins {}",
                frames,
                game.score(),
                game.coins()
            ),
        }
        log::debug!("Last frame drew {} commands", surface.len());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Climb High (native, headless) starting...");
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
