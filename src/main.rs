//! Typomancer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent};

    use typomancer::Settings;
    use typomancer::consts::*;
    use typomancer::render::Renderer;
    use typomancer::sim::{GamePhase, GameState, submit_word, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Renderer,
        settings: Settings,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, renderer: Renderer, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed),
                renderer,
                settings,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one frame-coupled simulation tick with the elapsed time the
        /// scheduler granted. `tick` itself is a no-op outside Playing, so a
        /// frame scheduled before a stop fires harmlessly once more.
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            tick(&mut self.state, dt);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&self, time: f64) {
            self.renderer.render(&self.state, time, &self.settings);
        }

        /// Update HUD text and panel visibility in the DOM
        fn update_hud(&self, document: &Document) {
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score)));
            }
            if let Some(el) = document.get_element_by_id("level") {
                el.set_text_content(Some(&format!("Level: {}", self.state.level)));
            }
            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("fps") {
                    el.set_text_content(Some(&format!("FPS: {}", self.fps)));
                }
            }

            // Three mutually exclusive panels driven by the phase
            let phase = self.state.phase;
            set_visible(document, "main-menu", phase == GamePhase::Menu);
            set_visible(document, "in-game-ui", phase == GamePhase::Playing);
            set_visible(document, "game-over-menu", phase == GamePhase::GameOver);

            if phase == GamePhase::GameOver {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&format!(
                        "Your final score: {}",
                        self.state.score
                    )));
                }
            }
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    fn focus_input(document: &Document) {
        if let Some(el) = document.get_element_by_id("spell-input") {
            if let Ok(input) = el.dyn_into::<web_sys::HtmlElement>() {
                let _ = input.focus();
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Typomancer starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SURFACE_WIDTH as u32);
        canvas.set_height(SURFACE_HEIGHT as u32);

        let ctx: web_sys::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, Renderer::new(ctx), settings)));

        log::info!("Game initialized with seed: {}", seed);

        setup_buttons(&document, game.clone());
        setup_word_input(&document, game.clone());

        // Start at the menu
        game.borrow().update_hud(&document);

        request_animation_frame(game);

        log::info!("Typomancer running!");
    }

    /// Wire start/retry/menu buttons. Start and retry are the same
    /// transition: a full session reset.
    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        for id in ["start-game-btn", "retry-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    let document = web_sys::window().unwrap().document().unwrap();
                    game.borrow_mut().state.start();
                    focus_input(&document);
                    log::info!("Session started");
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        if let Some(btn) = document.get_element_by_id("menu-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().state.show_menu();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Enter in the spell input submits the current text; the field is
    /// cleared after processing whether or not a word matched.
    fn setup_word_input(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(el) = document.get_element_by_id("spell-input") else {
            log::warn!("No spell input found");
            return;
        };
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            return;
        };

        let input_clone = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.key() != "Enter" {
                return;
            }
            let mut g = game.borrow_mut();
            if !g.state.is_running() {
                return;
            }
            submit_word(&mut g.state, &input_clone.value());
            input_clone.set_value("");
        });
        let _ = input.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render(time);

            let document = web_sys::window().unwrap().document().unwrap();
            g.update_hud(&document);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Typomancer (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Seeded smoke run: simulate a short session and type out the first word
/// on screen every second.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use typomancer::consts::SIM_DT;
    use typomancer::sim::{GameState, submit_word, tick};

    let mut state = GameState::new(0xC0FFEE);
    state.start();

    for frame in 0..3600 {
        tick(&mut state, SIM_DT);
        if frame % 60 == 0 {
            if let Some(word) = state.obstacles.first().map(|o| o.word) {
                submit_word(&mut state, word);
            }
        }
        if !state.is_running() {
            break;
        }
    }

    log::info!(
        "Demo finished: score {}, level {}, {} obstacles in flight",
        state.score,
        state.level,
        state.obstacles.len()
    );
    println!(
        "✓ Headless demo complete (score {}, level {})",
        state.score, state.level
    );
}
