//! Coin Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use coin_dash::config::GameConfig;
    use coin_dash::input::{self, Action, HeldKeys};
    use coin_dash::render::CanvasRenderer;
    use coin_dash::runloop;
    use coin_dash::sim::{GameState, TickInput, tick};
    use glam::Vec2;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        held: HeldKeys,
        input: TickInput,
    }

    impl Game {
        /// Run one tick-then-draw frame
        fn frame(&mut self) {
            self.input.dir = self.held.direction();
            tick(&mut self.state, &self.input);

            // Clear one-shot inputs after processing
            self.input.confirm = false;
            self.input.restart = false;

            self.renderer.render(&self.state);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Coin Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::from_canvas(&canvas);
        let bounds = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;

        log::info!(
            "Game initialized: {}x{}, seed {}, start_screen={}",
            bounds.x,
            bounds.y,
            seed,
            config.start_screen
        );

        let renderer = CanvasRenderer::new(&canvas).expect("Failed to get 2d context");
        let state = GameState::new(seed, bounds, config);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            held: HeldKeys::default(),
            input: TickInput::default(),
        }));

        setup_input_handlers(game.clone());

        // Run until page teardown; the handle could stop us early if an
        // embedding context ever needs to.
        let _handle = runloop::start(move |_time| {
            game.borrow_mut().frame();
        });

        log::info!("Coin Dash running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down: suppress scrolling, track held keys, latch actions
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if input::scroll_key(&key) {
                    event.prevent_default();
                }

                let mut g = game.borrow_mut();
                if let Some(k) = input::move_key(&key) {
                    g.held.press(k);
                }
                match input::action_key(&key) {
                    Some(Action::Confirm) => g.input.confirm = true,
                    Some(Action::Restart) => {
                        g.input.restart = true;
                        log::info!("Restart requested");
                    }
                    None => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: clear held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(k) = input::move_key(&event.key()) {
                    game.borrow_mut().held.release(k);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
    log::info!("Coin Dash (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to play in a browser");

    println!("\nRunning headless session...");
    headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_session() {
    use coin_dash::config::GameConfig;
    use coin_dash::sim::{GamePhase, GameState, TickInput, tick};
    use glam::Vec2;

    let mut state = GameState::new(42, Vec2::new(480.0, 360.0), GameConfig::default());
    assert_eq!(state.phase, GamePhase::Playing);

    // Drive the player toward the coin for a while
    for _ in 0..240 {
        let dir = (state.coin.pos - state.player.pos).signum();
        let input = TickInput {
            dir,
            ..Default::default()
        };
        tick(&mut state, &input);
        if state.phase != GamePhase::Playing {
            break;
        }
    }

    println!(
        "✓ Headless session ran: score {}, phase {:?}",
        state.score, state.phase
    );
}
