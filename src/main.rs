//! Flappy Pipes entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use flappy_pipes::platform::is_activate_key;
    use flappy_pipes::renderer::{BROWSER_BACKENDS, RenderError, RenderState, WebPresenter};
    use flappy_pipes::sim::{Activation, Flow};
    use flappy_pipes::{GameConfig, Session};

    struct Game {
        session: Session,
        presenter: WebPresenter,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Pipes starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::default();
        let width = config.field_width as u32;
        let height = config.field_height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let render_state = match init_gpu(&canvas, &config).await {
            Ok(state) => Some(state),
            Err(e) => {
                log::error!("GPU unavailable, running without canvas output: {}", e);
                None
            }
        };

        let seed = js_sys::Date::now() as u64;
        let session = Session::with_seed(config, seed).expect("default config is valid");
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            presenter: WebPresenter::new(&document, render_state),
        }));

        setup_input_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Flappy Pipes running!");
    }

    async fn init_gpu(
        canvas: &HtmlCanvasElement,
        config: &GameConfig,
    ) -> Result<RenderState, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: BROWSER_BACKENDS,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(
            surface,
            &adapter,
            canvas.width(),
            canvas.height(),
            (config.field_width, config.field_height),
        )
        .await
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if !is_activate_key(&event.code(), event.repeat()) {
                return;
            }
            event.prevent_default();

            let activation = {
                let mut g = game.borrow_mut();
                let Game { session, presenter } = &mut *g;
                let activation = session.activate();
                if activation == Activation::Restarted {
                    session.present(presenter);
                }
                activation
            };
            if activation == Activation::Restarted {
                // The frame chain stopped at game over; start it again
                request_animation_frame(game.clone());
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
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
        let flow = {
            let mut g = game.borrow_mut();
            let Game { session, presenter } = &mut *g;
            session.step(time, presenter)
        };

        if flow == Flow::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod native_game {
    use serde::Serialize;

    use flappy_pipes::platform::{Autopilot, FrameClock};
    use flappy_pipes::renderer::LogPresenter;
    use flappy_pipes::sim::{Flow, GameState};
    use flappy_pipes::{GameConfig, Session};

    /// Fixed seed so headless runs are reproducible
    const SEED: u64 = 0x5EED;
    /// Three minutes at 60 Hz
    const MAX_FRAMES: u64 = 3 * 60 * 60;

    #[derive(Serialize)]
    struct Summary<'a> {
        seed: u64,
        frames: u64,
        flaps: u64,
        score: u32,
        crashed: bool,
        state: &'a GameState,
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        log::info!("Flappy Pipes (native) starting...");
        log::info!("Native mode plays a headless session with the autopilot");

        let mut session = Session::with_seed(GameConfig::default(), SEED)?;
        let mut presenter = LogPresenter::new();
        let mut clock = FrameClock::default();
        let mut autopilot = Autopilot::new();

        let mut crashed = false;
        while presenter.frames < MAX_FRAMES {
            if autopilot.should_flap(session.state(), session.config()) {
                session.activate();
            }
            if session.step(clock.tick(), &mut presenter) == Flow::Halt {
                crashed = true;
                break;
            }
        }

        let state = session.state();
        let summary = Summary {
            seed: SEED,
            frames: presenter.frames,
            flaps: autopilot.flaps,
            score: state.score,
            crashed,
            state,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native_game::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
