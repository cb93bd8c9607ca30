//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, HtmlCanvasElement, MouseEvent, PageTransitionEvent, TouchEvent, Window,
    };

    use canvas_pong::input::{KeyCommand, pointer_to_playfield_y};
    use canvas_pong::renderer::web::WebCanvas;
    use canvas_pong::sim::Playfield;
    use canvas_pong::{GameError, Result, RunState, Session, Settings};

    const CANVAS_ID: &str = "pong";

    /// Game instance holding all state
    struct Game {
        session: Session,
        canvas: WebCanvas,
    }

    fn clock_seed() -> u64 {
        js_sys::Date::now() as u64
    }

    pub fn run() -> Result<()> {
        let window = web_sys::window().ok_or(GameError::NoWindow)?;
        let document = window.document().ok_or(GameError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| GameError::CanvasNotFound(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| GameError::NotACanvas(CANVAS_ID.to_string()))?;

        // Playfield size is read once; later canvas resizes are not tracked
        let playfield = Playfield::new(canvas.width() as f32, canvas.height() as f32);
        let web_canvas = WebCanvas::from_canvas(&canvas)?;

        let settings = Settings::load();
        settings.tuning.validate_for(playfield)?;
        let pause_on_blur = settings.pause_on_blur;

        let seed = settings.resolve_seed(clock_seed());
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(settings, playfield, seed),
            canvas: web_canvas,
        }));

        setup_input_handlers(&window, &canvas, game.clone())?;
        setup_page_hide(&window, game.clone())?;
        if pause_on_blur {
            setup_auto_pause(&window, &document, game.clone())?;
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<()> {
        // Mouse move - center the player paddle on the pointer
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let mut g = game.borrow_mut();
                let y = pointer_to_playfield_y(
                    event.client_y() as f64,
                    rect.top(),
                    rect.height(),
                    g.session.state().playfield.height,
                );
                g.session.pointer_moved(y);
            });
            canvas.add_event_listener_with_callback(
                "mousemove",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        // Touch start and move (a tap moves the paddle too)
        for event_name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let mut g = game.borrow_mut();
                    let y = pointer_to_playfield_y(
                        touch.client_y() as f64,
                        rect.top(),
                        rect.height(),
                        g.session.state().playfield.height,
                    );
                    g.session.pointer_moved(y);
                }
            });
            canvas.add_event_listener_with_callback(
                event_name,
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let Some(command) = KeyCommand::from_key(&event.key()) else {
                    return;
                };
                let mut g = game.borrow_mut();
                match command {
                    KeyCommand::TogglePause => g.session.toggle_pause(),
                    KeyCommand::Restart => g.session.restart(clock_seed()),
                    KeyCommand::ToggleFps => g.session.toggle_fps().save(),
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Stop the loop when the page is torn down. A page entering the
    /// back/forward cache keeps its JS context, so it is only paused.
    fn setup_page_hide(window: &Window, game: Rc<RefCell<Game>>) -> Result<()> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PageTransitionEvent| {
            game.borrow_mut().session.page_hidden(event.persisted());
        });
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_auto_pause(
        window: &Window,
        document: &Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<()> {
        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.session.run_state() == RunState::Running {
                        g.session.pause();
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.session.run_state() == RunState::Running {
                    g.session.pause();
                    log::info!("Auto-paused (window blur)");
                }
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; game loop ended");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let run_state = {
            let mut g = game.borrow_mut();
            let Game { session, canvas } = &mut *g;

            session.record_frame_time(time);
            let run_state = session.frame();
            session.draw(canvas);
            run_state
        };

        if run_state == RunState::Stopped {
            log::info!("Game loop stopped");
            return;
        }
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Canvas Pong starting...");

    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames simulated by the headless runner when none are given
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_HEADLESS_FRAMES: u64 = 60 * 60;

/// Headless run: `canvas-pong [seed] [frames]`, both paddles on the heuristic
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::renderer::DrawList;
    use canvas_pong::sim::Playfield;
    use canvas_pong::{Session, Settings};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs headless - serve the web build for the canvas version");

    let settings = Settings::load();
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| settings.resolve_seed(clock_seed()));
    let frames: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_HEADLESS_FRAMES);

    let mut session = Session::new(settings, Playfield::default(), seed);
    session.set_autopilot(true);

    for _ in 0..frames {
        session.frame();
    }
    session.stop();

    let mut list = DrawList::new();
    session.draw(&mut list);
    log::debug!("Final frame: {} draw commands", list.len());

    let state = session.state();
    println!(
        "seed={} frames={} score {}-{}",
        state.seed, state.time_ticks, state.score.player, state.score.ai
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
