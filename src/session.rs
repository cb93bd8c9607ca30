//! Loop driver
//!
//! Owns the [`GameState`] for one browser session and decides, frame by frame,
//! whether the simulation advances. The host scheduler calls [`Session::frame`]
//! once per display refresh and stops rescheduling once it returns
//! [`RunState::Stopped`].

use std::cell::Cell;
use std::rc::Rc;

use crate::renderer::{Canvas, Overlay, draw_frame, draw_overlay};
use crate::settings::Settings;
use crate::sim::{GameState, Playfield, TickInput, tick};

/// Number of frame timestamps kept for the FPS readout
const FPS_WINDOW: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Ticking every frame
    Running,
    /// Drawing but not ticking
    Paused,
    /// Terminal: the driver must not schedule another frame
    Stopped,
}

/// Cancellation flag shared with event handlers, honored at the next frame
#[derive(Debug, Clone, Default)]
pub struct StopToken(Rc<Cell<bool>>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

pub struct Session {
    state: GameState,
    settings: Settings,
    run_state: RunState,
    input: TickInput,
    stop: StopToken,
    // FPS tracking
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Session {
    pub fn new(settings: Settings, playfield: Playfield, seed: u64) -> Self {
        log::info!(
            "Session started: {}x{} seed={}",
            playfield.width,
            playfield.height,
            seed
        );
        Self {
            state: GameState::new(seed, playfield, settings.tuning),
            settings,
            run_state: RunState::Running,
            input: TickInput::default(),
            stop: StopToken::new(),
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Handle that stops the loop at the next frame boundary
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.input.autopilot = on;
    }

    /// Pointer moved to `y` (playfield coordinates). Applied immediately and
    /// remembered for the next tick.
    pub fn pointer_moved(&mut self, y: f32) {
        self.input.pointer_y = Some(y);
        if !self.input.autopilot && self.run_state != RunState::Stopped {
            let field = self.state.playfield;
            self.state.player.center_on(y, field);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.run_state = match self.run_state {
            RunState::Running => {
                log::info!("Paused");
                RunState::Paused
            }
            RunState::Paused => {
                log::info!("Resumed");
                RunState::Running
            }
            RunState::Stopped => RunState::Stopped,
        };
    }

    /// Pause if running (used for tab hide / window blur)
    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            self.toggle_pause();
        }
    }

    /// The page is being hidden. A page kept in the back/forward cache comes
    /// back with this session intact, so it only pauses; otherwise the page
    /// is going away and the loop stops.
    pub fn page_hidden(&mut self, persisted: bool) {
        if persisted {
            self.pause();
        } else {
            self.stop();
        }
    }

    /// Flip the FPS readout. Returns the updated settings for persisting.
    pub fn toggle_fps(&mut self) -> &Settings {
        self.settings.show_fps = !self.settings.show_fps;
        log::info!("FPS readout {}", if self.settings.show_fps { "on" } else { "off" });
        &self.settings
    }

    pub fn stop(&mut self) {
        self.stop.stop();
        self.sync_stop();
    }

    /// Replace the game with a fresh one. Has no effect once stopped.
    pub fn restart(&mut self, seed: u64) {
        if self.run_state == RunState::Stopped {
            return;
        }
        self.state = GameState::new(seed, self.state.playfield, self.settings.tuning);
        self.input.pointer_y = None;
        self.run_state = RunState::Running;
        log::info!("Game restarted with seed: {}", seed);
    }

    /// Run one frame. Returns the run state after the frame; the caller
    /// reschedules unless it is `Stopped`.
    pub fn frame(&mut self) -> RunState {
        self.sync_stop();
        if self.run_state == RunState::Running {
            tick(&mut self.state, &self.input);
        }
        self.run_state
    }

    /// Paint the current state plus HUD
    pub fn draw(&self, canvas: &mut impl Canvas) {
        draw_frame(&self.state, canvas);
        let overlay = Overlay {
            paused: self.run_state == RunState::Paused,
            fps: self.settings.show_fps.then_some(self.fps),
        };
        draw_overlay(&self.state, overlay, canvas);
    }

    /// Record a frame timestamp (ms) and refresh the FPS estimate
    pub fn record_frame_time(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the next slot to be overwritten; the window spans
        // FPS_WINDOW - 1 frame intervals
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = (((FPS_WINDOW - 1) as f64 * 1000.0) / elapsed).round() as u32;
            }
        }
    }

    fn sync_stop(&mut self) {
        if self.stop.is_stopped() && self.run_state != RunState::Stopped {
            log::info!(
                "Stopped at tick {} ({}-{}), seed={}",
                self.state.time_ticks,
                self.state.score.player,
                self.state.score.ai,
                self.state.seed
            );
            self.run_state = RunState::Stopped;
        }
    }
}
