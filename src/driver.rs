//! Frame driver
//!
//! Owns the session and its collaborators. Each frame runs exactly one tick,
//! then forwards the tick's sound requests to audio and its scene to the canvas.

use crate::audio::{AudioManager, SoundBackend};
use crate::consts::MAX_SUBSTEPS;
use crate::renderer::{Canvas, present};
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, tick};

/// Game instance holding all state
pub struct FrameDriver<B: SoundBackend, C: Canvas> {
    state: GameState,
    audio: AudioManager<B>,
    canvas: C,
    /// Seconds per tick
    tick_dt: f32,
    accumulator: f32,
    /// Input received since the last tick ran
    pending: TickInput,
    running: bool,
}

impl<B: SoundBackend, C: Canvas> FrameDriver<B, C> {
    pub fn new(state: GameState, audio: AudioManager<B>, canvas: C, frame_rate: u32) -> Self {
        Self {
            state,
            audio,
            canvas,
            tick_dt: 1.0 / frame_rate.max(1) as f32,
            accumulator: 0.0,
            pending: TickInput::default(),
            running: true,
        }
    }

    /// Build a driver from settings (seed, volumes, frame rate)
    pub fn from_settings(settings: &Settings, backend: B, canvas: C) -> Self {
        let state = match settings.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_entropy(),
        };
        log::info!("Session seed: {}", state.seed);
        let audio = AudioManager::with_settings(backend, settings);
        Self::new(state, audio, canvas, settings.frame_rate_limit)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn audio(&self) -> &AudioManager<B> {
        &self.audio
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f32 {
        self.tick_dt
    }

    /// False once the window has been closed
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one tick with this frame's input and hand the results to the
    /// collaborators. Returns whether the game is still running.
    pub fn run_frame(&mut self, input: &TickInput) -> bool {
        if !self.running {
            return false;
        }

        let output = tick(&mut self.state, input);
        for sound in output.sounds() {
            self.audio.play(sound);
        }
        present(&mut self.canvas, &output.scene);

        if output.window_closed {
            log::info!(
                "Window closed at tick {} (best {})",
                self.state.time_ticks,
                self.state.high_score()
            );
            self.running = false;
        }
        self.running
    }

    /// Accumulate wall time and run as many fixed ticks as it covers.
    ///
    /// Input is queued until the next tick runs, so nothing is dropped on
    /// short frames. Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: f32, input: TickInput) -> u32 {
        self.pending.events.extend(input.events);
        self.accumulator += elapsed.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.running && self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            let input = std::mem::take(&mut self.pending);
            self.run_frame(&input);
            self.accumulator -= self.tick_dt;
            substeps += 1;
        }

        // Drop the backlog instead of spiralling
        if substeps == MAX_SUBSTEPS && self.accumulator >= self.tick_dt {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        substeps
    }
}
