//! Gap Runner - A side-scrolling flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, round state machine)
//! - `audio`: Sound effect requests and the playback collaborator seam
//! - `renderer`: Draw-request presentation to a canvas collaborator
//! - `driver`: Fixed-tick frame driver wiring sim, audio and renderer together
//! - `settings`: Player preferences loaded from JSON

pub mod audio;
pub mod driver;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, SoundEffect};
pub use driver::FrameDriver;
pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (y grows downward)
    pub const WINDOW_WIDTH: f32 = 1000.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    /// Frame rate cap for the driver
    pub const FRAME_RATE_LIMIT: u32 = 70;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Every sprite is drawn at twice its texture size
    pub const SPRITE_SCALE: f32 = 2.0;

    /// Actor sprite (texture pixels) and fixed start position
    pub const ACTOR_SPRITE_WIDTH: f32 = 34.0;
    pub const ACTOR_SPRITE_HEIGHT: f32 = 24.0;
    pub const ACTOR_START_X: f32 = 250.0;
    pub const ACTOR_START_Y: f32 = 300.0;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (units/tick, negative is up)
    pub const FLAP_IMPULSE: f32 = -8.0;
    /// Animation advances one frame every this many ticks
    pub const ANIMATION_CADENCE: u64 = 6;
    pub const ANIMATION_FRAMES: u8 = 3;

    /// Obstacle sprite (texture pixels)
    pub const OBSTACLE_SPRITE_WIDTH: f32 = 52.0;
    pub const OBSTACLE_SPRITE_HEIGHT: f32 = 320.0;
    /// Vertical opening between the upper and lower halves
    pub const GAP_HEIGHT: f32 = 150.0;
    /// Gap top is drawn uniformly from this half-open range
    pub const GAP_OFFSET_MIN: i32 = 75;
    pub const GAP_OFFSET_MAX: i32 = 350;
    /// Horizontal scroll per tick
    pub const SCROLL_SPEED: f32 = 3.0;
    /// A pair spawns on ticks divisible by this
    pub const SPAWN_CADENCE: u64 = 150;
    /// Off-screen obstacles are pruned on ticks divisible by this
    pub const PRUNE_CADENCE: u64 = 100;
    /// Obstacles at or left of this x are fully off-screen
    pub const OFFSCREEN_X: f32 = -OBSTACLE_SPRITE_WIDTH * SPRITE_SCALE;

    /// "Press C to continue" blinks with this period, visible for the first half
    pub const PROMPT_BLINK_PERIOD: u64 = 60;
}
