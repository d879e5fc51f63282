//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering, audio or platform dependencies (those are requested, not performed)

pub mod actor;
pub mod autopilot;
pub mod collision;
pub mod obstacle;
pub mod scene;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use autopilot::autopilot_input;
pub use collision::{Rect, aabb_overlap};
pub use obstacle::{Obstacle, ObstacleStream, Orientation};
pub use scene::{DrawRequest, build_scene};
pub use state::{GameEvent, GameState, Phase, Round};
pub use tick::{InputEvent, TickInput, TickOutput, tick};
