//! The falling character
//!
//! Pure mechanics only. Whether a step runs in the current phase is decided
//! by the tick, which owns the round.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// The player-controlled character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left of the sprite, y grows downward
    pub pos: Vec2,
    /// Units per tick, positive is downward
    pub vertical_velocity: f32,
    /// Animation frame index in `0..ANIMATION_FRAMES`
    pub frame: u8,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            pos: Self::start_position(),
            vertical_velocity: 0.0,
            frame: 0,
        }
    }
}

impl Actor {
    pub fn start_position() -> Vec2 {
        Vec2::new(ACTOR_START_X, ACTOR_START_Y)
    }

    /// Collision size: sprite size at draw scale
    pub fn size() -> Vec2 {
        Vec2::new(ACTOR_SPRITE_WIDTH, ACTOR_SPRITE_HEIGHT) * SPRITE_SCALE
    }

    /// Integrate one tick: move by the current velocity, then apply gravity
    pub fn advance_physics(&mut self) {
        self.pos.y += self.vertical_velocity;
        self.vertical_velocity += GRAVITY;
    }

    /// Soft bounce off the top edge. Returns true if the actor was clamped.
    pub fn clamp_to_ceiling(&mut self) -> bool {
        if self.pos.y < 0.0 {
            self.pos = Vec2::new(ACTOR_START_X, 0.0);
            self.vertical_velocity = 0.0;
            true
        } else {
            false
        }
    }

    /// Whether the actor has dropped past the bottom of the window
    pub fn below_floor(&self) -> bool {
        self.pos.y > WINDOW_HEIGHT
    }

    pub fn flap(&mut self) {
        self.vertical_velocity = FLAP_IMPULSE;
    }

    /// Zero the velocity (the round is over)
    pub fn stop(&mut self) {
        self.vertical_velocity = 0.0;
    }

    /// Step the wing-flap animation on its cadence, wrapping after the last frame
    pub fn advance_animation(&mut self, tick: u64) {
        if tick.is_multiple_of(ANIMATION_CADENCE) {
            self.frame += 1;
        }
        if self.frame >= ANIMATION_FRAMES {
            self.frame = 0;
        }
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::from_anchor(self.pos, Self::size())
    }

    /// Back to the start position at rest (new round)
    pub fn reset(&mut self) {
        self.pos = Self::start_position();
        self.vertical_velocity = 0.0;
    }
}
