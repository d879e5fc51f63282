//! Scrolling gap obstacles
//!
//! Obstacles are spawned two at a time (lower + upper) at the right edge and
//! scroll left in lockstep. Spawn order is x order, so everything off-screen
//! is always a prefix of the stream.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Which half of a pair an obstacle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Hangs down from its anchor (bottom half of the gap)
    Lower,
    /// Vertically mirrored: extends up from its anchor (top half of the gap)
    Upper,
}

/// One half of an obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Sprite anchor. For `Upper` this is the bottom edge, since the sprite is flipped.
    pub pos: Vec2,
    pub orientation: Orientation,
}

impl Obstacle {
    pub fn lower(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            orientation: Orientation::Lower,
        }
    }

    pub fn upper(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            orientation: Orientation::Upper,
        }
    }

    pub fn size() -> Vec2 {
        Vec2::new(OBSTACLE_SPRITE_WIDTH, OBSTACLE_SPRITE_HEIGHT) * SPRITE_SCALE
    }

    /// Screen-space box. A flipped obstacle occupies the height above its anchor.
    pub fn bounding_box(&self) -> Rect {
        let size = Self::size();
        match self.orientation {
            Orientation::Lower => Rect::from_anchor(self.pos, size),
            Orientation::Upper => Rect::new(self.pos.x, self.pos.y - size.y, size.x, size.y),
        }
    }

    pub fn is_offscreen(&self) -> bool {
        self.pos.x <= OFFSCREEN_X
    }
}

/// Ordered stream of obstacles, oldest (leftmost) first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleStream {
    obstacles: VecDeque<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Spawn a pair at the right edge if this is a spawn tick.
    /// Returns the gap top when a pair was spawned.
    pub fn try_spawn<R: Rng>(&mut self, tick: u64, rng: &mut R) -> Option<f32> {
        if !tick.is_multiple_of(SPAWN_CADENCE) {
            return None;
        }
        let gap_top = rng.random_range(GAP_OFFSET_MIN..GAP_OFFSET_MAX) as f32;
        self.spawn_pair(WINDOW_WIDTH, gap_top);
        log::debug!("Spawned obstacle pair at tick {} (gap top {})", tick, gap_top);
        Some(gap_top)
    }

    /// Append a lower/upper pair sharing `x`, with the opening starting at `gap_top`
    pub fn spawn_pair(&mut self, x: f32, gap_top: f32) {
        self.obstacles.push_back(Obstacle::lower(x, gap_top + GAP_HEIGHT));
        self.obstacles.push_back(Obstacle::upper(x, gap_top));
    }

    /// Scroll every obstacle left by one tick's worth
    pub fn advance(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= SCROLL_SPEED;
        }
    }

    /// On prune ticks, drop the leading run of fully off-screen obstacles.
    /// Returns how many were removed.
    pub fn prune_offscreen(&mut self, tick: u64) -> usize {
        if !tick.is_multiple_of(PRUNE_CADENCE) {
            return 0;
        }
        let count = self
            .obstacles
            .iter()
            .take_while(|o| o.is_offscreen())
            .count();
        self.obstacles.drain(..count);
        if count > 0 {
            log::debug!("Pruned {} off-screen obstacles at tick {}", count, tick);
        }
        count
    }

    /// Whether any obstacle sits exactly on the scoring line this tick.
    ///
    /// Exact equality: the scroll step divides the distance from the spawn
    /// edge to the actor column, so every pair lands on it once.
    pub fn at_scoring_line(&self) -> bool {
        self.obstacles.iter().any(|o| o.pos.x == ACTOR_START_X)
    }

    /// Whether `bounds` touches any obstacle
    pub fn collides_with(&self, bounds: &Rect) -> bool {
        self.obstacles
            .iter()
            .any(|o| o.bounding_box().overlaps(bounds))
    }

    pub fn reset(&mut self) {
        self.obstacles.clear();
    }
}
