//! Session high score
//!
//! Kept in memory for the life of the process. Restarting a round never
//! touches it.

use serde::{Deserialize, Serialize};

/// Best score seen this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// Start the session at zero
    pub fn new() -> Self {
        Self { best: 0 }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Check if a score would beat the current best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a score. Returns true if it became the new best.
    pub fn record(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        true
    }
}
