//! Draw requests for one frame
//!
//! The simulation never draws. Each tick it describes the frame as an ordered
//! list of requests (back to front) and the renderer collaborator paints them.

use glam::Vec2;

use super::obstacle::Orientation;
use super::state::{GameState, Phase};
use crate::consts::*;

/// Background tiles are laid side by side at these x offsets
pub const BACKGROUND_OFFSETS: [f32; 3] = [0.0, 333.0, 666.0];
pub const SCORE_TEXT_POS: Vec2 = Vec2::new(30.0, 0.0);
pub const HIGH_SCORE_TEXT_POS: Vec2 = Vec2::new(30.0, 80.0);
/// Centre of the game-over panel
pub const GAME_OVER_PANEL_POS: Vec2 = Vec2::new(500.0, 125.0);
/// Top-centre of the continue prompt
pub const CONTINUE_PROMPT_POS: Vec2 = Vec2::new(500.0, 250.0);
pub const CONTINUE_PROMPT_TEXT: &str = "Press C to continue";

/// One thing the renderer is asked to draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawRequest {
    Background { x: f32 },
    Actor { pos: Vec2, frame: u8 },
    Obstacle { pos: Vec2, orientation: Orientation },
    ScoreText { pos: Vec2, text: String },
    HighScoreText { pos: Vec2, text: String },
    GameOverPanel { center: Vec2 },
    ContinuePrompt { pos: Vec2, text: &'static str },
}

/// Whether the blinking continue prompt is lit on this tick
pub fn prompt_visible(tick: u64) -> bool {
    tick % PROMPT_BLINK_PERIOD < PROMPT_BLINK_PERIOD / 2
}

/// Describe the current frame, back to front
pub fn build_scene(state: &GameState) -> Vec<DrawRequest> {
    let mut scene = Vec::with_capacity(BACKGROUND_OFFSETS.len() + state.obstacles.len() + 6);

    scene.extend(
        BACKGROUND_OFFSETS
            .iter()
            .map(|&x| DrawRequest::Background { x }),
    );

    scene.push(DrawRequest::Actor {
        pos: state.actor.pos,
        frame: state.actor.frame,
    });

    scene.extend(state.obstacles.iter().map(|o| DrawRequest::Obstacle {
        pos: o.pos,
        orientation: o.orientation,
    }));

    scene.push(DrawRequest::ScoreText {
        pos: SCORE_TEXT_POS,
        text: state.score().to_string(),
    });
    scene.push(DrawRequest::HighScoreText {
        pos: HIGH_SCORE_TEXT_POS,
        text: format!("HIGHEST {}", state.high_score()),
    });

    if state.phase() == Phase::Over {
        scene.push(DrawRequest::GameOverPanel {
            center: GAME_OVER_PANEL_POS,
        });
        if prompt_visible(state.time_ticks) {
            scene.push(DrawRequest::ContinuePrompt {
                pos: CONTINUE_PROMPT_POS,
                text: CONTINUE_PROMPT_TEXT,
            });
        }
    }

    scene
}
