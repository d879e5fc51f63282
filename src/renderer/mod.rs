//! Rendering seam
//!
//! Windowing, textures and fonts belong to the platform. The game hands each
//! frame's draw requests to a `Canvas`, back to front.

use crate::sim::DrawRequest;

/// Something that can paint draw requests
pub trait Canvas {
    /// Start a new frame (clear)
    fn begin_frame(&mut self) {}

    fn draw(&mut self, request: &DrawRequest);

    /// Finish the frame (present)
    fn end_frame(&mut self) {}
}

/// Paint a whole scene in order
pub fn present<C: Canvas + ?Sized>(canvas: &mut C, scene: &[DrawRequest]) {
    canvas.begin_frame();
    for request in scene {
        canvas.draw(request);
    }
    canvas.end_frame();
    log::trace!("Presented frame with {} draw requests", scene.len());
}

/// Canvas without a window: counts what it was asked to draw
#[derive(Debug, Default)]
pub struct HeadlessCanvas {
    /// Frames presented so far
    pub frames: u64,
    /// Requests drawn in the most recent frame
    pub last_frame_draws: usize,
    /// Whether the game-over panel was in the most recent frame
    pub showing_game_over: bool,
    /// Score text of the most recent frame
    pub score_text: String,
}

impl Canvas for HeadlessCanvas {
    fn begin_frame(&mut self) {
        self.last_frame_draws = 0;
        self.showing_game_over = false;
    }

    fn draw(&mut self, request: &DrawRequest) {
        self.last_frame_draws += 1;
        match request {
            DrawRequest::GameOverPanel { .. } => self.showing_game_over = true,
            DrawRequest::ScoreText { text, .. } => self.score_text.clone_from(text),
            _ => {}
        }
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}
