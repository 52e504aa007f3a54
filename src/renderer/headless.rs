//! Presenter for runs without a display
//!
//! Builds the same scene the canvas would draw and reports HUD changes
//! through the log.

use super::Presenter;
use super::scene::Scene;
use crate::config::GameConfig;
use crate::sim::GameState;

#[derive(Debug, Default)]
pub struct LogPresenter {
    /// Frames presented so far
    pub frames: u64,
    /// Rectangles drawn in the most recent frame
    pub last_rect_count: usize,
    score_text: String,
    game_over: bool,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score readout
    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn game_over_shown(&self) -> bool {
        self.game_over
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, state: &GameState, config: &GameConfig) {
        let scene = Scene::build(state, config);
        self.frames += 1;
        self.last_rect_count = scene.rects.len();

        if scene.score_text != self.score_text {
            log::debug!("{}", scene.score_text);
            self.score_text = scene.score_text;
        }
        if scene.game_over != self.game_over {
            if scene.game_over {
                log::info!("GAME OVER ({})", self.score_text);
            }
            self.game_over = scene.game_over;
        }
    }
}
