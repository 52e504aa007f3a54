//! Draw list for one frame
//!
//! Turns game state into plain rectangles and HUD text so every backend
//! (WebGPU canvas, logs, tests) draws the same thing.

use glam::Vec2;

use super::vertex::colors;
use crate::config::GameConfig;
use crate::sim::GameState;

/// A filled axis-aligned rectangle in field coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

impl FilledRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            color,
        }
    }
}

/// Everything the presentation sink shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Drawn in order: pipes first, bird on top
    pub rects: Vec<FilledRect>,
    pub score_text: String,
    pub game_over: bool,
}

impl Scene {
    pub fn build(state: &GameState, config: &GameConfig) -> Self {
        let mut rects = Vec::with_capacity(state.pipes.len() * 2 + 1);

        for pipe in &state.pipes {
            rects.push(FilledRect::new(
                pipe.x,
                0.0,
                pipe.width,
                pipe.top_height,
                colors::PIPE,
            ));
            rects.push(FilledRect::new(
                pipe.x,
                pipe.bottom_y,
                pipe.width,
                config.field_height - pipe.bottom_y,
                colors::PIPE,
            ));
        }

        let bird = &state.bird;
        rects.push(FilledRect {
            pos: bird.pos,
            size: bird.size,
            color: colors::BIRD,
        });

        Self {
            rects,
            score_text: score_text(state.score),
            game_over: !state.is_running(),
        }
    }
}

/// Text of the score readout
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Pipe};

    #[test]
    fn test_scene_matches_state() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.score = 7;
        state.pipes.push(Pipe::new(250.0, 60.0, 120.0, 150.0));

        let scene = Scene::build(&state, &config);
        assert_eq!(scene.score_text, "Score: 7");
        assert!(!scene.game_over);
        assert_eq!(
            scene.rects,
            vec![
                FilledRect::new(250.0, 0.0, 60.0, 120.0, colors::PIPE),
                FilledRect::new(250.0, 270.0, 60.0, 330.0, colors::PIPE),
                FilledRect::new(100.0, 300.0, 40.0, 30.0, colors::BIRD),
            ]
        );
    }

    #[test]
    fn test_game_over_flag() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.phase = GamePhase::GameOver;

        let scene = Scene::build(&state, &config);
        assert!(scene.game_over);
        assert_eq!(scene.rects.len(), 1);
        assert_eq!(scene.score_text, "Score: 0");
    }
}
