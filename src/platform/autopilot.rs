//! Scripted input source for headless runs
//!
//! Aims the bird's bottom edge a little above the lower edge of the next
//! gap and flaps whenever the next step would sink below that line.

use crate::config::GameConfig;
use crate::sim::GameState;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Distance kept between the bird's bottom and the gap's lower edge
    pub margin: f32,
    /// Activations issued so far
    pub flaps: u64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            margin: 8.0,
            flaps: 0,
        }
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line the bird's bottom edge should stay above
    pub fn target_line(&self, state: &GameState, config: &GameConfig) -> f32 {
        let bird = &state.bird;
        let lower_edge = state
            .pipes
            .iter()
            .find(|pipe| pipe.right() >= bird.left())
            .map(|pipe| pipe.bottom_y)
            .unwrap_or((config.field_height + config.pipe_gap) / 2.0);
        lower_edge - self.margin
    }

    /// Decide whether to activate before the next step
    pub fn should_flap(&mut self, state: &GameState, config: &GameConfig) -> bool {
        if !state.is_running() {
            return false;
        }

        let bird = &state.bird;
        let next_bottom = bird.bottom() + bird.velocity + config.gravity;
        let flap = bird.velocity > 0.0 && next_bottom > self.target_line(state, config);
        if flap {
            self.flaps += 1;
        }
        flap
    }
}
