//! Pipe spawner
//!
//! Randomness comes only from the injected RNG so runs are reproducible.

use rand::Rng;

use super::state::Pipe;
use crate::config::GameConfig;

/// Pick a top segment height: a whole number of pixels, uniform over
/// `[min_top_height, field_height - gap - min_top_height]` inclusive
pub fn random_top_height<R: Rng>(config: &GameConfig, rng: &mut R) -> f32 {
    let lo = config.min_top_height.ceil() as i32;
    let hi = config.max_top_height().floor() as i32;
    rng.random_range(lo..=hi) as f32
}

/// Build a new pipe at the right edge of the field
pub fn spawn_pipe<R: Rng>(config: &GameConfig, rng: &mut R) -> Pipe {
    let top_height = random_top_height(config, rng);
    Pipe::new(config.field_width, config.pipe_width, top_height, config.pipe_gap)
}
