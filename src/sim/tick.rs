//! Per-frame simulation step
//!
//! Physics is a fixed increment per call, not scaled by elapsed time: the
//! display refresh rate sets the game speed.

use rand::Rng;

use super::collision::detect_collision;
use super::spawn::spawn_pipe;
use super::state::{Activation, Bird, Flow, GameEvent, GamePhase, GameState};
use crate::config::GameConfig;

/// Advance the game by one frame.
///
/// `timestamp` is in milliseconds, in the same clock domain as
/// `spawn_interval_ms`. Does nothing and returns [`Flow::Halt`] once the
/// game is over.
pub fn step<R: Rng>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
    timestamp: f64,
) -> Flow {
    if !state.is_running() {
        return Flow::Halt;
    }

    state.events.clear();
    state.frames += 1;

    // Semi-implicit Euler: velocity first, then position
    let bird = &mut state.bird;
    bird.velocity += config.gravity;
    bird.pos.y += bird.velocity;

    if timestamp - state.last_spawn_time > config.spawn_interval_ms {
        let pipe = spawn_pipe(config, rng);
        state.events.push(GameEvent::PipeSpawned {
            top_height: pipe.top_height,
        });
        state.pipes.push(pipe);
        state.last_spawn_time = timestamp;
    }

    let bird_x = state.bird.left();
    for pipe in &mut state.pipes {
        pipe.x -= config.pipe_speed;

        if !pipe.passed && pipe.right() < bird_x {
            pipe.passed = true;
            state.score += 1;
            state.events.push(GameEvent::PipePassed { score: state.score });
        }
    }

    state.pipes.retain(|pipe| pipe.right() >= 0.0);

    if let Some(collision) = detect_collision(state, config) {
        state.phase = GamePhase::GameOver;
        state.best_score = state.best_score.max(state.score);
        state.events.push(GameEvent::Crashed(collision));
        return Flow::Halt;
    }

    Flow::Continue
}

/// Handle the player's "activate" input.
///
/// While running this sets (not adds) the jump impulse. After a game over
/// it restarts the run.
pub fn activate(state: &mut GameState, config: &GameConfig) -> Activation {
    match state.phase {
        GamePhase::Running => {
            state.bird.velocity = config.jump_impulse;
            Activation::Flapped
        }
        GamePhase::GameOver => {
            reset(state, config);
            Activation::Restarted
        }
    }
}

/// Start a fresh run. Keeps the best score.
pub fn reset(state: &mut GameState, config: &GameConfig) {
    state.bird = Bird::new(config);
    state.pipes.clear();
    state.score = 0;
    state.last_spawn_time = 0.0;
    state.frames = 0;
    state.events.clear();
    state.phase = GamePhase::Running;
}
