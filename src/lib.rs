//! Flappy Pipes - a single-player arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `session`: Owns one game run and talks to the presentation sink
//! - `renderer`: Draw list construction and the WebGPU pipeline
//! - `platform`: Frame clock and input sources
//! - `config`: Game constants and their validation

pub mod config;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Playing field dimensions (canvas pixels)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Bird defaults
    pub const BIRD_START_X: f32 = 100.0;
    pub const BIRD_WIDTH: f32 = 40.0;
    pub const BIRD_HEIGHT: f32 = 30.0;
    /// Added to the bird's velocity every step (not scaled by frame time)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set on activation (negative = upward)
    pub const JUMP_IMPULSE: f32 = -10.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 150.0;
    pub const PIPE_SPEED: f32 = 2.0;
    pub const MIN_TOP_HEIGHT: f32 = 50.0;
    /// Milliseconds between pipe spawns
    pub const SPAWN_INTERVAL_MS: f64 = 3500.0;
}
