//! Game configuration
//!
//! Every tunable constant of a run lives in [`GameConfig`]. The defaults
//! reproduce the classic 400x600 layout from [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration cannot be played
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{what} must be a finite number")]
    NotFinite { what: &'static str },
    #[error("field must have positive dimensions, got {width}x{height}")]
    EmptyField { width: f32, height: f32 },
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f32 },
    #[error("pipe gap {gap} with min top height {min_top} leaves no room in a field {height} high")]
    NoSpawnRange { gap: f32, min_top: f32, height: f32 },
    #[error("bird start ({x}, {y}) lies outside the field")]
    BirdOutsideField { x: f32, y: f32 },
}

/// Fixed configuration for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    /// Top-left corner of the bird at the start of every run
    pub bird_start: Vec2,
    pub bird_size: Vec2,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub pipe_speed: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub min_top_height: f32,
    pub spawn_interval_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            bird_start: Vec2::new(BIRD_START_X, FIELD_HEIGHT / 2.0),
            bird_size: Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            pipe_speed: PIPE_SPEED,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            min_top_height: MIN_TOP_HEIGHT,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Largest top segment height the spawner may pick
    pub fn max_top_height(&self) -> f32 {
        self.field_height - self.pipe_gap - self.min_top_height
    }

    /// Check the invariants the simulation relies on.
    ///
    /// Called once when a session is built; the per-frame step assumes a
    /// valid config and never re-checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("field width", self.field_width),
            ("field height", self.field_height),
            ("bird start x", self.bird_start.x),
            ("bird start y", self.bird_start.y),
            ("bird width", self.bird_size.x),
            ("bird height", self.bird_size.y),
            ("gravity", self.gravity),
            ("jump impulse", self.jump_impulse),
            ("pipe speed", self.pipe_speed),
            ("pipe width", self.pipe_width),
            ("pipe gap", self.pipe_gap),
            ("min top height", self.min_top_height),
        ];
        if let Some(&(what, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite { what });
        }
        if !self.spawn_interval_ms.is_finite() {
            return Err(ConfigError::NotFinite {
                what: "spawn interval",
            });
        }

        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::EmptyField {
                width: self.field_width,
                height: self.field_height,
            });
        }

        let positives = [
            ("bird width", self.bird_size.x),
            ("bird height", self.bird_size.y),
            ("pipe width", self.pipe_width),
            ("pipe gap", self.pipe_gap),
        ];
        for (what, value) in positives {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { what, value });
            }
        }
        if self.min_top_height < 0.0 {
            return Err(ConfigError::NonPositive {
                what: "min top height",
                value: self.min_top_height,
            });
        }
        if self.spawn_interval_ms < 0.0 {
            return Err(ConfigError::NonPositive {
                what: "spawn interval",
                value: self.spawn_interval_ms as f32,
            });
        }

        // The spawner draws whole pixels, so the range must hold an integer.
        if self.min_top_height.ceil() > self.max_top_height().floor() {
            return Err(ConfigError::NoSpawnRange {
                gap: self.pipe_gap,
                min_top: self.min_top_height,
                height: self.field_height,
            });
        }

        let start = self.bird_start;
        if start.x < 0.0
            || start.y < 0.0
            || start.x + self.bird_size.x > self.field_width
            || start.y + self.bird_size.y > self.field_height
        {
            return Err(ConfigError::BirdOutsideField {
                x: start.x,
                y: start.y,
            });
        }

        Ok(())
    }
}
