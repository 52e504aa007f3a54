//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`]; there are no globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay, the driver keeps requesting frames
    #[default]
    Running,
    /// Run ended, waiting for an activation to restart
    GameOver,
}

/// What the driver should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Schedule another frame
    Continue,
    /// Stop the frame chain until the next activation
    Halt,
}

/// Result of an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Bird velocity was set to the jump impulse
    Flapped,
    /// Game was over; state was reset and the driver must resume stepping
    Restarted,
}

/// What the bird hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Left the field through the top or the bottom
    Boundary,
    /// Overlapped a pipe segment; index into `GameState::pipes`
    Pipe { index: usize },
}

/// Things that happened during the last step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PipeSpawned { top_height: f32 },
    PipePassed { score: u32 },
    Crashed(Collision),
}

/// The player-controlled bird
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = down)
    pub velocity: f32,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.bird_start,
            size: config.bird_size,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A pipe pair: a top segment from the ceiling and a bottom segment from
/// `bottom_y` to the ground, with the gap in between
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub x: f32,
    pub width: f32,
    pub top_height: f32,
    pub bottom_y: f32,
    /// Set once the bird has cleared this pipe (scored exactly once)
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, width: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            width,
            top_height,
            bottom_y: top_height + gap,
            passed: false,
        }
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub bird: Bird,
    /// Active pipes in spawn order
    pub pipes: Vec<Pipe>,
    pub score: u32,
    /// Best score seen by this process (never persisted)
    pub best_score: u32,
    pub phase: GamePhase,
    /// Timestamp of the last spawn; 0.0 means none yet
    pub last_spawn_time: f64,
    /// Steps taken in the current run
    pub frames: u64,
    /// Events emitted by the most recent step
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bird: Bird::new(config),
            pipes: Vec::new(),
            score: 0,
            best_score: 0,
            phase: GamePhase::Running,
            last_spawn_time: 0.0,
            frames: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
