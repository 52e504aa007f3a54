//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-call increments only
//! - Injected, seedable RNG only
//! - Pipes kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{check_collisions, detect_collision};
pub use spawn::spawn_pipe;
pub use state::{Activation, Bird, Collision, Flow, GameEvent, GamePhase, GameState, Pipe};
pub use tick::{activate, reset, step};
