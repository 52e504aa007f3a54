//! Presentation layer
//!
//! The simulation hands its post-step state to a [`Presenter`]. Presenters
//! only read state; they build a [`Scene`] and show it somewhere.

pub mod headless;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::LogPresenter;
pub use pipeline::{BROWSER_BACKENDS, RenderError, RenderState};
pub use scene::{FilledRect, Scene};
#[cfg(target_arch = "wasm32")]
pub use web::WebPresenter;

use crate::config::GameConfig;
use crate::sim::GameState;

/// Consumer of game state, called once per simulation step
pub trait Presenter {
    fn present(&mut self, state: &GameState, config: &GameConfig);
}
