//! Platform abstraction layer
//!
//! Handles the collaborators around the simulation:
//! - Time/ticks for drivers without a display refresh callback
//! - Input events (key mapping, edge-only activation)
//! - A scripted input source for headless runs

pub mod autopilot;
pub mod clock;
pub mod input;

pub use autopilot::Autopilot;
pub use clock::FrameClock;
pub use input::is_activate_key;
