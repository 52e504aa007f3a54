//! Fixed-rate frame clock
//!
//! Stands in for the display refresh callback on native builds. Produces
//! timestamps in milliseconds, the clock domain of the spawn interval.

/// Default refresh rate for headless runs
pub const DEFAULT_HZ: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct FrameClock {
    now_ms: f64,
    frame_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_HZ)
    }
}

impl FrameClock {
    pub fn new(hz: f64) -> Self {
        Self {
            now_ms: 0.0,
            frame_ms: 1000.0 / hz.max(1.0),
        }
    }

    /// Advance one frame and return the new timestamp
    pub fn tick(&mut self) -> f64 {
        self.now_ms += self.frame_ms;
        self.now_ms
    }

    pub fn now(&self) -> f64 {
        self.now_ms
    }

    pub fn frame_ms(&self) -> f64 {
        self.frame_ms
    }
}
