//! One game session: state, configuration and RNG owned together
//!
//! Drivers call [`Session::step`] once per display refresh and stop
//! scheduling frames when it returns [`Flow::Halt`]. Input sources call
//! [`Session::activate`]; an [`Activation::Restarted`] result means the
//! driver must start scheduling frames again.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{ConfigError, GameConfig};
use crate::renderer::Presenter;
use crate::sim::{self, Activation, Flow, GameEvent, GameState};

pub struct Session<R = Pcg32> {
    state: GameState,
    config: GameConfig,
    rng: R,
}

impl Session<Pcg32> {
    /// Session with a seeded PCG generator
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "New session: field {}x{}, gap {}, spawn every {} ms",
            config.field_width,
            config.field_height,
            config.pipe_gap,
            config.spawn_interval_ms
        );
        Ok(Self {
            state: GameState::new(&config),
            config,
            rng,
        })
    }

    /// Advance one frame and present the result.
    ///
    /// The presenter sees the post-step state exactly once per step that
    /// ran; a halted session presents nothing.
    pub fn step<P: Presenter + ?Sized>(&mut self, timestamp: f64, presenter: &mut P) -> Flow {
        if !self.state.is_running() {
            return Flow::Halt;
        }

        let flow = sim::step(&mut self.state, &self.config, &mut self.rng, timestamp);
        presenter.present(&self.state, &self.config);
        self.log_events();
        flow
    }

    /// Show the current state without stepping, e.g. right after a restart
    pub fn present<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        presenter.present(&self.state, &self.config);
    }

    pub fn activate(&mut self) -> Activation {
        let activation = sim::activate(&mut self.state, &self.config);
        if activation == Activation::Restarted {
            log::info!("Restarting (best {})", self.state.best_score);
        }
        activation
    }

    pub fn reset(&mut self) {
        sim::reset(&mut self.state, &self.config);
        log::info!("Session reset");
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    fn log_events(&self) {
        for event in &self.state.events {
            match event {
                GameEvent::PipeSpawned { top_height } => {
                    log::debug!("Pipe spawned (top {})", top_height);
                }
                GameEvent::PipePassed { score } => {
                    log::debug!("Pipe passed, score {}", score);
                }
                GameEvent::Crashed(collision) => {
                    log::info!(
                        "Crashed into {:?} after {} frames with score {}",
                        collision,
                        self.state.frames,
                        self.state.score
                    );
                }
            }
        }
    }
}
