//! Simulation session for one level: owns the state, the hostile policy and the tick clock.
//! The per-tick state machine lives in [`engine`]; hashing in `hash`.

mod collision;
mod engine;
mod hash;
pub mod hostile;

use crate::config::SimConfig;
use crate::level::{Level, LevelError};
use crate::state::GameState;
use crate::types::*;

use hostile::{HostilePolicy, Wander};

pub struct Game {
    config: SimConfig,
    state: GameState,
    hostile_policy: Box<dyn HostilePolicy>,
    tick: u64,
    phase: TickPhase,
    outcome: Option<RunOutcome>,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn new(level: Level, config: SimConfig) -> Result<Self, LevelError> {
        let state = level.into_state(config.lives)?;
        Ok(Self::from_state(state, config))
    }

    /// Wraps an already built state. Hostiles steer with [`Wander`] seeded from the config.
    pub fn from_state(state: GameState, config: SimConfig) -> Self {
        let hostile_policy = Box::new(Wander::new(config.seed, config.hostile));
        Self {
            config,
            state,
            hostile_policy,
            tick: 0,
            phase: TickPhase::Idle,
            outcome: None,
            log: Vec::new(),
        }
    }

    pub fn with_hostile_policy(mut self, policy: impl HostilePolicy + 'static) -> Self {
        self.hostile_policy = Box::new(policy);
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Ticks simulated so far.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn phase(&self) -> TickPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }
}
