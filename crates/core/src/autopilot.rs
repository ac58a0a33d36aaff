//! Per-tick move selection for the agent.
//! This module exists to turn the current [`GameState`] into one [`Direction`] using
//! escape, collection and smoothing heuristics layered on the BFS queries in
//! [`crate::pathfinding`]. It does not move anything; the engine applies the result.

mod collect;
mod escape;
mod filters;
mod memory;


use tracing::debug;

use crate::config::PolicyConfig;
use crate::pathfinding::{Passability, min_distance_to_danger};
use crate::state::GameState;
use crate::types::{Direction, Pos, TileKind};

use memory::Memory;

const SAFETY_CAP: u32 = 50;
const ESCAPE_SAFETY_WEIGHT: i64 = 2000;
const TIE_BREAK_SAFETY_WEIGHT: i64 = 1000;
const EXIT_WEIGHT: i64 = 120;
const CONTINUITY_BONUS: i64 = 40;
const ESCAPE_RECENT_PENALTY: i64 = 300;
const TIE_BREAK_RECENT_PENALTY: i64 = 400;
/// Power wins outright when it is more than this many steps closer than the nearest dot.
const POWER_MARGIN: u32 = 2;

/// Which rule produced the last decision, before the smoothing filters ran.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Opening,
    PowerChase,
    Escape,
    Collect,
}

#[derive(Clone, Debug)]
pub struct Autopilot {
    config: PolicyConfig,
    memory: Memory,
    mode: Mode,
}

/// Read-only view of one decision: where the agent stands and what it may enter.
struct View<'a> {
    state: &'a GameState,
    origin: Pos,
    pass: Passability,
}

impl View<'_> {
    fn can_step(&self, dir: Direction) -> bool {
        dir != Direction::Stay && self.pass.agent_can_enter(self.state, self.origin.step(dir))
    }
}

impl Autopilot {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config, memory: Memory::new(config.loop_memory), mode: Mode::Idle }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_direction(&self) -> Direction {
        self.memory.last_dir()
    }

    /// Ticks seen so far. Drives the opening and no-power windows.
    pub fn ticks(&self) -> u64 {
        self.memory.tick()
    }

    /// Forget everything learned in the current level.
    pub fn reset(&mut self) {
        self.memory = Memory::new(self.config.loop_memory);
        self.mode = Mode::Idle;
    }

    pub fn next_move(&mut self, state: &GameState) -> Direction {
        let origin = state.agent().pos();
        self.memory.observe(origin);
        let tick = self.memory.tick();
        let power_mode = state.is_power_mode();
        let view = View {
            state,
            origin,
            pass: Passability::new(power_mode || tick <= self.config.no_power_first_ticks),
        };

        if tick <= self.config.opening_steps {
            let opening = self.opening_move(&view);
            if opening != Direction::Stay {
                self.mode = Mode::Opening;
                debug!(tick, ?origin, dir = ?opening, "autopilot opening");
                return self.memory.remember(origin, opening);
            }
        }

        let mut chosen = if power_mode {
            self.mode = Mode::PowerChase;
            self.route_to(&view, TileKind::Collectible)
        } else {
            let threat = min_distance_to_danger(state, origin, view.pass);
            match threat {
                Some(distance) if distance <= self.config.danger_trigger => {
                    self.mode = Mode::Escape;
                    self.escape_move(&view, distance)
                }
                _ => {
                    self.mode = Mode::Collect;
                    self.eat_fast(&view, threat)
                }
            }
        };

        if chosen == Direction::Stay {
            chosen = self.any_legal_move(&view);
        }
        chosen = self.break_loop(&view, chosen);
        if self.memory.stuck_ticks() >= self.config.stuck_ticks {
            chosen = self.force_different(&view, chosen);
        }
        chosen = self.apply_no_reverse(&view, chosen);

        debug!(tick, ?origin, mode = ?self.mode, dir = ?chosen, "autopilot move");
        self.memory.remember(origin, chosen)
    }
}

fn safety(distance: Option<u32>) -> i64 {
    i64::from(distance.map_or(SAFETY_CAP, |distance| distance.min(SAFETY_CAP)))
}
