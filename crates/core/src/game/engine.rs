//! One tick of the simulation, phase by phase.
//! This module exists to fix the order of movement, contact, power and termination.
//! It does not choose directions; see [`crate::provider`] and [`super::hostile`].

use tracing::{debug, info, warn};

use super::*;
use crate::types::Pickup;

mod advance;


impl Game {
    /// Runs one full tick with `requested` as the agent's direction. `None` keeps the
    /// previous heading. Returns the outcome once the game has finished.
    pub fn step(&mut self, requested: Option<Direction>) -> Option<RunOutcome> {
        if let Some(outcome) = self.outcome {
            return Some(outcome);
        }
        if self.state.is_done() {
            return Some(self.finish(RunOutcome::Defeated));
        }
        self.tick += 1;

        self.phase = TickPhase::AgentMoving;
        let dir = requested.unwrap_or(self.state.agent().dir());
        self.move_agent(dir);

        self.phase = TickPhase::CollisionCheck1;
        self.check_collision();
        if self.state.is_done() {
            self.phase = TickPhase::TerminationCheck;
            return Some(self.finish(RunOutcome::Defeated));
        }

        self.phase = TickPhase::HostilesMoving;
        self.move_hostiles();

        self.phase = TickPhase::CollisionCheck2;
        self.check_collision();

        self.phase = TickPhase::PowerTick;
        if self.state.tick_power() {
            self.log.push(LogEvent::PowerExpired);
            debug!(tick = self.tick, "power expired");
        }

        self.phase = TickPhase::TerminationCheck;
        if self.state.lives() == 0 {
            return Some(self.finish(RunOutcome::Defeated));
        }
        if !self.state.grid().has_any_collectible() {
            return Some(self.finish(RunOutcome::Cleared));
        }
        if self.tick >= self.config.max_ticks {
            warn!(tick = self.tick, score = self.state.score(), "tick limit reached, halting");
            return Some(self.finish(RunOutcome::Halted));
        }
        self.phase = TickPhase::Idle;
        None
    }

    fn move_agent(&mut self, dir: Direction) {
        if !self.state.move_agent(dir) {
            return;
        }
        let pos = self.state.agent().pos();
        match self.state.consume(pos) {
            Some(Pickup::Pellet) => {
                self.state.add_score(self.config.rewards.pellet);
                self.log.push(LogEvent::PelletEaten { pos });
            }
            Some(Pickup::PowerPellet) => {
                self.state.add_score(self.config.rewards.power_pellet);
                self.state.activate_power(self.config.power_duration);
                let power_ticks = self.state.power_ticks();
                self.log.push(LogEvent::PowerPelletEaten { pos, power_ticks });
                debug!(tick = self.tick, ?pos, power_ticks, "power activated");
            }
            None => {}
        }
    }

    fn move_hostiles(&mut self) {
        for id in self.state.hostile_ids() {
            let Some(hostile) = self.state.hostile(id) else {
                continue;
            };
            let dir = self.hostile_policy.choose(hostile, &self.state);
            self.state.move_hostile(id, dir);
        }
    }

    fn check_collision(&mut self) {
        match collision::resolve(&mut self.state, &self.config.rewards) {
            Some(Collision::HostileEaten { hostile }) => {
                debug!(tick = self.tick, ?hostile, "hostile eaten");
                self.log.push(LogEvent::HostileEaten { hostile });
            }
            Some(Collision::LifeLost { lives_left, .. }) => {
                info!(tick = self.tick, lives_left, "life lost");
                self.log.push(LogEvent::LifeLost { lives_left });
            }
            None => {}
        }
    }

    fn finish(&mut self, outcome: RunOutcome) -> RunOutcome {
        self.state.mark_done();
        self.outcome = Some(outcome);
        self.log.push(LogEvent::Finished { outcome, tick: self.tick });
        info!(?outcome, tick = self.tick, score = self.state.score(), "game finished");
        outcome
    }
}
