//! Paced driver that ties a game to a direction provider and a renderer.
//! This module exists for front ends that want a whole run rather than single ticks.
//! It does not decide moves or draw anything itself.

use std::io;
use std::thread;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::game::Game;
use crate::provider::DirectionProvider;
use crate::render::Renderer;
use crate::types::{AdvanceStopReason, RunOutcome};

/// Final numbers of a finished run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub score: u32,
    pub lives: u32,
    pub outcome: RunOutcome,
    pub snapshot_hash: u64,
}

pub struct Session<P, R> {
    game: Game,
    provider: P,
    renderer: R,
}

impl<P: DirectionProvider, R: Renderer> Session<P, R> {
    pub fn new(game: Game, provider: P, renderer: R) -> Self {
        Self { game, provider, renderer }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn into_parts(self) -> (Game, P, R) {
        (self.game, self.provider, self.renderer)
    }

    /// Runs until the game finishes, rendering every tick and sleeping `tick_delay_ms`
    /// between ticks. Only renderer failures are reported as errors.
    pub fn run(&mut self) -> io::Result<RunSummary> {
        let config = self.game.config();
        let delay = Duration::from_millis(config.tick_delay_ms);
        let grid = self.game.state().grid();
        self.renderer.init(config.cell_size_px, grid.width(), grid.height())?;
        info!(
            seed = config.seed,
            hostiles = self.game.state().hostile_count(),
            max_ticks = config.max_ticks,
            "session started"
        );
        self.renderer.render(self.game.state())?;

        let outcome = loop {
            let result = self.game.advance(&mut self.provider, 1);
            self.renderer.render(self.game.state())?;
            if let AdvanceStopReason::Finished(outcome) = result.stop_reason {
                break outcome;
            }
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        };

        let summary = self.summary(outcome);
        info!(?outcome, ticks = summary.ticks, score = summary.score, "session finished");
        Ok(summary)
    }

    fn summary(&self, outcome: RunOutcome) -> RunSummary {
        RunSummary {
            seed: self.game.config().seed,
            ticks: self.game.current_tick(),
            score: self.game.state().score(),
            lives: self.game.state().lives(),
            outcome,
            snapshot_hash: self.game.snapshot_hash(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Scripted;
    use crate::render::{NullRenderer, TextRenderer};
    use crate::test_support::game;
    use crate::types::Direction;

    #[test]
    fn run_renders_every_tick_until_cleared() {
        let game = game("######\n#P..o#\n######");
        let script = Scripted::new([Direction::Right; 3]);
        let mut session = Session::new(game, script, TextRenderer::new(Vec::new()));

        let summary = session.run().expect("run");
        assert_eq!(summary.outcome, RunOutcome::Cleared);
        assert_eq!(summary.ticks, 3);
        assert_eq!(summary.score, 70);
        assert_eq!(summary.lives, 3);

        let (game, _, renderer) = session.into_parts();
        assert_eq!(summary.snapshot_hash, game.snapshot_hash());
        assert_eq!(renderer.frames(), 4, "initial frame plus one per tick");
    }

    #[test]
    fn summary_serializes_for_the_cli() {
        let mut session =
            Session::new(game("####\n#P.#\n####"), Scripted::new([Direction::Right]), NullRenderer);
        let summary = session.run().expect("run");
        let value = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(value["outcome"], "Cleared");
        assert_eq!(value["score"], 10);
        assert_eq!(value["ticks"], 1);
    }
}
