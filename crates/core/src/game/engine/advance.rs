//! Multi-tick driver on top of [`Game::step`].

use super::*;
use crate::provider::DirectionProvider;

impl Game {
    /// Steps until the game finishes or `max_steps` ticks have run, asking `provider` for
    /// the agent's direction before each tick.
    pub fn advance<P>(&mut self, provider: &mut P, max_steps: u32) -> AdvanceResult
    where
        P: DirectionProvider + ?Sized,
    {
        if let Some(outcome) = self.outcome {
            return AdvanceResult {
                simulated_ticks: 0,
                stop_reason: AdvanceStopReason::Finished(outcome),
            };
        }

        let mut steps = 0;
        while steps < max_steps {
            let requested = provider.next_direction(&self.state);
            steps += 1;
            if let Some(outcome) = self.step(requested) {
                return AdvanceResult {
                    simulated_ticks: steps,
                    stop_reason: AdvanceStopReason::Finished(outcome),
                };
            }
        }
        AdvanceResult { simulated_ticks: steps, stop_reason: AdvanceStopReason::BudgetExhausted }
    }
}
