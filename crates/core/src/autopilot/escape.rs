use super::*;
use crate::pathfinding::exit_count;

impl Autopilot {
    /// Step that keeps the most distance from danger, preferring open tiles.
    ///
    /// The first pass refuses to come within `hard_avoid` of a hostile unless the agent is
    /// already that close. If nothing survives, the second pass scores every passable step.
    pub(super) fn escape_move(&self, view: &View<'_>, current_threat: u32) -> Direction {
        let hard_avoid = self.config.hard_avoid;
        let strict = self.best_escape(view, |threat| {
            !(threat.is_some_and(|distance| distance <= hard_avoid) && current_threat > hard_avoid)
        });
        if strict != Direction::Stay {
            return strict;
        }
        self.best_escape(view, |_| true)
    }

    fn best_escape<Allow>(&self, view: &View<'_>, allow: Allow) -> Direction
    where
        Allow: Fn(Option<u32>) -> bool,
    {
        let mut best: Option<(i64, Direction)> = None;
        for dir in Direction::POLICY_ORDER {
            if !view.can_step(dir) {
                continue;
            }
            let next = view.origin.step(dir);
            let threat = min_distance_to_danger(view.state, next, view.pass);
            if !allow(threat) {
                continue;
            }
            let score = self.escape_score(view, dir, next, threat);
            if best.is_none_or(|(best_score, _)| score > best_score) {
                best = Some((score, dir));
            }
        }
        best.map_or(Direction::Stay, |(_, dir)| dir)
    }

    fn escape_score(&self, view: &View<'_>, dir: Direction, next: Pos, threat: Option<u32>) -> i64 {
        let mut score = safety(threat) * ESCAPE_SAFETY_WEIGHT
            + i64::from(exit_count(view.state, next, view.pass)) * EXIT_WEIGHT;
        if dir == self.memory.last_dir() {
            score += CONTINUITY_BONUS;
        }
        if self.memory.is_recent(next) {
            score -= ESCAPE_RECENT_PENALTY;
        }
        score
    }
}
