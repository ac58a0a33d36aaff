use super::*;
use crate::pathfinding::{TargetCandidate, exit_count, nearest_target_distance, nearest_tile_step};

impl Autopilot {
    /// Head for the nearest dot, or a power collectible when it is close, clearly closer,
    /// or a hostile is near.
    pub(super) fn eat_fast(&self, view: &View<'_>, threat: Option<u32>) -> Direction {
        let distance_to =
            |target| nearest_target_distance(view.state, view.origin, target, view.pass);
        let dot = distance_to(TileKind::Collectible);
        let power = distance_to(TileKind::PowerCollectible);

        let (dot, power) = match (dot, power) {
            (None, None) => return Direction::Stay,
            (None, Some(_)) => return self.route_to(view, TileKind::PowerCollectible),
            (Some(_), None) => return self.route_to(view, TileKind::Collectible),
            (Some(dot), Some(power)) => (dot, power),
        };

        let danger_near =
            threat.is_some_and(|distance| distance <= self.config.power_prefer_if_danger_le);
        let take_power = danger_near
            || power <= self.config.power_take_if_dist_le
            || power + POWER_MARGIN < dot;
        let (first, fallback) = if take_power {
            (TileKind::PowerCollectible, TileKind::Collectible)
        } else {
            (TileKind::Collectible, TileKind::PowerCollectible)
        };

        let dir = self.route_to(view, first);
        if dir != Direction::Stay {
            return dir;
        }
        self.route_to(view, fallback)
    }

    /// First step toward the nearest `target`, ties broken toward safer, more open cells.
    pub(super) fn route_to(&self, view: &View<'_>, target: TileKind) -> Direction {
        nearest_tile_step(view.state, view.origin, target, view.pass, |candidate| {
            self.tie_break_score(view, candidate)
        })
    }

    fn tie_break_score(&self, view: &View<'_>, candidate: &TargetCandidate) -> i64 {
        let threat = min_distance_to_danger(view.state, candidate.pos, view.pass);
        let mut score = safety(threat) * TIE_BREAK_SAFETY_WEIGHT
            + i64::from(exit_count(view.state, candidate.pos, view.pass)) * EXIT_WEIGHT;
        if candidate.first_step == self.memory.last_dir() {
            score += CONTINUITY_BONUS;
        }
        if self.memory.is_recent(candidate.pos) {
            score -= TIE_BREAK_RECENT_PENALTY;
        }
        score
    }
}
