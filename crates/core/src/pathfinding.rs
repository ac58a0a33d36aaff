//! Breadth-first distance and first-step queries over the tile grid.
//! This module exists so the autopilot can ask "how far" and "which way" without owning
//! search code. It does not decide anything: scoring is supplied by the caller.

use std::collections::{BTreeMap, VecDeque, btree_map::Entry};

use crate::grid::Grid;
use crate::state::GameState;
use crate::types::{Direction, Pos, TileKind};

/// Which tiles a search may enter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Passability {
    /// Treat power collectibles as walls.
    pub block_power: bool,
}

impl Passability {
    pub const fn new(block_power: bool) -> Self {
        Self { block_power }
    }

    /// Agent movement: walls, blocked power tiles and dangerous hostiles are impassable.
    pub fn agent_can_enter(self, state: &GameState, pos: Pos) -> bool {
        self.terrain_allows(state.grid(), pos) && !state.is_danger_at(pos)
    }

    /// Threat probes ignore hostile occupancy.
    fn terrain_allows(self, grid: &Grid, pos: Pos) -> bool {
        match grid.tile_at(pos) {
            TileKind::Wall => false,
            TileKind::PowerCollectible => !self.block_power,
            TileKind::Empty | TileKind::Collectible => true,
        }
    }
}

/// A target cell reached at the minimal distance, with the first step that leads to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetCandidate {
    pub pos: Pos,
    pub first_step: Direction,
    pub distance: u32,
}

pub fn exit_count(state: &GameState, pos: Pos, pass: Passability) -> u32 {
    Direction::POLICY_ORDER
        .into_iter()
        .filter(|dir| pass.agent_can_enter(state, pos.step(*dir)))
        .count() as u32
}

/// Shortest walk from `from` to `to` through non-wall tiles. `None` when unreachable.
pub fn bfs_distance(grid: &Grid, from: Pos, to: Pos, pass: Passability) -> Option<u32> {
    if from == to {
        return Some(0);
    }

    let mut visited = BTreeMap::new();
    let mut queue = VecDeque::new();
    visited.insert(from, 0u32);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        let dist = visited.get(&current).copied().unwrap_or_default();
        for dir in Direction::POLICY_ORDER {
            let neighbor = current.step(dir);
            if !pass.terrain_allows(grid, neighbor) {
                continue;
            }
            if neighbor == to {
                return Some(dist + 1);
            }
            if let Entry::Vacant(entry) = visited.entry(neighbor) {
                entry.insert(dist + 1);
                queue.push_back(neighbor);
            }
        }
    }
    None
}

/// Distance to the closest non-eatable hostile. Eatable hostiles are not threats.
pub fn min_distance_to_danger(state: &GameState, origin: Pos, pass: Passability) -> Option<u32> {
    state
        .hostiles()
        .filter(|(_, hostile)| hostile.is_dangerous())
        .filter_map(|(_, hostile)| bfs_distance(state.grid(), origin, hostile.pos(), pass))
        .min()
}

/// Distance to the nearest `target` tile other than `origin` itself.
pub fn nearest_target_distance(
    state: &GameState,
    origin: Pos,
    target: TileKind,
    pass: Passability,
) -> Option<u32> {
    if pass.block_power && target == TileKind::PowerCollectible {
        return None;
    }

    let mut visited = BTreeMap::new();
    let mut queue = VecDeque::new();
    visited.insert(origin, 0u32);
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        let dist = visited.get(&current).copied().unwrap_or_default();
        if current != origin && state.grid().tile_at(current) == target {
            return Some(dist);
        }
        for dir in Direction::POLICY_ORDER {
            let neighbor = current.step(dir);
            if !pass.agent_can_enter(state, neighbor) {
                continue;
            }
            if let Entry::Vacant(entry) = visited.entry(neighbor) {
                entry.insert(dist + 1);
                queue.push_back(neighbor);
            }
        }
    }
    None
}

/// Every `target` tile at the minimal distance, in discovery order.
///
/// Expansion stops once the frontier is deeper than the first hit, so only the closest
/// layer of targets is collected.
pub fn nearest_targets(
    state: &GameState,
    origin: Pos,
    target: TileKind,
    pass: Passability,
) -> Vec<TargetCandidate> {
    let mut candidates = Vec::new();
    if pass.block_power && target == TileKind::PowerCollectible {
        return candidates;
    }
    if !state.grid().contains(target) {
        return candidates;
    }

    let mut visited = BTreeMap::new();
    let mut queue = VecDeque::new();
    visited.insert(origin, (0u32, Direction::Stay));
    queue.push_back(origin);
    let mut found: Option<u32> = None;

    while let Some(current) = queue.pop_front() {
        let (dist, first) = visited.get(&current).copied().unwrap_or_default();
        if let Some(found) = found
            && dist > found
        {
            break;
        }

        for dir in Direction::POLICY_ORDER {
            let neighbor = current.step(dir);
            if !pass.agent_can_enter(state, neighbor) {
                continue;
            }
            let Entry::Vacant(entry) = visited.entry(neighbor) else {
                continue;
            };
            let step = if current == origin { dir } else { first };
            entry.insert((dist + 1, step));
            queue.push_back(neighbor);

            if state.grid().tile_at(neighbor) != target {
                continue;
            }
            let candidate = TargetCandidate { pos: neighbor, first_step: step, distance: dist + 1 };
            match found {
                Some(best) if candidate.distance > best => {}
                Some(best) if candidate.distance == best => candidates.push(candidate),
                _ => {
                    found = Some(candidate.distance);
                    candidates.clear();
                    candidates.push(candidate);
                }
            }
        }
    }
    candidates
}

/// First step toward the best-scoring nearest `target`, or `Stay` if none is reachable.
/// Equal scores keep the earliest discovered candidate.
pub fn nearest_tile_step<Score>(
    state: &GameState,
    origin: Pos,
    target: TileKind,
    pass: Passability,
    score: Score,
) -> Direction
where
    Score: Fn(&TargetCandidate) -> i64,
{
    let mut best: Option<(i64, Direction)> = None;
    for candidate in nearest_targets(state, origin, target, pass) {
        if candidate.first_step == Direction::Stay {
            continue;
        }
        let value = score(&candidate);
        if best.is_none_or(|(best_value, _)| value > best_value) {
            best = Some((value, candidate.first_step));
        }
    }
    best.map_or(Direction::Stay, |(_, dir)| dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{first_hostile, state};

    const OPEN: Passability = Passability::new(false);
    const NO_POWER: Passability = Passability::new(true);

    #[test]
    fn nearest_distance_skips_origin_and_respects_walls() {
        let state = state(
            "#######\n\
             #..#._#\n\
             #P_#__#\n\
             #######",
        );
        let origin = state.agent().pos();
        assert_eq!(nearest_target_distance(&state, origin, TileKind::Collectible, OPEN), Some(1));
        assert_eq!(
            nearest_target_distance(&state, Pos::new(1, 2), TileKind::Collectible, OPEN),
            Some(1),
            "a dot under the origin does not count"
        );
        assert_eq!(nearest_target_distance(&state, origin, TileKind::PowerCollectible, OPEN), None);
    }

    #[test]
    fn blocked_power_is_never_a_target() {
        let state = state("######\n#P_o.#\n######");
        let origin = state.agent().pos();
        let power = TileKind::PowerCollectible;
        assert_eq!(nearest_target_distance(&state, origin, power, OPEN), Some(2));
        assert_eq!(nearest_target_distance(&state, origin, power, NO_POWER), None);
        assert_eq!(
            nearest_target_distance(&state, origin, TileKind::Collectible, NO_POWER),
            None,
            "the power tile walls off the dot"
        );
        assert!(nearest_targets(&state, origin, power, NO_POWER).is_empty());
    }

    #[test]
    fn equal_targets_resolve_in_up_left_down_right_order() {
        let flat = |_: &TargetCandidate| 0;

        let lr = state(
            "#######\n\
             #_____#\n\
             #_____#\n\
             #._P_.#\n\
             #_____#\n\
             #_____#\n\
             #######",
        );
        let origin = lr.agent().pos();
        let step = nearest_tile_step(&lr, origin, TileKind::Collectible, OPEN, flat);
        assert_eq!(step, Direction::Left);

        let down_right = state(
            "#######\n\
             #_____#\n\
             #_____#\n\
             #__P_.#\n\
             #_____#\n\
             #__.__#\n\
             #######",
        );
        let origin = down_right.agent().pos();
        let candidates = nearest_targets(&down_right, origin, TileKind::Collectible, OPEN);
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|candidate| candidate.distance == 2));
        assert_eq!(
            nearest_tile_step(&down_right, origin, TileKind::Collectible, OPEN, flat),
            Direction::Down
        );

        // A higher score wins regardless of discovery order.
        let prefer_right = |candidate: &TargetCandidate| candidate.pos.x as i64;
        assert_eq!(
            nearest_tile_step(&down_right, origin, TileKind::Collectible, OPEN, prefer_right),
            Direction::Right
        );
    }

    #[test]
    fn only_the_closest_layer_is_collected() {
        let state = state(
            "########\n\
             #._P_..#\n\
             ########",
        );
        let origin = state.agent().pos();
        let candidates = nearest_targets(&state, origin, TileKind::Collectible, OPEN);
        let positions: Vec<Pos> = candidates.iter().map(|candidate| candidate.pos).collect();
        assert_eq!(positions, vec![Pos::new(1, 1), Pos::new(5, 1)]);
        assert_eq!(candidates[1].first_step, Direction::Right);
    }

    #[test]
    fn dangerous_hostiles_block_the_agent_but_not_threat_probes() {
        let mut state = state("#######\n#P_G_.#\n#######");
        let origin = state.agent().pos();
        let hostile = first_hostile(&state);
        assert!(!OPEN.agent_can_enter(&state, Pos::new(3, 1)));
        assert_eq!(nearest_target_distance(&state, origin, TileKind::Collectible, OPEN), None);
        assert_eq!(
            nearest_tile_step(&state, origin, TileKind::Collectible, OPEN, |_| 0),
            Direction::Stay
        );
        assert_eq!(min_distance_to_danger(&state, origin, OPEN), Some(2));

        state.activate_power(10);
        assert!(state.hostile(hostile).expect("hostile").is_eatable());
        assert!(OPEN.agent_can_enter(&state, Pos::new(3, 1)));
        assert_eq!(nearest_target_distance(&state, origin, TileKind::Collectible, OPEN), Some(4));
        assert_eq!(min_distance_to_danger(&state, origin, OPEN), None, "eatable is not a threat");
    }

    #[test]
    fn threat_distance_respects_walls_and_power_block() {
        let state = state(
            "#######\n\
             #P#_G_#\n\
             #__o__#\n\
             #######",
        );
        let origin = state.agent().pos();
        assert_eq!(min_distance_to_danger(&state, origin, OPEN), Some(5));
        assert_eq!(min_distance_to_danger(&state, origin, NO_POWER), None);
        assert_eq!(bfs_distance(state.grid(), origin, origin, NO_POWER), Some(0));
    }

    #[test]
    fn exits_count_passable_neighbors() {
        let state = state("#####\n#_._#\n#_P_#\n#####");
        let origin = state.agent().pos();
        assert_eq!(exit_count(&state, origin, OPEN), 3);
        assert_eq!(exit_count(&state, Pos::new(1, 2), OPEN), 2);
    }
}
