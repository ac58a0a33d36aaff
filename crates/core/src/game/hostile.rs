//! Local movement rules for hostiles.
//! This module exists so hostile steering can be swapped or seeded in tests.
//! It does not apply moves or resolve collisions; the engine does both.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::config::HostileConfig;
use crate::state::{GameState, Hostile};
use crate::types::{Direction, Pos};

/// Picks one direction per tick for a single hostile.
pub trait HostilePolicy {
    fn choose(&mut self, hostile: &Hostile, state: &GameState) -> Direction;
}

/// Default steering: keep going while possible, avoid turning back, and lean weakly
/// toward the agent at intersections.
#[derive(Clone, Debug)]
pub struct Wander {
    rng: ChaCha8Rng,
    weights: HostileConfig,
}

impl Wander {
    pub fn new(seed: u64, weights: HostileConfig) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), weights }
    }

    fn draw(&mut self, options: &[(Direction, u32)]) -> Direction {
        let total: u64 = options.iter().map(|(_, weight)| u64::from(*weight)).sum();
        if total == 0 {
            return options.first().map_or(Direction::Stay, |(dir, _)| *dir);
        }
        let mut roll = self.rng.next_u64() % total;
        for (dir, weight) in options {
            let weight = u64::from(*weight);
            if roll < weight {
                return *dir;
            }
            roll -= weight;
        }
        Direction::Stay
    }
}

impl HostilePolicy for Wander {
    fn choose(&mut self, hostile: &Hostile, state: &GameState) -> Direction {
        let mut legal = legal_moves(state, hostile.pos());
        match legal.as_slice() {
            [] => return Direction::Stay,
            [only] => return *only,
            _ => {}
        }
        if legal.contains(&hostile.dir()) {
            return hostile.dir();
        }
        let reverse = hostile.dir().reverse();
        if reverse != Direction::Stay && legal.len() > 1 {
            legal.retain(|dir| *dir != reverse);
        }

        let target = state.agent().pos();
        let closest =
            legal.iter().copied().min_by_key(|dir| manhattan(hostile.pos().step(*dir), target));
        let options: Vec<(Direction, u32)> = legal
            .iter()
            .map(|dir| {
                let bonus = if Some(*dir) == closest { self.weights.pursuit_bonus } else { 0 };
                (*dir, self.weights.base_weight + bonus)
            })
            .collect();
        self.draw(&options)
    }
}

/// Non-wall neighbors in hostile enumeration order.
pub fn legal_moves(state: &GameState, from: Pos) -> Vec<Direction> {
    Direction::HOSTILE_ORDER
        .into_iter()
        .filter(|dir| !state.grid().is_wall(from.step(*dir)))
        .collect()
}

fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{first_hostile, open_room, state};

    fn wander(seed: u64) -> Wander {
        Wander::new(seed, HostileConfig::default())
    }

    #[test]
    fn boxed_in_hostile_stays() {
        let state = state("#####\n#P#G#\n#####");
        let hostile = state.hostile(first_hostile(&state)).expect("hostile");
        assert_eq!(wander(1).choose(hostile, &state), Direction::Stay);
    }

    #[test]
    fn single_exit_is_taken() {
        let state = state("#####\n#P_G#\n#####");
        let hostile = state.hostile(first_hostile(&state)).expect("hostile");
        for seed in 0..8 {
            assert_eq!(wander(seed).choose(hostile, &state), Direction::Left);
        }
    }

    #[test]
    fn current_heading_is_kept_while_legal() {
        let mut state = state("#######\n#_____#\n#P_G__#\n#_____#\n#######");
        let id = first_hostile(&state);
        state.place_hostile(id, Pos::new(3, 2), Direction::Down);
        let hostile = state.hostile(id).expect("hostile");
        for seed in 0..8 {
            assert_eq!(wander(seed).choose(hostile, &state), Direction::Down);
        }
    }

    #[test]
    fn reverse_is_avoided_at_a_blocked_turn() {
        // Heading Right into a wall: Up and Down remain, Left would reverse.
        let mut state = state("#####\n#G_##\n#P_##\n#__##\n#####");
        let id = first_hostile(&state);
        state.place_hostile(id, Pos::new(2, 2), Direction::Right);
        let hostile = state.hostile(id).expect("hostile");
        for seed in 0..32 {
            let dir = wander(seed).choose(hostile, &state);
            assert!(matches!(dir, Direction::Up | Direction::Down), "seed {seed} chose {dir:?}");
        }
    }

    #[test]
    fn same_seed_replays_the_same_choices() {
        let mut state = state(&open_room(9, 9));
        let id = state.add_hostile(Pos::new(4, 4)).expect("hostile");
        let hostile = state.hostile(id).expect("hostile");
        let mut a = wander(7);
        let mut b = wander(7);
        let first: Vec<Direction> = (0..16).map(|_| a.choose(hostile, &state)).collect();
        let second: Vec<Direction> = (0..16).map(|_| b.choose(hostile, &state)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn pursuit_bias_shifts_the_draw_toward_the_agent() {
        let mut state = state(&open_room(9, 9));
        let id = state.add_hostile(Pos::new(4, 4)).expect("hostile");
        let hostile = state.hostile(id).expect("hostile");
        let weights = HostileConfig { base_weight: 0, pursuit_bonus: 1 };
        let mut policy = Wander::new(3, weights);
        // Agent at (1,1): Left and Down both close in; Down is enumerated first.
        for _ in 0..8 {
            assert_eq!(policy.choose(hostile, &state), Direction::Down);
        }
    }
}
