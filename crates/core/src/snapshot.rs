//! Read-only, versioned view of a running game for external harnesses.
//! This module exists so adapters depend on a fixed data shape instead of engine internals.
//! It does not accept input; drive the game with [`Game::step`].

use serde::Serialize;

use crate::game::Game;
use crate::types::{Direction, Pos, RunOutcome};

/// Bumped whenever a field is added, removed or changes meaning.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub version: u32,
    pub tick: u64,
    pub score: u32,
    pub lives: u32,
    /// Ticks of power mode left; hostiles are eatable while this is non-zero.
    pub power_ticks: u32,
    pub outcome: Option<RunOutcome>,
    pub agent: BodySnapshot,
    pub hostiles: Vec<HostileSnapshot>,
    /// Tile codes indexed as `grid[y][x]`, `y = 0` first.
    pub grid: Vec<Vec<u8>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BodySnapshot {
    pub pos: Pos,
    pub dir: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HostileSnapshot {
    pub pos: Pos,
    pub dir: Direction,
    pub eatable: bool,
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state();
        let grid = state.grid();
        let rows = (0..grid.height())
            .map(|y| {
                (0..grid.width())
                    .map(|x| grid.tile_at(Pos::new(x as i32, y as i32)).code())
                    .collect()
            })
            .collect();

        Snapshot {
            version: SNAPSHOT_VERSION,
            tick: self.current_tick(),
            score: state.score(),
            lives: state.lives(),
            power_ticks: state.power_ticks(),
            outcome: self.outcome(),
            agent: BodySnapshot { pos: state.agent().pos(), dir: state.agent().dir() },
            hostiles: state
                .hostiles()
                .map(|(_, hostile)| HostileSnapshot {
                    pos: hostile.pos(),
                    dir: hostile.dir(),
                    eatable: hostile.is_eatable(),
                })
                .collect(),
            grid: rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::game;

    #[test]
    fn snapshot_reports_codes_bottom_row_first() {
        let game = game("#####\n#P.o#\n#_G_#\n#####");
        let snapshot = game.snapshot();

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.lives, 3);
        assert_eq!(snapshot.outcome, None);
        assert_eq!(snapshot.agent, BodySnapshot { pos: Pos::new(1, 2), dir: Direction::Stay });
        assert_eq!(
            snapshot.hostiles,
            vec![HostileSnapshot { pos: Pos::new(2, 1), dir: Direction::Stay, eatable: false }]
        );
        let expected = vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 0, 0, 0, 1],
            vec![1, 0, 2, 3, 1],
            vec![1, 1, 1, 1, 1],
        ];
        assert_eq!(snapshot.grid, expected);
    }

    #[test]
    fn snapshot_follows_the_game() {
        let mut game = game("#####\n#P.o#\n#####");
        game.step(Some(Direction::Right));
        game.step(None);

        let snapshot = game.snapshot();
        assert_eq!(snapshot.tick, 2);
        assert_eq!(snapshot.score, 60);
        assert_eq!(snapshot.power_ticks, 79);
        assert_eq!(snapshot.outcome, Some(RunOutcome::Cleared));
        assert_eq!(snapshot.grid[1], vec![1, 0, 0, 0, 1]);
    }

    #[test]
    fn snapshot_serializes_with_named_fields() {
        let game = game("####\n#P.#\n####");
        let value = serde_json::to_value(game.snapshot()).expect("serialize");
        assert_eq!(value["version"], 1);
        assert_eq!(value["agent"]["pos"]["x"], 1);
        assert_eq!(value["agent"]["dir"], "Stay");
        assert_eq!(value["power_ticks"], 0);
    }
}
