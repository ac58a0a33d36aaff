use crate::config::SimConfig;
use crate::game::Game;
use crate::game::hostile::HostilePolicy;
use crate::level::Level;
use crate::state::{GameState, Hostile};
use crate::types::{Direction, HostileId};

pub(crate) fn level(text: &str) -> Level {
    Level::parse("fixture", text).expect("fixture level must parse")
}

pub(crate) fn state(text: &str) -> GameState {
    level(text).into_state(3).expect("fixture spawns must be valid")
}

pub(crate) fn game(text: &str) -> Game {
    Game::new(level(text), SimConfig::headless()).expect("fixture game")
}

pub(crate) fn first_hostile(state: &GameState) -> HostileId {
    state.hostile_ids()[0]
}

/// Bordered `width` x `height` room with the agent spawn at `(1, 1)` and nothing else.
pub(crate) fn open_room(width: usize, height: usize) -> String {
    let mut rows = Vec::with_capacity(height);
    rows.push("#".repeat(width));
    for row in 1..height - 1 {
        let first = if row == height - 2 { 'P' } else { '_' };
        rows.push(format!("#{first}{}#", "_".repeat(width - 3)));
    }
    rows.push("#".repeat(width));
    rows.join("\n")
}

/// Hostile steering that always answers the same direction.
pub(crate) struct FixedHostile(pub Direction);

impl HostilePolicy for FixedHostile {
    fn choose(&mut self, _hostile: &Hostile, _state: &GameState) -> Direction {
        self.0
    }
}

pub(crate) fn game_with(text: &str, config: SimConfig, hostile: Direction) -> Game {
    Game::new(level(text), config).expect("fixture game").with_hostile_policy(FixedHostile(hostile))
}
