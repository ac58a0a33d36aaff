use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct HostileId;
}

/// Grid coordinate. `y` grows upward, so `Up` is `y + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Stay,
}

impl Direction {
    /// Enumeration order used by every agent-side search and tie-break.
    pub const POLICY_ORDER: [Direction; 4] =
        [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    /// Enumeration order used when a hostile lists its neighbors.
    pub const HOSTILE_ORDER: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Stay => (0, 0),
        }
    }

    /// Opposite heading; `Stay` has no reverse and maps to itself.
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Stay => Direction::Stay,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Empty,
    Collectible,
    PowerCollectible,
}

impl TileKind {
    /// Numeric tile code exposed to adapters: 0 empty, 1 wall, 2 collectible, 3 power.
    pub const fn code(self) -> u8 {
        match self {
            TileKind::Empty => 0,
            TileKind::Wall => 1,
            TileKind::Collectible => 2,
            TileKind::PowerCollectible => 3,
        }
    }

    pub const fn is_collectible(self) -> bool {
        matches!(self, TileKind::Collectible | TileKind::PowerCollectible)
    }
}

/// What the agent picked up when entering a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pickup {
    Pellet,
    PowerPellet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Every collectible was consumed.
    Cleared,
    /// The agent ran out of lives.
    Defeated,
    /// The tick safety bound stopped the run before a natural end.
    Halted,
}

/// Sub-steps of a single tick, in execution order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickPhase {
    #[default]
    Idle,
    AgentMoving,
    CollisionCheck1,
    HostilesMoving,
    CollisionCheck2,
    PowerTick,
    TerminationCheck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    HostileEaten { hostile: HostileId },
    LifeLost { hostile: HostileId, lives_left: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceStopReason {
    Finished(RunOutcome),
    BudgetExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceResult {
    pub simulated_ticks: u32,
    pub stop_reason: AdvanceStopReason,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    PelletEaten { pos: Pos },
    PowerPelletEaten { pos: Pos, power_ticks: u32 },
    PowerExpired,
    HostileEaten { hostile: HostileId },
    LifeLost { lives_left: u32 },
    Finished { outcome: RunOutcome, tick: u64 },
}
