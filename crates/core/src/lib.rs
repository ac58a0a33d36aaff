pub mod autopilot;
pub mod config;
pub mod game;
pub mod grid;
pub mod level;
pub mod pathfinding;
pub mod provider;
pub mod render;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_support;

pub use autopilot::{Autopilot, Mode};
pub use config::{ConfigError, HostileConfig, PolicyConfig, Rewards, SimConfig};
pub use game::Game;
pub use game::hostile::{HostilePolicy, Wander};
pub use grid::Grid;
pub use level::{Level, LevelError};
pub use provider::{DirectionProvider, Scripted, Toggle};
pub use render::{NullRenderer, Renderer, TextRenderer};
pub use session::{RunSummary, Session};
pub use snapshot::{SNAPSHOT_VERSION, Snapshot};
pub use state::{Agent, GameState, Hostile};
pub use types::*;
