//! Session tunables. Every field has a default so a partial TOML file is valid.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub lives: u32,
    /// Ticks granted by a power collectible.
    pub power_duration: u32,
    /// Safety bound; a session that reaches it is halted.
    pub max_ticks: u64,
    /// Pause between ticks in a paced session. Zero runs headless.
    pub tick_delay_ms: u64,
    pub cell_size_px: u32,
    pub seed: u64,
    pub rewards: Rewards,
    pub policy: PolicyConfig,
    pub hostile: HostileConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            lives: 3,
            power_duration: 80,
            max_ticks: 20_000,
            tick_delay_ms: 80,
            cell_size_px: 32,
            seed: 0,
            rewards: Rewards::default(),
            policy: PolicyConfig::default(),
            hostile: HostileConfig::default(),
        }
    }
}

impl SimConfig {
    /// Defaults without pacing, for tests and batch runs.
    pub fn headless() -> Self {
        Self { tick_delay_ms: 0, ..Self::default() }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rewards {
    pub pellet: u32,
    pub power_pellet: u32,
    pub hostile: u32,
}

impl Default for Rewards {
    fn default() -> Self {
        Self { pellet: 10, power_pellet: 50, hostile: 200 }
    }
}

/// Knobs for the autopilot. Distances are in BFS steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Escape when the nearest dangerous hostile is at most this far.
    pub danger_trigger: u32,
    /// Escape refuses to step this close to a hostile unless already that close.
    pub hard_avoid: u32,
    /// Take a power collectible this close regardless of the nearest dot.
    pub power_take_if_dist_le: u32,
    /// Prefer power collectibles while a hostile is at most this far.
    pub power_prefer_if_danger_le: u32,
    /// Ticks during which the agent just tries Right, then Left.
    pub opening_steps: u64,
    /// Power collectibles are treated as walls until this tick.
    pub no_power_first_ticks: u64,
    /// Recently visited positions penalised by the scorers.
    pub loop_memory: usize,
    /// Ticks without moving before a different direction is forced.
    pub stuck_ticks: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            danger_trigger: 7,
            hard_avoid: 2,
            power_take_if_dist_le: 2,
            power_prefer_if_danger_le: 5,
            opening_steps: 25,
            no_power_first_ticks: 50,
            loop_memory: 12,
            stuck_ticks: 3,
        }
    }
}

/// Weights for the hostile's random choice at an intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostileConfig {
    pub base_weight: u32,
    /// Extra weight for the neighbor that closes the most distance to the agent.
    pub pursuit_bonus: u32,
}

impl Default for HostileConfig {
    fn default() -> Self {
        Self { base_weight: 3, pursuit_bonus: 2 }
    }
}
