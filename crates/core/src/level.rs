//! Text level format and the built-in layouts.
//!
//! This module exists to turn authored glyph maps into a [`Grid`] plus spawn points and to
//! hand them to [`GameState`]. It does not own any runtime state.

mod builtin;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::grid::Grid;
use crate::state::GameState;
use crate::types::{Pos, TileKind};

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level has no tiles")]
    EmptyGrid,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("unknown glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph { glyph: char, row: usize, column: usize },

    #[error("level has no agent spawn")]
    MissingAgentSpawn,

    #[error("second agent spawn at {pos:?}")]
    DuplicateAgentSpawn { pos: Pos },

    #[error("{entity} spawn {pos:?} is out of bounds")]
    SpawnOutOfBounds { entity: &'static str, pos: Pos },

    #[error("{entity} spawn {pos:?} is a wall")]
    SpawnOnWall { entity: &'static str, pos: Pos },

    #[error("failed to read level {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown built-in level {0:?} (expected one of small, medium, large)")]
    UnknownBuiltin(String),
}

#[derive(Clone, Debug)]
pub struct Level {
    name: String,
    grid: Grid,
    agent_spawn: Pos,
    hostile_spawns: Vec<Pos>,
}

impl Level {
    pub fn new(
        name: impl Into<String>,
        grid: Grid,
        agent_spawn: Pos,
        hostile_spawns: Vec<Pos>,
    ) -> Self {
        Self { name: name.into(), grid, agent_spawn, hostile_spawns }
    }

    /// Parses a glyph map. The first text row is the top of the board (highest `y`).
    ///
    /// `#` wall, `.` collectible, `o` power collectible, space or `_` empty,
    /// `P` agent spawn and `G` hostile spawn (both on empty tiles). Hostile spawns keep
    /// scan order: top row first, left to right.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, LevelError> {
        let lines: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        let height = lines.len();
        if height == 0 {
            return Err(LevelError::EmptyGrid);
        }

        let mut rows = vec![Vec::new(); height];
        let mut agent_spawn = None;
        let mut hostile_spawns = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let y = (height - 1 - row) as i32;
            let cells = &mut rows[height - 1 - row];
            for (column, glyph) in line.chars().enumerate() {
                let pos = Pos::new(column as i32, y);
                let tile = match glyph {
                    '#' => TileKind::Wall,
                    '.' => TileKind::Collectible,
                    'o' => TileKind::PowerCollectible,
                    ' ' | '_' => TileKind::Empty,
                    'P' => {
                        if agent_spawn.replace(pos).is_some() {
                            return Err(LevelError::DuplicateAgentSpawn { pos });
                        }
                        TileKind::Empty
                    }
                    'G' => {
                        hostile_spawns.push(pos);
                        TileKind::Empty
                    }
                    other => return Err(LevelError::UnknownGlyph { glyph: other, row, column }),
                };
                cells.push(tile);
            }
        }

        let grid = Grid::from_rows(rows).map_err(|err| match err {
            // Report ragged rows in text order rather than y order.
            LevelError::RaggedRow { row, expected, found } => {
                LevelError::RaggedRow { row: height - 1 - row, expected, found }
            }
            other => other,
        })?;
        let agent_spawn = agent_spawn.ok_or(LevelError::MissingAgentSpawn)?;
        Ok(Self::new(name, grid, agent_spawn, hostile_spawns))
    }

    pub fn builtin(name: &str) -> Result<Self, LevelError> {
        let text =
            builtin::text(name).ok_or_else(|| LevelError::UnknownBuiltin(name.to_owned()))?;
        Self::parse(name, text)
    }

    pub fn builtin_names() -> &'static [&'static str] {
        &builtin::NAMES
    }

    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let text = fs::read_to_string(path)
            .map_err(|source| LevelError::Io { path: path.to_path_buf(), source })?;
        let name = path.file_stem().map_or_else(
            || path.display().to_string(),
            |stem| stem.to_string_lossy().into_owned(),
        );
        Self::parse(name, &text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent_spawn(&self) -> Pos {
        self.agent_spawn
    }

    pub fn hostile_spawns(&self) -> &[Pos] {
        &self.hostile_spawns
    }

    /// Builds the live state: agent first, then hostiles in spawn order.
    pub fn into_state(self, lives: u32) -> Result<GameState, LevelError> {
        let mut state = GameState::new(self.grid, self.agent_spawn, lives)?;
        for spawn in self.hostile_spawns {
            state.add_hostile(spawn)?;
        }
        Ok(state)
    }
}
