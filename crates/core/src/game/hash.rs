//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation control code.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.config.seed);
        hasher.write_u64(self.tick);
        hasher.write_u32(self.state.score());
        hasher.write_u32(self.state.lives());
        hasher.write_u32(self.state.power_ticks());
        hasher.write_u8(u8::from(self.state.is_done()));
        let agent = self.state.agent();
        hasher.write_i32(agent.pos().x);
        hasher.write_i32(agent.pos().y);
        hasher.write_u8(direction_code(agent.dir()));
        for (_, hostile) in self.state.hostiles() {
            hasher.write_i32(hostile.pos().x);
            hasher.write_i32(hostile.pos().y);
            hasher.write_u8(direction_code(hostile.dir()));
            hasher.write_u8(u8::from(hostile.is_eatable()));
        }
        let grid = self.state.grid();
        for pos in grid.positions() {
            hasher.write_u8(grid.tile_at(pos).code());
        }
        hasher.finish()
    }
}

fn direction_code(dir: Direction) -> u8 {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
        Direction::Stay => 4,
    }
}
