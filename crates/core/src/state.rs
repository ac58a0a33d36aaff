use slotmap::SlotMap;

use crate::grid::Grid;
use crate::level::LevelError;
use crate::types::*;

/// Position and heading shared by the agent and every hostile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Body {
    pub pos: Pos,
    pub dir: Direction,
}

impl Body {
    fn at(pos: Pos) -> Self {
        Self { pos, dir: Direction::Stay }
    }
}

#[derive(Clone, Debug)]
pub struct Agent {
    body: Body,
    spawn: Pos,
    score: u32,
    lives: u32,
}

impl Agent {
    pub fn pos(&self) -> Pos {
        self.body.pos
    }

    pub fn dir(&self) -> Direction {
        self.body.dir
    }

    pub fn spawn(&self) -> Pos {
        self.spawn
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }
}

#[derive(Clone, Debug)]
pub struct Hostile {
    body: Body,
    spawn: Pos,
    eatable: bool,
}

impl Hostile {
    pub fn pos(&self) -> Pos {
        self.body.pos
    }

    pub fn dir(&self) -> Direction {
        self.body.dir
    }

    pub fn spawn(&self) -> Pos {
        self.spawn
    }

    pub fn is_eatable(&self) -> bool {
        self.eatable
    }

    pub fn is_dangerous(&self) -> bool {
        !self.eatable
    }
}

/// Everything that changes during a session. Mutation goes through the methods below so
/// the spawn, power and lives invariants are enforced in one place.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    agent: Agent,
    hostiles: SlotMap<HostileId, Hostile>,
    power_ticks: u32,
    done: bool,
}

impl GameState {
    pub fn new(grid: Grid, agent_spawn: Pos, lives: u32) -> Result<Self, LevelError> {
        validate_spawn(&grid, agent_spawn, "agent")?;
        Ok(Self {
            grid,
            agent: Agent { body: Body::at(agent_spawn), spawn: agent_spawn, score: 0, lives },
            hostiles: SlotMap::with_key(),
            power_ticks: 0,
            done: lives == 0,
        })
    }

    /// Registers a hostile and records its spawn for later resets.
    pub fn add_hostile(&mut self, spawn: Pos) -> Result<HostileId, LevelError> {
        validate_spawn(&self.grid, spawn, "hostile")?;
        let eatable = self.is_power_mode();
        Ok(self.hostiles.insert(Hostile { body: Body::at(spawn), spawn, eatable }))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn hostile(&self, id: HostileId) -> Option<&Hostile> {
        self.hostiles.get(id)
    }

    /// Hostiles in registration order.
    pub fn hostiles(&self) -> impl Iterator<Item = (HostileId, &Hostile)> + '_ {
        self.hostiles.iter()
    }

    pub fn hostile_ids(&self) -> Vec<HostileId> {
        self.hostiles.keys().collect()
    }

    pub fn hostile_count(&self) -> usize {
        self.hostiles.len()
    }

    pub fn is_danger_at(&self, pos: Pos) -> bool {
        self.hostiles.values().any(|hostile| hostile.is_dangerous() && hostile.pos() == pos)
    }

    pub fn score(&self) -> u32 {
        self.agent.score
    }

    pub fn lives(&self) -> u32 {
        self.agent.lives
    }

    pub fn power_ticks(&self) -> u32 {
        self.power_ticks
    }

    pub fn is_power_mode(&self) -> bool {
        self.power_ticks > 0
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Turns the agent toward `dir` and steps unless the destination is a wall.
    pub fn move_agent(&mut self, dir: Direction) -> bool {
        self.agent.body.dir = dir;
        let next = self.agent.pos().step(dir);
        if dir == Direction::Stay || self.grid.is_wall(next) {
            return false;
        }
        self.agent.body.pos = next;
        true
    }

    pub fn move_hostile(&mut self, id: HostileId, dir: Direction) -> bool {
        let Some(hostile) = self.hostiles.get_mut(id) else {
            return false;
        };
        hostile.body.dir = dir;
        let next = hostile.body.pos.step(dir);
        if dir == Direction::Stay || self.grid.is_wall(next) {
            return false;
        }
        hostile.body.pos = next;
        true
    }

    pub fn consume(&mut self, pos: Pos) -> Option<Pickup> {
        self.grid.consume(pos)
    }

    pub fn add_score(&mut self, delta: u32) {
        self.agent.score = self.agent.score.saturating_add(delta);
    }

    /// Removes one life and marks the session done when none remain.
    pub fn lose_life(&mut self) -> u32 {
        if self.done {
            return self.agent.lives;
        }
        self.agent.lives = self.agent.lives.saturating_sub(1);
        if self.agent.lives == 0 {
            self.done = true;
        }
        self.agent.lives
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Sends the agent and every hostile back to their spawns, facing `Stay`.
    pub fn reset_positions(&mut self) {
        if self.done {
            return;
        }
        self.agent.body = Body::at(self.agent.spawn);
        let eatable = self.is_power_mode();
        for hostile in self.hostiles.values_mut() {
            hostile.body = Body::at(hostile.spawn);
            hostile.eatable = eatable;
        }
    }

    pub fn respawn_hostile(&mut self, id: HostileId) {
        let eatable = self.is_power_mode();
        if let Some(hostile) = self.hostiles.get_mut(id) {
            hostile.body = Body::at(hostile.spawn);
            hostile.eatable = eatable;
        }
    }

    /// Starts or extends power mode. An active window is never shortened.
    pub fn activate_power(&mut self, ticks: u32) {
        if ticks == 0 {
            return;
        }
        self.power_ticks = self.power_ticks.max(ticks);
        for hostile in self.hostiles.values_mut() {
            hostile.eatable = true;
        }
    }

    /// Counts power mode down by one tick. Returns `true` on the tick it expires.
    pub fn tick_power(&mut self) -> bool {
        if self.power_ticks == 0 {
            return false;
        }
        self.power_ticks -= 1;
        if self.power_ticks > 0 {
            return false;
        }
        for hostile in self.hostiles.values_mut() {
            hostile.eatable = false;
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn place_agent(&mut self, pos: Pos) {
        self.agent.body.pos = pos;
    }

    #[cfg(test)]
    pub(crate) fn place_hostile(&mut self, id: HostileId, pos: Pos, dir: Direction) {
        if let Some(hostile) = self.hostiles.get_mut(id) {
            hostile.body = Body { pos, dir };
        }
    }
}

fn validate_spawn(grid: &Grid, pos: Pos, entity: &'static str) -> Result<(), LevelError> {
    if !grid.in_bounds(pos) {
        return Err(LevelError::SpawnOutOfBounds { entity, pos });
    }
    if grid.is_wall(pos) {
        return Err(LevelError::SpawnOnWall { entity, pos });
    }
    Ok(())
}
