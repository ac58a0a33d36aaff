use std::collections::VecDeque;

use crate::types::{Direction, Pos};

/// Short-lived state carried between decisions.
#[derive(Clone, Debug)]
pub(super) struct Memory {
    tick: u64,
    last_pos: Option<Pos>,
    last_dir: Direction,
    stuck: u32,
    recent: VecDeque<Pos>,
    capacity: usize,
}

impl Memory {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            tick: 0,
            last_pos: None,
            last_dir: Direction::Stay,
            stuck: 0,
            recent: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Start of a decision: advance the clock, update the stuck counter, record `pos`.
    pub(super) fn observe(&mut self, pos: Pos) {
        self.tick += 1;
        if self.last_pos == Some(pos) {
            self.stuck += 1;
        } else {
            self.stuck = 0;
        }
        if self.capacity == 0 {
            return;
        }
        self.recent.push_back(pos);
        while self.recent.len() > self.capacity {
            self.recent.pop_front();
        }
    }

    pub(super) fn remember(&mut self, pos: Pos, dir: Direction) -> Direction {
        self.last_pos = Some(pos);
        self.last_dir = dir;
        dir
    }

    pub(super) fn is_recent(&self, pos: Pos) -> bool {
        self.recent.contains(&pos)
    }

    pub(super) fn tick(&self) -> u64 {
        self.tick
    }

    pub(super) fn last_dir(&self) -> Direction {
        self.last_dir
    }

    pub(super) fn stuck_ticks(&self) -> u32 {
        self.stuck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_positions_are_a_bounded_window() {
        let mut memory = Memory::new(2);
        memory.observe(Pos::new(1, 1));
        memory.observe(Pos::new(2, 1));
        memory.observe(Pos::new(3, 1));
        assert!(!memory.is_recent(Pos::new(1, 1)));
        assert!(memory.is_recent(Pos::new(2, 1)));
        assert!(memory.is_recent(Pos::new(3, 1)));
        assert_eq!(memory.tick(), 3);
    }

    #[test]
    fn stuck_counter_resets_on_movement() {
        let mut memory = Memory::new(4);
        let here = Pos::new(1, 1);
        memory.observe(here);
        memory.remember(here, Direction::Up);
        memory.observe(here);
        memory.remember(here, Direction::Up);
        memory.observe(here);
        assert_eq!(memory.stuck_ticks(), 2);
        memory.remember(here, Direction::Up);
        memory.observe(Pos::new(1, 2));
        assert_eq!(memory.stuck_ticks(), 0);
    }
}
