//! Sources of agent directions for the tick loop.

use std::collections::VecDeque;

use crate::autopilot::Autopilot;
use crate::state::GameState;
use crate::types::Direction;

/// Supplies the agent's direction once per tick. `None` keeps the previous heading.
pub trait DirectionProvider {
    fn next_direction(&mut self, state: &GameState) -> Option<Direction>;
}

impl DirectionProvider for Autopilot {
    fn next_direction(&mut self, state: &GameState) -> Option<Direction> {
        Some(self.next_move(state))
    }
}

impl<F> DirectionProvider for F
where
    F: FnMut(&GameState) -> Option<Direction>,
{
    fn next_direction(&mut self, state: &GameState) -> Option<Direction> {
        self(state)
    }
}

/// Replays a fixed list of directions, then holds `Stay`.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    queue: VecDeque<Direction>,
}

impl Scripted {
    pub fn new(directions: impl IntoIterator<Item = Direction>) -> Self {
        Self { queue: directions.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DirectionProvider for Scripted {
    fn next_direction(&mut self, _state: &GameState) -> Option<Direction> {
        Some(self.queue.pop_front().unwrap_or(Direction::Stay))
    }
}

/// Switches between a manual source and an automatic one.
#[derive(Clone, Debug)]
pub struct Toggle<M, A> {
    manual: M,
    auto: A,
    auto_enabled: bool,
}

impl<M, A> Toggle<M, A> {
    pub fn new(manual: M, auto: A, auto_enabled: bool) -> Self {
        Self { manual, auto, auto_enabled }
    }

    /// Flips the active source and reports whether automatic control is now on.
    pub fn toggle(&mut self) -> bool {
        self.auto_enabled = !self.auto_enabled;
        self.auto_enabled
    }

    pub fn set_auto(&mut self, enabled: bool) {
        self.auto_enabled = enabled;
    }

    pub fn is_auto(&self) -> bool {
        self.auto_enabled
    }

    pub fn manual_mut(&mut self) -> &mut M {
        &mut self.manual
    }

    pub fn auto_mut(&mut self) -> &mut A {
        &mut self.auto
    }
}

impl<M, A> DirectionProvider for Toggle<M, A>
where
    M: DirectionProvider,
    A: DirectionProvider,
{
    fn next_direction(&mut self, state: &GameState) -> Option<Direction> {
        if self.auto_enabled {
            self.auto.next_direction(state)
        } else {
            self.manual.next_direction(state)
        }
    }
}
