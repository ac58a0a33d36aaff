//! Fallbacks and smoothing applied around the main decision.

use super::*;

impl Autopilot {
    /// Right, then Left, else `Stay` so the regular rules take over.
    pub(super) fn opening_move(&self, view: &View<'_>) -> Direction {
        [Direction::Right, Direction::Left]
            .into_iter()
            .find(|dir| view.can_step(*dir))
            .unwrap_or(Direction::Stay)
    }

    /// Keep going if possible, otherwise the first non-reversing step, otherwise anything.
    pub(super) fn any_legal_move(&self, view: &View<'_>) -> Direction {
        let last = self.memory.last_dir();
        if view.can_step(last) {
            return last;
        }
        let reverse = last.reverse();
        Direction::POLICY_ORDER
            .into_iter()
            .find(|dir| *dir != reverse && view.can_step(*dir))
            .or_else(|| Direction::POLICY_ORDER.into_iter().find(|dir| view.can_step(*dir)))
            .unwrap_or(Direction::Stay)
    }

    /// Swap a step into a recently visited cell for one that leaves the loop, if any.
    pub(super) fn break_loop(&self, view: &View<'_>, chosen: Direction) -> Direction {
        if !self.memory.is_recent(view.origin.step(chosen)) {
            return chosen;
        }
        Direction::POLICY_ORDER
            .into_iter()
            .filter(|dir| *dir != chosen && view.can_step(*dir))
            .find(|dir| !self.memory.is_recent(view.origin.step(*dir)))
            .unwrap_or(chosen)
    }

    /// Anything but `avoid`, preferring not to reverse.
    pub(super) fn force_different(&self, view: &View<'_>, avoid: Direction) -> Direction {
        let reverse = self.memory.last_dir().reverse();
        Direction::POLICY_ORDER
            .into_iter()
            .find(|dir| *dir != avoid && *dir != reverse && view.can_step(*dir))
            .or_else(|| {
                Direction::POLICY_ORDER
                    .into_iter()
                    .find(|dir| *dir != avoid && view.can_step(*dir))
            })
            .unwrap_or(avoid)
    }

    pub(super) fn apply_no_reverse(&self, view: &View<'_>, chosen: Direction) -> Direction {
        let last = self.memory.last_dir();
        if last == Direction::Stay || chosen != last.reverse() {
            return chosen;
        }
        Direction::POLICY_ORDER
            .into_iter()
            .find(|dir| *dir != chosen && view.can_step(*dir))
            .unwrap_or(chosen)
    }
}
