//! Agent/hostile contact rules.

use crate::config::Rewards;
use crate::state::GameState;
use crate::types::Collision;

/// Resolves the first hostile sharing the agent's tile, in registration order.
///
/// Only one contact is handled per call. Any other hostile on the same tile waits for the
/// next check.
pub(super) fn resolve(state: &mut GameState, rewards: &Rewards) -> Option<Collision> {
    let agent_pos = state.agent().pos();
    let (id, eatable) = state
        .hostiles()
        .find(|(_, hostile)| hostile.pos() == agent_pos)
        .map(|(id, hostile)| (id, hostile.is_eatable()))?;

    if eatable {
        state.add_score(rewards.hostile);
        state.respawn_hostile(id);
        return Some(Collision::HostileEaten { hostile: id });
    }

    let lives_left = state.lose_life();
    state.reset_positions();
    Some(Collision::LifeLost { hostile: id, lives_left })
}
