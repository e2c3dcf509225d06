//! Debug domain: tests for overlay bookkeeping.

use super::DebugState;
use crate::movement::CharacterState;

#[test]
fn test_recent_transitions_are_capped() {
    let mut state = DebugState::default();
    for _ in 0..(DebugState::MAX_RECENT + 3) {
        state.record_transition(CharacterState::Idle, CharacterState::Running);
    }
    state.record_transition(CharacterState::Running, CharacterState::Falling);

    assert_eq!(state.recent_transitions.len(), DebugState::MAX_RECENT);
    assert_eq!(
        state.recent_transitions.last(),
        Some(&(CharacterState::Running, CharacterState::Falling))
    );
}
