//! Debug domain: state for the locomotion overlay.

use bevy::prelude::*;

use crate::movement::CharacterState;
use crate::sprites::AnimationClip;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the FSM info overlay
    pub show_info: bool,
    /// Most recent transition, newest last
    pub recent_transitions: Vec<(CharacterState, CharacterState)>,
    /// Last one-shot clip that finished
    pub last_finished_clip: Option<AnimationClip>,
}

impl DebugState {
    pub const MAX_RECENT: usize = 6;

    pub fn record_transition(&mut self, from: CharacterState, to: CharacterState) {
        self.recent_transitions.push((from, to));
        if self.recent_transitions.len() > Self::MAX_RECENT {
            self.recent_transitions.remove(0);
        }
    }
}
