//! Movement domain: the pure transition function of the locomotion FSM.

use bevy::prelude::*;

use crate::movement::CharacterState;

/// Godot-style `is_zero_approx` tolerance.
const ZERO_EPSILON: f32 = 0.00001;

/// Consistent snapshot of everything a transition decision reads.
///
/// Taken once at the start of a tick, before any side effect runs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Senses {
    pub on_floor: bool,
    pub on_wall: bool,
    pub wall_normal: Vec2,
    pub hand_hit: bool,
    pub foot_hit: bool,
    /// Screen space, negative y is up.
    pub velocity: Vec2,
    pub input_axis: f32,
    pub coyote_remaining: f32,
    pub jump_buffer_remaining: f32,
    pub animation_playing: bool,
}

impl Senses {
    pub fn can_jump(&self) -> bool {
        self.on_floor || self.coyote_remaining > 0.0
    }

    pub fn jump_requested(&self) -> bool {
        self.can_jump() && self.jump_buffer_remaining > 0.0
    }

    pub fn jump_buffered(&self) -> bool {
        self.jump_buffer_remaining > 0.0
    }

    /// No horizontal input and no horizontal motion.
    pub fn is_idle(&self) -> bool {
        self.input_axis.abs() < ZERO_EPSILON && self.velocity.x.abs() < ZERO_EPSILON
    }

    pub fn past_apex(&self) -> bool {
        self.velocity.y >= 0.0
    }

    pub fn can_wall_slide(&self) -> bool {
        !self.on_floor && self.on_wall && self.hand_hit && self.foot_hit
    }
}

/// Decide the state for this tick. Returns `state` itself when nothing fires.
pub fn next_state(state: CharacterState, senses: &Senses) -> CharacterState {
    // The wall rule outranks the generic jump so a buffered press off a wall kicks away from it.
    if state == CharacterState::WallSliding && !senses.on_floor && senses.jump_buffered() {
        return CharacterState::WallJumping;
    }

    if senses.jump_requested() {
        return CharacterState::Jumping;
    }

    match state {
        CharacterState::Idle => {
            if !senses.on_floor {
                return CharacterState::Falling;
            }
            if !senses.is_idle() {
                return CharacterState::Running;
            }
        }
        CharacterState::Running => {
            if !senses.on_floor {
                return CharacterState::Falling;
            }
            if senses.is_idle() {
                return CharacterState::Idle;
            }
        }
        CharacterState::Jumping | CharacterState::WallJumping => {
            if senses.past_apex() {
                return CharacterState::Falling;
            }
        }
        CharacterState::Falling => {
            if senses.on_floor {
                return CharacterState::Landing;
            }
            if senses.can_wall_slide() {
                return CharacterState::WallSliding;
            }
        }
        CharacterState::Landing => {
            if !senses.animation_playing {
                return CharacterState::Idle;
            }
        }
        CharacterState::WallSliding => {
            if senses.on_floor {
                return CharacterState::Idle;
            }
            if !senses.on_wall {
                return CharacterState::Falling;
            }
        }
    }

    state
}
