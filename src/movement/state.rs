//! Movement domain: the closed set of locomotion states.

use crate::sprites::AnimationClip;

/// Locomotion state of a character. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterState {
    #[default]
    Idle,
    Running,
    Jumping,
    Falling,
    Landing,
    WallSliding,
    WallJumping,
}

impl CharacterState {
    pub const ALL: [CharacterState; 7] = [
        CharacterState::Idle,
        CharacterState::Running,
        CharacterState::Jumping,
        CharacterState::Falling,
        CharacterState::Landing,
        CharacterState::WallSliding,
        CharacterState::WallJumping,
    ];

    /// States in which the character stands on a floor.
    pub fn is_grounded(self) -> bool {
        matches!(
            self,
            CharacterState::Idle | CharacterState::Running | CharacterState::Landing
        )
    }

    /// States entered through a launch impulse; gravity is skipped on their first tick.
    pub fn is_launch(self) -> bool {
        matches!(self, CharacterState::Jumping | CharacterState::WallJumping)
    }

    pub fn clip(self) -> AnimationClip {
        match self {
            CharacterState::Idle => AnimationClip::Idle,
            CharacterState::Running => AnimationClip::Running,
            CharacterState::Jumping => AnimationClip::Jump,
            CharacterState::Falling => AnimationClip::Fall,
            CharacterState::Landing => AnimationClip::Land,
            CharacterState::WallSliding => AnimationClip::WallSlide,
            CharacterState::WallJumping => AnimationClip::WallJump,
        }
    }
}

/// A state change performed by the frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub from: CharacterState,
    pub to: CharacterState,
}
