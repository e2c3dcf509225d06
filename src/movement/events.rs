//! Movement domain: messages emitted by the locomotion FSM.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::CharacterState;

/// Message fired when a character's FSM changes state
#[derive(Debug, Clone, Copy)]
pub struct CharacterStateChanged {
    pub entity: Entity,
    pub from: CharacterState,
    pub to: CharacterState,
}

impl Message for CharacterStateChanged {}
