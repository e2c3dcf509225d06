//! Sprites module for character animation.
//!
//! This module handles:
//! - Clip definitions selected by the locomotion FSM
//! - Frame progression and completion messages
//! - Facing and placeholder tint on the sprite

pub mod animation;


use bevy::prelude::*;

pub use animation::*;
// Explicit re-export so this shadows `bevy::prelude::AnimationClip` from the glob above.
pub use animation::AnimationClip;

use crate::movement::{CharacterController, Facing};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationFinished>().add_systems(
            Update,
            (update_animation_frames, tint_by_clip, sync_sprite_facing),
        );
    }
}

/// Mirror the sprite to the controller's facing.
fn sync_sprite_facing(mut query: Query<(&CharacterController, &mut Sprite)>) {
    for (controller, mut sprite) in &mut query {
        let flip = controller.facing() == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
