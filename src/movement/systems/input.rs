//! Movement domain: input sampling for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AvianBody, BodyContacts, CharacterController, MovementInput, Player};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis = x;
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_just_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
}

/// Jump edges are handled as they arrive, independent of the fixed tick.
pub(crate) fn apply_jump_input(
    input: Res<MovementInput>,
    mut query: Query<
        (&mut CharacterController, &mut LinearVelocity, &BodyContacts),
        With<Player>,
    >,
) {
    if !input.jump_just_pressed && !input.jump_just_released {
        return;
    }

    for (mut controller, mut velocity, contacts) in &mut query {
        if input.jump_just_pressed {
            controller.on_jump_pressed();
        }
        if input.jump_just_released {
            let mut body = AvianBody::new(&mut *velocity, contacts);
            controller.on_jump_released(&mut body);
        }
    }
}
