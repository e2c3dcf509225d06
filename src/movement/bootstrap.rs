//! Movement domain: player bootstrap from loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    BodyContacts, CharacterController, GameLayer, MovementTuning, Player, StateMachine,
    WallProbes,
};
use crate::sprites::AnimationController;

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player character with every collaborator its state machine needs.
/// Runs after tuning has loaded; the machine itself starts on a later tick.
pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    info!(
        "Spawning player: run_speed={}, jump_speed={}, coyote={}s, buffer={}s",
        tuning.run_speed, tuning.jump_speed, tuning.coyote_time, tuning.jump_buffer_time
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            CharacterController::new(tuning.clone()),
            StateMachine::default(),
            BodyContacts::default(),
            WallProbes::for_half_height(PLAYER_SIZE.y * 0.5),
        ),
        // Rendering
        (
            AnimationController::default(),
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(0.0, -100.0, 0.0),
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity comes from the motion model
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
