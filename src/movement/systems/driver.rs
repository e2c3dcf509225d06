//! Movement domain: fixed-tick systems that start and drive the locomotion FSM.

use avian2d::prelude::*;
use bevy::ecs::error::BevyError;
use bevy::prelude::*;

use crate::core::TimeScaleStack;
use crate::movement::{
    AvianBody, BodyContacts, CharacterController, CharacterStateChanged, MovementInput, Player,
    Rig, RigError, StateMachine, WallProbes,
};
use crate::sprites::AnimationController;

fn require<T>(
    component: Option<T>,
    entity: Entity,
    collaborator: &'static str,
) -> Result<T, RigError> {
    component.ok_or(RigError::MissingCollaborator {
        entity,
        collaborator,
    })
}

/// Start machines one tick after their entity spawned, once siblings are in place.
///
/// A character without its collaborators is a setup bug and fails loudly here.
pub(crate) fn start_state_machines(
    mut time_scale: ResMut<TimeScaleStack>,
    mut query: Query<
        (
            Entity,
            &mut StateMachine,
            &mut CharacterController,
            Option<&mut LinearVelocity>,
            Option<&BodyContacts>,
            Option<&WallProbes>,
            Option<&mut AnimationController>,
        ),
        With<Player>,
    >,
) -> Result<(), BevyError> {
    for (entity, mut machine, mut controller, velocity, contacts, probes, animation) in &mut query
    {
        if machine.is_started() || machine.is_added() {
            continue;
        }

        let mut velocity = require(velocity, entity, "LinearVelocity")?;
        let contacts = require(contacts, entity, "BodyContacts")?;
        let probes = require(probes, entity, "WallProbes")?;
        let mut animation = require(animation, entity, "AnimationController")?;

        let mut body = AvianBody::new(&mut *velocity, contacts);
        let mut rig = Rig {
            body: &mut body,
            hand_probe: &probes.hand,
            foot_probe: &probes.foot,
            animation: &mut *animation,
            time_scale: &mut *time_scale,
        };
        machine.start(&mut controller, &mut rig);
        info!("Character {:?} state machine started in Idle", entity);
    }

    Ok(())
}

pub(crate) fn drive_state_machines(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut time_scale: ResMut<TimeScaleStack>,
    mut changes: MessageWriter<CharacterStateChanged>,
    mut query: Query<
        (
            Entity,
            &mut StateMachine,
            &mut CharacterController,
            &mut LinearVelocity,
            &BodyContacts,
            &WallProbes,
            &mut AnimationController,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut machine, mut controller, mut velocity, contacts, probes, mut animation) in
        &mut query
    {
        if !machine.is_started() {
            continue;
        }

        let mut body = AvianBody::new(&mut *velocity, contacts);
        let mut rig = Rig {
            body: &mut body,
            hand_probe: &probes.hand,
            foot_probe: &probes.foot,
            animation: &mut *animation,
            time_scale: &mut *time_scale,
        };

        if let Some(change) = machine.step(&mut controller, &mut rig, input.axis, dt) {
            debug!("Character {:?}: {:?} -> {:?}", entity, change.from, change.to);
            changes.write(CharacterStateChanged {
                entity,
                from: change.from,
                to: change.to,
            });
        }
    }
}
