//! Movement domain: collaborator contracts the controller drives.
//!
//! The controller never looks these up itself. Callers hand it a [`Rig`]
//! borrowing every collaborator for the duration of one call.

use bevy::prelude::*;

use crate::sprites::AnimationClip;

/// Kinematic body owning velocity and collision resolution.
///
/// Velocity is in screen space: negative y is up.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn is_on_floor(&self) -> bool;
    fn is_on_wall(&self) -> bool;
    /// Points away from the touched wall.
    fn wall_normal(&self) -> Vec2;
    /// Apply the current velocity and resolve collisions.
    fn move_and_resolve(&mut self, dt: f32);
}

pub trait SurfaceProbe {
    fn is_colliding(&self) -> bool;
}

pub trait AnimationChannel {
    /// Start `clip` from its first frame.
    fn play(&mut self, clip: AnimationClip);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// Process-wide time progression, scoped by push/pop.
pub trait TimeScaleControl {
    fn push(&mut self, factor: f32);
    fn pop(&mut self);
    fn current(&self) -> f32;
}

/// Borrowed collaborators of one character for one call.
pub struct Rig<'a> {
    pub body: &'a mut dyn PhysicsBody,
    pub hand_probe: &'a dyn SurfaceProbe,
    pub foot_probe: &'a dyn SurfaceProbe,
    pub animation: &'a mut dyn AnimationChannel,
    pub time_scale: &'a mut dyn TimeScaleControl,
}

/// A character entity is missing a collaborator the controller needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RigError {
    MissingCollaborator {
        entity: Entity,
        collaborator: &'static str,
    },
}

impl std::fmt::Display for RigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RigError::MissingCollaborator {
                entity,
                collaborator,
            } => write!(
                f,
                "Character {:?} has no {}; the state machine cannot start",
                entity, collaborator
            ),
        }
    }
}

impl std::error::Error for RigError {}
