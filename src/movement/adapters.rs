//! Movement domain: avian2d-backed implementations of the collaborator traits.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{BodyContacts, PhysicsBody, RayProbe, SurfaceProbe};

/// Physics body view over an avian2d dynamic body for one call.
///
/// avian2d works in y-up world space; the controller works in screen space, so
/// the vertical axis is flipped at this boundary.
pub struct AvianBody<'a> {
    velocity: &'a mut LinearVelocity,
    contacts: &'a BodyContacts,
}

impl<'a> AvianBody<'a> {
    pub fn new(velocity: &'a mut LinearVelocity, contacts: &'a BodyContacts) -> Self {
        Self { velocity, contacts }
    }
}

impl PhysicsBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        Vec2::new(self.velocity.x, -self.velocity.y)
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.x = velocity.x;
        self.velocity.y = -velocity.y;
    }

    fn is_on_floor(&self) -> bool {
        self.contacts.on_floor
    }

    fn is_on_wall(&self) -> bool {
        self.contacts.on_wall
    }

    fn wall_normal(&self) -> Vec2 {
        Vec2::new(self.contacts.wall_normal.x, -self.contacts.wall_normal.y)
    }

    fn move_and_resolve(&mut self, _dt: f32) {
        // avian2d integrates LinearVelocity and resolves contacts in its own fixed step.
    }
}

impl SurfaceProbe for RayProbe {
    fn is_colliding(&self) -> bool {
        self.hit
    }
}
