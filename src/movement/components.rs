//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Contact flags of the character body, refreshed every fixed tick before the FSM runs.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct BodyContacts {
    pub on_floor: bool,
    pub on_wall: bool,
    /// Points away from the touched wall. Zero when not touching one.
    pub wall_normal: Vec2,
}

/// A short horizontal ray cast in the facing direction.
#[derive(Debug, Clone, Copy)]
pub struct RayProbe {
    /// Vertical offset from the body center, in world units (y up).
    pub offset_y: f32,
    /// Reach beyond the body's half width.
    pub reach: f32,
    pub hit: bool,
}

impl RayProbe {
    pub fn new(offset_y: f32, reach: f32) -> Self {
        Self {
            offset_y,
            reach,
            hit: false,
        }
    }
}

/// Hand-height and foot-height wall sensors.
#[derive(Component, Debug, Clone, Copy)]
pub struct WallProbes {
    pub hand: RayProbe,
    pub foot: RayProbe,
}

impl WallProbes {
    /// Probes placed near the top and bottom of a body with the given half height.
    pub fn for_half_height(half_height: f32) -> Self {
        Self {
            hand: RayProbe::new(half_height * 0.6, 4.0),
            foot: RayProbe::new(-half_height * 0.85, 4.0),
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
