//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Locomotion constants. Loaded once at startup and never mutated afterwards.
///
/// Units are pixels and seconds in screen space (y grows downward).
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub run_speed: f32,
    pub jump_speed: f32,
    pub floor_acceleration: f32,
    /// Ten times the floor value: air control is crisp on purpose.
    pub air_acceleration: f32,
    pub gravity: f32,
    pub wall_jump_horizontal: f32,
    pub wall_jump_vertical: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Gravity multiplier while clinging to a wall.
    pub wall_slide_gravity_scale: f32,
    /// Global time scale for the duration of a wall jump.
    pub wall_jump_time_scale: f32,
    /// Fraction of `jump_speed` kept when the jump button is released early.
    pub jump_cut_ratio: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        let run_speed = 160.0;
        Self {
            run_speed,
            jump_speed: 350.0,
            floor_acceleration: run_speed / 0.2,
            air_acceleration: run_speed / 0.02,
            gravity: 980.0,
            wall_jump_horizontal: 400.0,
            wall_jump_vertical: 320.0,
            coyote_time: 0.15,
            jump_buffer_time: 0.1,
            wall_slide_gravity_scale: 1.0 / 3.0,
            wall_jump_time_scale: 0.3,
            jump_cut_ratio: 0.5,
        }
    }
}

impl MovementTuning {
    /// Height of a full jump: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_speed * self.jump_speed / (2.0 * self.gravity)
    }

    /// Upward speed kept after an early jump release.
    pub fn jump_cut_speed(&self) -> f32 {
        self.jump_speed * self.jump_cut_ratio
    }
}

/// Per-frame input snapshot, sampled in `Update`.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1].
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
}
