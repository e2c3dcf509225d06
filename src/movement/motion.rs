//! Movement domain: velocity integration helpers.

use bevy::prelude::*;

use crate::movement::{CharacterState, MovementTuning};

/// Move `from` toward `to` by at most `delta`, never overshooting.
pub fn move_toward(from: f32, to: f32, delta: f32) -> f32 {
    if (to - from).abs() <= delta {
        to
    } else {
        from + (to - from).signum() * delta
    }
}

pub fn horizontal_acceleration(tuning: &MovementTuning, on_floor: bool) -> f32 {
    if on_floor {
        tuning.floor_acceleration
    } else {
        tuning.air_acceleration
    }
}

/// Gravity applied this tick for `state`.
pub fn gravity_for(tuning: &MovementTuning, state: CharacterState, first_frame: bool) -> f32 {
    if first_frame && state.is_launch() {
        // Keep the launch impulse intact for the tick it is observed.
        return 0.0;
    }

    match state {
        CharacterState::WallSliding => tuning.gravity * tuning.wall_slide_gravity_scale,
        _ => tuning.gravity,
    }
}

/// New velocity after one tick of input steering and gravity.
pub fn integrate_velocity(
    tuning: &MovementTuning,
    velocity: Vec2,
    axis: f32,
    on_floor: bool,
    gravity: f32,
    dt: f32,
) -> Vec2 {
    let accel = horizontal_acceleration(tuning, on_floor);
    Vec2::new(
        move_toward(velocity.x, axis * tuning.run_speed, accel * dt),
        velocity.y + gravity * dt,
    )
}
