//! Core domain: camera setup and time scale application.

use bevy::prelude::*;

use crate::core::resources::TimeScaleStack;
use crate::movement::TimeScaleControl;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Push the requested scale into virtual time, which also paces fixed ticks.
pub(crate) fn apply_time_scale(stack: Res<TimeScaleStack>, mut time: ResMut<Time<Virtual>>) {
    if !stack.is_changed() {
        return;
    }

    let factor = stack.current();
    if (time.relative_speed() - factor).abs() > f32::EPSILON {
        debug!("Time scale -> {:.2} (depth {})", factor, stack.depth());
        time.set_relative_speed(factor);
    }
}
