//! Core domain: camera and process-wide services.

mod resources;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use resources::TimeScaleStack;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TimeScaleStack>()
            .add_systems(Startup, systems::setup_camera)
            .add_systems(PreUpdate, systems::apply_time_scale);
    }
}
