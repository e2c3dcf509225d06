//! Content domain: data-driven tuning loaded at startup.

mod loader;
mod validation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::Path;

use loader::load_movement_tuning;
use validation::validate_tuning;

use crate::movement::MovementTuning;

pub const MOVEMENT_TUNING_PATH: &str = "assets/data/movement.ron";

/// System sets for content loading
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentSet {
    Load,
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_systems(Startup, load_tuning.in_set(ContentSet::Load));
    }
}

/// Replace the default tuning with the on-disk file when it loads and validates.
fn load_tuning(mut tuning: ResMut<MovementTuning>) {
    let loaded = match load_movement_tuning(Path::new(MOVEMENT_TUNING_PATH)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            return;
        }
    };

    let errors = validate_tuning(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        warn!(
            "{} invalid tuning value(s) in {}; using default movement tuning",
            errors.len(),
            MOVEMENT_TUNING_PATH
        );
        return;
    }

    info!(
        "Loaded movement tuning: run={}, jump={} (height {:.0}), gravity={}",
        loaded.run_speed,
        loaded.jump_speed,
        loaded.single_jump_height(),
        loaded.gravity
    );
    *tuning = loaded;
}
