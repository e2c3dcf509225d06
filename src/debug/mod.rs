//! Debug overlay for tuning the locomotion FSM (dev-tools feature).
//!
//! Features:
//! - F1 / backtick toggles the overlay
//! - Current state, time in state, velocity and contacts
//! - Coyote and jump-buffer timers, global time scale
//! - Recent transitions and finished one-shot clips

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use state::DebugState;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                systems::toggle_debug_overlay,
                systems::record_fsm_messages,
                systems::update_debug_info_overlay,
            )
                .chain(),
        );
    }
}
