//! Movement domain: the per-tick locomotion state machine and its Bevy wiring.
//!
//! The FSM core (`transitions`, `motion`, `controller`, `machine`) reaches its
//! collaborators only through the traits in `rig`; `adapters` backs them with
//! avian2d.

mod adapters;
mod bootstrap;
mod components;
mod controller;
mod events;
mod machine;
mod motion;
mod resources;
mod rig;
mod room;
mod state;
mod systems;
mod timer;
mod transitions;


use bevy::prelude::*;

pub use adapters::AvianBody;
pub use components::*;
pub use controller::CharacterController;
pub use events::CharacterStateChanged;
pub use machine::StateMachine;
pub use resources::{MovementInput, MovementTuning};
pub use rig::{AnimationChannel, PhysicsBody, Rig, RigError, SurfaceProbe, TimeScaleControl};
pub use state::{CharacterState, StateChange};
pub use timer::CountdownTimer;

use crate::content::ContentSet;

/// Ordering of the fixed-tick locomotion pipeline.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Refresh floor, wall and probe contacts.
    Sense,
    /// Start pending machines and run one FSM tick.
    Drive,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<CharacterStateChanged>()
            .configure_sets(FixedUpdate, (MovementSet::Sense, MovementSet::Drive).chain())
            .add_systems(
                Startup,
                (room::spawn_test_room, bootstrap::spawn_player).after(ContentSet::Load),
            )
            .add_systems(
                Update,
                (systems::read_input, systems::apply_jump_input).chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::detect_floor,
                    systems::detect_walls,
                    systems::detect_wall_probes,
                )
                    .chain()
                    .in_set(MovementSet::Sense),
            )
            .add_systems(
                FixedUpdate,
                (systems::start_state_machines, systems::drive_state_machines)
                    .chain()
                    .in_set(MovementSet::Drive),
            );
    }
}
