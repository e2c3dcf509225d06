//! Movement domain: frame driver sequencing transition, entry action and motion.

use bevy::prelude::*;

use crate::movement::{CharacterController, CharacterState, Rig, StateChange};

/// Drives one [`CharacterController`] per fixed tick.
///
/// Created unstarted; [`StateMachine::start`] enters `Idle` once the owning
/// entity's other components are in place.
#[derive(Component, Debug, Default)]
pub struct StateMachine {
    current: Option<CharacterState>,
    /// Seconds spent in the current state.
    state_time: f32,
}

impl StateMachine {
    pub fn current(&self) -> Option<CharacterState> {
        self.current
    }

    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    pub fn start(&mut self, controller: &mut CharacterController, rig: &mut Rig<'_>) {
        if self.current.is_some() {
            return;
        }
        controller.enter_initial_state(CharacterState::Idle, rig);
        self.current = Some(CharacterState::Idle);
        self.state_time = 0.0;
    }

    /// Run one tick. Returns the state change performed, if any.
    pub fn step(
        &mut self,
        controller: &mut CharacterController,
        rig: &mut Rig<'_>,
        input_axis: f32,
        dt: f32,
    ) -> Option<StateChange> {
        let current = self.current?;

        controller.tick_timers(dt);
        let senses = controller.sense(rig, input_axis);
        let next = controller.next_state(current, &senses);

        let change = if next != current {
            controller.transition_to_state(current, next, &senses, rig);
            self.current = Some(next);
            self.state_time = 0.0;
            Some(StateChange {
                from: current,
                to: next,
            })
        } else {
            None
        };

        controller.tick_physics(next, input_axis, dt, rig);
        self.state_time += dt;

        change
    }
}
