//! Movement domain: per-character controller owning FSM runtime state.

use bevy::prelude::*;

use crate::movement::motion::{gravity_for, integrate_velocity};
use crate::movement::transitions::{self, Senses};
use crate::movement::{
    CharacterState, CountdownTimer, Facing, MovementTuning, PhysicsBody, Rig,
};

/// Runtime state of one character's locomotion FSM.
///
/// Velocity lives in the physics body; everything else the FSM remembers between
/// ticks lives here.
#[derive(Component, Debug, Clone)]
pub struct CharacterController {
    tuning: MovementTuning,
    facing: Facing,
    first_frame_of_state: bool,
    was_on_floor_before_move: bool,
    coyote: CountdownTimer,
    jump_buffer: CountdownTimer,
}

impl CharacterController {
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            coyote: CountdownTimer::new(tuning.coyote_time),
            jump_buffer: CountdownTimer::new(tuning.jump_buffer_time),
            tuning,
            facing: Facing::Right,
            first_frame_of_state: false,
            was_on_floor_before_move: false,
        }
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn is_first_frame_of_state(&self) -> bool {
        self.first_frame_of_state
    }

    /// Floor contact sampled right before the last move. Diagnostic only: the
    /// transition rules read the fresh contact from `Senses`.
    pub fn was_on_floor_before_move(&self) -> bool {
        self.was_on_floor_before_move
    }

    pub fn coyote(&self) -> &CountdownTimer {
        &self.coyote
    }

    pub fn jump_buffer(&self) -> &CountdownTimer {
        &self.jump_buffer
    }

    pub fn tick_timers(&mut self, dt: f32) {
        self.coyote.tick(dt);
        self.jump_buffer.tick(dt);
    }

    /// Read the world once for this tick's decision.
    pub fn sense(&self, rig: &Rig<'_>, input_axis: f32) -> Senses {
        Senses {
            on_floor: rig.body.is_on_floor(),
            on_wall: rig.body.is_on_wall(),
            wall_normal: rig.body.wall_normal(),
            hand_hit: rig.hand_probe.is_colliding(),
            foot_hit: rig.foot_probe.is_colliding(),
            velocity: rig.body.velocity(),
            input_axis,
            coyote_remaining: self.coyote.remaining(),
            jump_buffer_remaining: self.jump_buffer.remaining(),
            animation_playing: rig.animation.is_playing(),
        }
    }

    pub fn next_state(&self, state: CharacterState, senses: &Senses) -> CharacterState {
        transitions::next_state(state, senses)
    }

    /// Enter the first state after spawn. No state is being left.
    pub fn enter_initial_state(&mut self, state: CharacterState, rig: &mut Rig<'_>) {
        rig.animation.play(state.clip());
        self.first_frame_of_state = true;
    }

    /// Entry action, run exactly once when the state changes from `from` to `to`.
    pub fn transition_to_state(
        &mut self,
        from: CharacterState,
        to: CharacterState,
        senses: &Senses,
        rig: &mut Rig<'_>,
    ) {
        if from == CharacterState::WallJumping {
            rig.time_scale.pop();
        }

        if !from.is_grounded() && to.is_grounded() {
            self.coyote.stop();
        }

        match to {
            CharacterState::Idle | CharacterState::Running | CharacterState::WallSliding => {
                rig.animation.play(to.clip());
            }
            CharacterState::Landing => {
                // Clear the previous landing before reusing the clip so `is_playing` is fresh.
                rig.animation.stop();
                rig.animation.play(to.clip());
            }
            CharacterState::Jumping => {
                rig.animation.play(to.clip());
                let velocity = rig.body.velocity();
                rig.body
                    .set_velocity(Vec2::new(velocity.x, -self.tuning.jump_speed));
                self.coyote.stop();
                self.jump_buffer.stop();
            }
            CharacterState::Falling => {
                rig.animation.play(to.clip());
                if from.is_grounded() && !senses.jump_requested() {
                    debug!("Walked off ledge, coyote window open");
                    self.coyote.start();
                }
            }
            CharacterState::WallJumping => {
                rig.animation.play(to.clip());
                // No wall left means no horizontal kick.
                let normal_x = rig.body.wall_normal().x;
                let away = if normal_x == 0.0 { 0.0 } else { normal_x.signum() };
                rig.body.set_velocity(Vec2::new(
                    self.tuning.wall_jump_horizontal * away,
                    -self.tuning.wall_jump_vertical,
                ));
                self.jump_buffer.stop();
                rig.time_scale.push(self.tuning.wall_jump_time_scale);
            }
        }

        // Only read by the launch states; harmless elsewhere.
        self.first_frame_of_state = true;
    }

    /// Motion model for one tick of `state`.
    pub fn tick_physics(
        &mut self,
        state: CharacterState,
        input_axis: f32,
        dt: f32,
        rig: &mut Rig<'_>,
    ) {
        let on_floor = rig.body.is_on_floor();
        let gravity = gravity_for(&self.tuning, state, self.first_frame_of_state);
        let velocity = integrate_velocity(
            &self.tuning,
            rig.body.velocity(),
            input_axis,
            on_floor,
            gravity,
            dt,
        );
        rig.body.set_velocity(velocity);

        if input_axis != 0.0 {
            self.facing = if input_axis < 0.0 {
                Facing::Left
            } else {
                Facing::Right
            };
        }

        self.was_on_floor_before_move = on_floor;
        rig.body.move_and_resolve(dt);

        self.first_frame_of_state = false;
    }

    /// Jump pressed: remember the request for the buffer window.
    pub fn on_jump_pressed(&mut self) {
        self.jump_buffer.start();
    }

    /// Jump released: drop any buffered request and cut the ascent short.
    pub fn on_jump_released(&mut self, body: &mut dyn PhysicsBody) {
        self.jump_buffer.stop();

        let cut = self.tuning.jump_cut_speed();
        let velocity = body.velocity();
        if velocity.y < -cut {
            body.set_velocity(Vec2::new(velocity.x, -cut));
        }
    }
}
