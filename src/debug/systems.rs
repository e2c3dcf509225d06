//! Debug domain: overlay toggling and refresh.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::TimeScaleStack;
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{
    BodyContacts, CharacterController, CharacterStateChanged, Player, StateMachine,
    TimeScaleControl, WallProbes,
};
use crate::sprites::{AnimationController, AnimationFinished};

/// Toggle the info overlay with F1 or backtick key
pub(crate) fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        let status = if debug_state.show_info { "ON" } else { "OFF" };
        info!("[DEBUG] FSM overlay {}", status);
    }
}

pub(crate) fn record_fsm_messages(
    mut debug_state: ResMut<DebugState>,
    mut transitions: MessageReader<CharacterStateChanged>,
    mut finished: MessageReader<AnimationFinished>,
) {
    for change in transitions.read() {
        debug_state.record_transition(change.from, change.to);
    }
    for event in finished.read() {
        debug_state.last_finished_clip = Some(event.clip);
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    time_scale: Res<TimeScaleStack>,
    player_query: Query<
        (
            &StateMachine,
            &CharacterController,
            &LinearVelocity,
            &BodyContacts,
            &WallProbes,
            &AnimationController,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Some((machine, controller, velocity, contacts, probes, animation)) =
        player_query.iter().next()
    else {
        return;
    };
    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let recent = debug_state
        .recent_transitions
        .iter()
        .map(|(from, to)| format!("{:?}->{:?}", from, to))
        .collect::<Vec<_>>()
        .join(", ");

    **text = format!(
        "State: {:?} ({:.2}s)\nClip: {} (starts: {})\nVel: ({:.0}, {:.0})\nFloor: {} (before move: {}) Wall: {} Hand: {} Foot: {}\nCoyote: {:.3}/{:.2} Buffer: {:.3}/{:.2}\nTime scale: {:.2}\nJump height: {:.0}\nLast finished: {:?}\nRecent: {}",
        machine.current(),
        machine.state_time(),
        animation.sprite_key("player"),
        animation.restarts,
        velocity.x,
        velocity.y,
        contacts.on_floor,
        controller.was_on_floor_before_move(),
        contacts.on_wall,
        probes.hand.hit,
        probes.foot.hit,
        controller.coyote().remaining(),
        controller.coyote().wait_time(),
        controller.jump_buffer().remaining(),
        controller.jump_buffer().wait_time(),
        time_scale.current(),
        controller.tuning().single_jump_height(),
        debug_state.last_finished_clip,
        recent
    );
}
