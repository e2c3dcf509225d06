//! Core domain: tests for the time scale service.

use bevy::prelude::*;
use bevy::time::TimePlugin;

use super::TimeScaleStack;
use super::systems::apply_time_scale;
use crate::movement::TimeScaleControl;

fn time_scale_app() -> App {
    let mut app = App::new();
    app.add_plugins(TimePlugin)
        .init_resource::<TimeScaleStack>()
        .add_systems(Update, apply_time_scale);
    app.update();
    app
}

fn virtual_speed(app: &App) -> f32 {
    app.world().resource::<Time<Virtual>>().relative_speed()
}

#[test]
fn test_empty_stack_runs_at_normal_speed() {
    let stack = TimeScaleStack::default();
    assert_eq!(stack.current(), 1.0);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn test_push_pop_restores_previous_scale() {
    let mut stack = TimeScaleStack::default();
    stack.push(0.5);
    stack.push(0.3);
    assert_eq!(stack.current(), 0.3);

    stack.pop();
    assert_eq!(stack.current(), 0.5);

    stack.pop();
    assert_eq!(stack.current(), 1.0);
}

#[test]
fn test_unbalanced_pop_is_ignored() {
    let mut stack = TimeScaleStack::default();
    stack.pop();
    assert_eq!(stack.current(), 1.0);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn test_negative_factor_clamps_to_zero() {
    let mut stack = TimeScaleStack::default();
    stack.push(-2.0);
    assert_eq!(stack.current(), 0.0);
}

#[test]
fn test_virtual_time_follows_pushed_scale() {
    let mut app = time_scale_app();
    assert_eq!(virtual_speed(&app), 1.0);

    app.world_mut().resource_mut::<TimeScaleStack>().push(0.3);
    app.update();
    assert_eq!(virtual_speed(&app), 0.3);

    app.world_mut().resource_mut::<TimeScaleStack>().pop();
    app.update();
    assert_eq!(virtual_speed(&app), 1.0);
}

#[test]
fn test_nested_scales_unwind_in_virtual_time() {
    let mut app = time_scale_app();

    app.world_mut().resource_mut::<TimeScaleStack>().push(0.5);
    app.world_mut().resource_mut::<TimeScaleStack>().push(0.25);
    app.update();
    assert_eq!(virtual_speed(&app), 0.25);

    app.world_mut().resource_mut::<TimeScaleStack>().pop();
    app.update();
    assert_eq!(virtual_speed(&app), 0.5);
}
