//! Content domain: tests for tuning parsing and validation.

use super::loader::parse_movement_tuning;
use super::validation::validate_tuning;
use crate::movement::MovementTuning;

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&MovementTuning::default()).is_empty());
}

#[test]
fn test_default_air_acceleration_is_ten_times_floor() {
    let tuning = MovementTuning::default();
    assert!((tuning.air_acceleration - tuning.floor_acceleration * 10.0).abs() < 0.01);
}

#[test]
fn test_parse_partial_file_keeps_defaults() {
    let tuning = parse_movement_tuning("movement.ron", "(run_speed: 200.0, jump_speed: 400.0)")
        .expect("partial tuning should parse");

    assert_eq!(tuning.run_speed, 200.0);
    assert_eq!(tuning.jump_speed, 400.0);
    assert_eq!(tuning.gravity, MovementTuning::default().gravity);
    assert_eq!(tuning.coyote_time, MovementTuning::default().coyote_time);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_movement_tuning("broken.ron", "(run_speed: \"fast\")")
        .expect_err("string speed should not parse");
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_validation_flags_bad_values() {
    let tuning = MovementTuning {
        gravity: -10.0,
        wall_jump_time_scale: 0.0,
        jump_cut_ratio: f32::NAN,
        ..Default::default()
    };

    let errors = validate_tuning(&tuning);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["gravity", "wall_jump_time_scale", "jump_cut_ratio"]);
}

#[test]
fn test_single_jump_height() {
    let tuning = MovementTuning {
        jump_speed: 300.0,
        gravity: 900.0,
        ..Default::default()
    };
    assert!((tuning.single_jump_height() - 50.0).abs() < 0.001);
}
