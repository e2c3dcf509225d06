//! Validation for tuning values that would break the locomotion model.

use crate::movement::MovementTuning;

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MovementTuning field '{}' = {} (expected {})",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for range checks
macro_rules! check_range {
    ($errors:expr, $tuning:expr, $field:ident, $cond:expr, $expected:expr) => {
        let value = $tuning.$field;
        if !value.is_finite() || !$cond(value) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value,
                expected: $expected,
            });
        }
    };
}

/// Validate tuning values.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let positive = |v: f32| v > 0.0;
    let non_negative = |v: f32| v >= 0.0;
    let unit = |v: f32| v > 0.0 && v <= 1.0;

    check_range!(errors, tuning, run_speed, positive, "> 0");
    check_range!(errors, tuning, jump_speed, positive, "> 0");
    check_range!(errors, tuning, floor_acceleration, positive, "> 0");
    check_range!(errors, tuning, air_acceleration, positive, "> 0");
    check_range!(errors, tuning, gravity, positive, "> 0");
    check_range!(errors, tuning, wall_jump_horizontal, non_negative, ">= 0");
    check_range!(errors, tuning, wall_jump_vertical, non_negative, ">= 0");
    check_range!(errors, tuning, coyote_time, non_negative, ">= 0");
    check_range!(errors, tuning, jump_buffer_time, non_negative, ">= 0");
    check_range!(errors, tuning, wall_slide_gravity_scale, unit, "in (0, 1]");
    check_range!(errors, tuning, wall_jump_time_scale, unit, "in (0, 1]");
    check_range!(errors, tuning, jump_cut_ratio, unit, "in (0, 1]");

    errors
}
