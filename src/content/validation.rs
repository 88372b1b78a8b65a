//! Validation for tuning values loaded from content files.

use super::data::GameplayDefaults;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} = {} must be {}",
            self.section, self.field, self.value, self.requirement
        )
    }
}

/// Helper macro for checking a value satisfies a bound
macro_rules! check_value {
    ($errors:expr, $section:expr, $owner:expr, $field:ident, $requirement:expr, |$v:ident| $ok:expr) => {
        let $v = $owner.$field as f32;
        if !$ok {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                value: $v,
                requirement: $requirement,
            });
        }
    };
}

/// Validate every tuning value.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_defaults(defaults: &GameplayDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let m = &defaults.movement;
    let s = &defaults.session;

    // Speeds and distances
    check_value!(errors, "movement", m, move_speed, "positive", |v| v > 0.0);
    check_value!(errors, "movement", m, jump_speed, "positive", |v| v > 0.0);
    check_value!(errors, "movement", m, crawl_speed, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, mini_hop_speed, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, roll_speed_bonus, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, puff_max_speed, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, puff_flap_speed, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, puff_decay, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, puff_acceleration, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, teleport_distance, "positive", |v| v > 0.0);
    check_value!(errors, "movement", m, teleport_clear_radius, "positive", |v| v > 0.0);
    check_value!(errors, "movement", m, teleport_samples, "at least 1", |v| v >= 1.0);

    // Timers
    check_value!(errors, "movement", m, jump_time, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, jump_buffer_time, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, puff_entry_smoothing, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, puff_flap_cooldown, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, super_jump_window, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, teleport_cooldown, "non-negative", |v| v >= 0.0);

    // Factors
    check_value!(errors, "movement", m, idle_damping, "within 0..=1", |v| (0.0..=1.0).contains(&v));
    check_value!(errors, "movement", m, jump_hold_factor, "within 0..=1", |v| (0.0..=1.0).contains(&v));
    check_value!(errors, "movement", m, fall_gravity_multiplier, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, low_jump_multiplier, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, puff_gravity_multiplier, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, flatten_gravity_multiplier, "non-negative", |v| v >= 0.0);
    check_value!(errors, "movement", m, super_jump_multiplier, "at least 1", |v| v >= 1.0);

    // Session
    check_value!(errors, "session", s, dead_time, "non-negative", |v| v >= 0.0);
    check_value!(errors, "session", s, jump_time_boost, "non-negative", |v| v >= 0.0);

    errors
}
