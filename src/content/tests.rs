//! Content domain: parsing and validation tests.

use std::path::Path;

use super::data::SCHEMA_VERSION;
use super::loader::{check_schema, parse_single};
use super::{GameplayDefaults, load_gameplay_defaults, validate_defaults};

const SHIPPED_DEFAULTS: &str = include_str!("../../assets/data/gameplay_defaults.ron");

#[test]
fn test_shipped_defaults_match_built_in() {
    let defaults: GameplayDefaults =
        parse_single(SHIPPED_DEFAULTS, "gameplay_defaults.ron").expect("shipped file parses");

    assert_eq!(defaults, GameplayDefaults::default());
    assert!(validate_defaults(&defaults).is_empty());
}

#[test]
fn test_missing_sections_fall_back_to_defaults() {
    let defaults: GameplayDefaults =
        parse_single("(schema_version: 1, movement: (move_speed: 320.0))", "inline")
            .expect("partial file parses");

    assert_eq!(defaults.movement.move_speed, 320.0);
    assert_eq!(defaults.movement.jump_speed, 720.0);
    assert_eq!(defaults.session, GameplayDefaults::default().session);
}

#[test]
fn test_parse_error_names_the_file() {
    let result = parse_single::<GameplayDefaults>("(schema_version: ", "broken.ron");

    let err = result.expect_err("truncated file must fail");
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_unknown_schema_version_rejected() {
    let defaults = GameplayDefaults {
        schema_version: SCHEMA_VERSION + 1,
        ..Default::default()
    };

    assert!(check_schema(&defaults, "future.ron").is_err());
    assert!(check_schema(&GameplayDefaults::default(), "current.ron").is_ok());
}

#[test]
fn test_missing_directory_is_an_io_error() {
    let err = load_gameplay_defaults(Path::new("does/not/exist")).expect_err("no such file");

    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_invalid_tuning_reported() {
    let mut defaults = GameplayDefaults::default();
    defaults.movement.move_speed = -5.0;
    defaults.movement.idle_damping = 1.5;
    defaults.movement.teleport_samples = 0;
    defaults.session.dead_time = -1.0;

    let errors = validate_defaults(&defaults);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 4);
    assert!(fields.contains(&"move_speed"));
    assert!(fields.contains(&"idle_damping"));
    assert!(fields.contains(&"teleport_samples"));
    assert!(fields.contains(&"dead_time"));
    assert_eq!(errors[0].to_string(), "movement.move_speed = -5 must be positive");
}
