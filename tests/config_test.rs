//! Tests for configuration loading.

use tictactoe_arena::{GameConfig, GameMode};

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.default_mode(), GameMode::Easy);
    assert!((config.smart_chance() - 0.3).abs() < f64::EPSILON);
    assert_eq!(*config.thinking_delay_ms(), 500);
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = GameConfig::load(None).unwrap();
    assert_eq!(*config.default_mode(), GameMode::Easy);
}

#[test]
fn test_from_file_overrides_and_defaults_mix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_mode = \"Hard\"\nsmart_chance = 0.5\n").unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    assert_eq!(*config.default_mode(), GameMode::Hard);
    assert!((config.smart_chance() - 0.5).abs() < f64::EPSILON);
    // Unset keys fall back to defaults.
    assert_eq!(*config.thinking_delay_ms(), 500);
}

#[test]
fn test_from_file_rejects_bad_probability() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "smart_chance = 1.5\n").unwrap();

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("smart_chance"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(GameConfig::from_file(&path).is_err());
}
