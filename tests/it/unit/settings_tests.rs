//! Unit tests for settings loading.

use pointerkit::settings::default_settings_path;
use pointerkit::{ButtonMap, InputSettings, SettingsError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_full_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{
            "debounce_delay_ms": 40,
            "scrollbar_width": 12.5,
            "buttons": { "primary": 2, "secondary": 0 }
        }"#,
    )
    .unwrap();

    let settings = InputSettings::load(&path).unwrap();
    assert_eq!(settings.debounce_delay_ms, 40);
    assert_eq!(settings.scrollbar_width, Some(12.5));
    assert_eq!(settings.buttons, ButtonMap::left_handed());
}

#[test]
fn test_empty_object_is_defaults() {
    assert_eq!(InputSettings::from_json("{}").unwrap(), InputSettings::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = InputSettings::load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
    assert_eq!(InputSettings::load_or_default(&path), InputSettings::default());
}

#[test]
fn test_invalid_json_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(InputSettings::load(&path), Err(SettingsError::Json(_))));
    assert_eq!(InputSettings::load_or_default(&path), InputSettings::default());
}

#[test]
fn test_default_path() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("pointerkit/settings.json"));
    }
}

#[test]
fn test_shared_button_code_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "buttons": { "primary": 2, "secondary": 2 } }"#).unwrap();

    let err = InputSettings::load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::AmbiguousButtons(2)));
    assert_eq!(InputSettings::load_or_default(&path), InputSettings::default());
}
