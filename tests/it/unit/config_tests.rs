//! Unit tests for config module.

use areaviz::config::default_config_path;
use areaviz::{AreaConfig, AreaError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("area.json");

    let config = AreaConfig {
        scale: 1.25,
        units_per_pixel: 0.2,
        precision: 2,
        x_field_id: Some("offset-x".to_string()),
        ..Default::default()
    };
    config.save(&path).unwrap();

    let loaded = AreaConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_or_default_with_missing_file() {
    let dir = tempdir().unwrap();
    let config = AreaConfig::load_or_default(dir.path().join("missing.json")).unwrap();
    assert_eq!(config, AreaConfig::default());
}

#[test]
fn test_load_reports_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("area.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(AreaConfig::load(&path), Err(AreaError::Json(_))));
    assert!(matches!(AreaConfig::load_or_default(&path), Err(AreaError::Json(_))));
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("area.json");
    fs::write(&path, r#"{"scale": -1.0}"#).unwrap();

    let err = AreaConfig::load(&path).unwrap_err();
    assert!(matches!(err, AreaError::InvalidConfig(_)));
    assert!(err.to_string().contains("scale"));
}

#[test]
fn test_default_path_location() {
    // Some on most systems
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("areaviz/area.json"));
    }
}
