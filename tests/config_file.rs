//! Loading simulation configs from disk.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;

use hamlet::{BuilderPolicy, ConfigError, SimConfig, Village};
use tempfile::TempDir;

#[test]
fn test_load_partial_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("village.json");
    fs::write(
        &path,
        r#"{
            "starting_stock": { "food": 20, "wood": 5 },
            "builder_policy": "one_per_project",
            "catalog": { "projects": { "house": { "cost": { "wood": 2 }, "days": 1, "effect": { "capacity": 4 } } } }
        }"#,
    )
    .unwrap();

    let config = SimConfig::load(&path).unwrap();
    assert_eq!(config.builder_policy, BuilderPolicy::OnePerProject);
    assert_eq!(config.starting_stock.food, 20);
    assert_eq!(config.starting_stock.metal, 0);

    // Three founding houses at four slots each.
    let mut village = Village::with_config(config).unwrap();
    assert_eq!(village.max_workers(), 12);
    assert_eq!(village.wood(), 5);

    village.add_worker("Bob", "builder");
    assert!(village.add_project("House"));
    assert_eq!(village.wood(), 3);
    let report = village.day();
    assert_eq!(report.completed.len(), 1);
    assert_eq!(village.max_workers(), 16);
}

#[test]
fn test_saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.json");
    let mut config = SimConfig::default();
    config.starvation_days = 5;
    config.catalog.base_yield.food = 7;

    fs::write(&path, config.to_json_string().unwrap()).unwrap();
    assert_eq!(SimConfig::load(&path).unwrap(), config);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = SimConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "starvation_days": 0 }"#).unwrap();

    assert!(matches!(
        SimConfig::load(&path),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_malformed_json_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ starvation_days: ").unwrap();

    assert!(matches!(SimConfig::load(&path), Err(ConfigError::Json(_))));
}
