//! Integration tests for the cardwall-config crate.

use std::fs;
use std::path::PathBuf;

use cardwall_config::persistence::read_config_file_async;
use cardwall_config::{Config, ConfigError, DragConfig, LoggingConfig};
use tempfile::TempDir;

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("cardwall.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Boards for a small team
            initial_boards: ["Backlog", "Doing", "Review", "Shipped"],
            drag: { activation_distance: 4 },
            logging: { level: "debug", file: "/tmp/cardwall-test.log" },
        }
        "#,
    )
    .expect("write config");

    let config = Config::load_from(&config_path).expect("valid config");

    assert_eq!(
        config.initial_boards,
        ["Backlog", "Doing", "Review", "Shipped"]
    );
    assert!(!config.demo);
    assert_eq!(config.drag.activation_distance, 4);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/tmp/cardwall-test.log"))
    );
}

#[tokio::test]
async fn async_read_matches_sync_load() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("cardwall.json");
    fs::write(&config_path, r#"{ "demo": true }"#).expect("write config");

    let from_async: Config = read_config_file_async(&config_path)
        .await
        .expect("readable config");
    let from_sync = Config::load_from(&config_path).expect("valid config");

    assert_eq!(from_async, from_sync);
    assert!(from_sync.demo);
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("cardwall.json5");
    fs::write(&config_path, "{}").expect("write config");

    let config = Config::load_from(&config_path).expect("valid config");

    assert_eq!(config, Config::default());
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("nested").join("config.json");

    let original = Config {
        initial_boards: vec!["Ideas".to_string(), "Done".to_string()],
        demo: true,
        drag: DragConfig::with_activation_distance(3),
        logging: LoggingConfig {
            level: "warn".to_string(),
            file: None,
        },
    };

    original.save_to(&config_path).expect("writable config");
    let loaded = Config::load_from(&config_path).expect("valid config");

    assert_eq!(original, loaded);
}

#[test]
fn saved_config_is_plain_json() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("config.json");
    Config::default().save_to(&config_path).expect("writable config");

    let content = fs::read_to_string(&config_path).expect("readable file");
    let value: serde_json::Value = serde_json::from_str(&content).expect("plain JSON");

    assert_eq!(value["drag"]["activation_distance"], 2);
    assert_eq!(value["initial_boards"][0], "To Do");
}

#[test]
fn load_nonexistent_file_fails() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn load_rejects_out_of_range_drag_distance() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("cardwall.json5");
    fs::write(&config_path, "{ drag: { activation_distance: 0 } }").expect("write config");

    let result = Config::load_from(&config_path);

    assert!(matches!(
        result,
        Err(ConfigError::InvalidDragDistance { .. })
    ));
}

#[test]
fn load_rejects_malformed_file() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("cardwall.json5");
    fs::write(&config_path, "{ initial_boards: [").expect("write config");

    assert!(Config::load_from(&config_path).is_err());
}
