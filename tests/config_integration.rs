//! Integration tests for the storymap-config crate.

use std::fs;

use storymap_config::{BoardConfig, Config, WireframePolling};
use tempfile::TempDir;

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("storymap.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Local development backend
            api: {
                base_url: 'http://localhost:8000',
                project_id: 7,
                token: 'eyJ_session',
            },
            polling: {
                initial_delay_ms: 800,
                interval_ms: 2000,
            },
            board: {
                virtualize_threshold: 15,
                column_width: 30,
            },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:8000"));
    assert_eq!(config.api.project_id, Some(7));
    assert_eq!(config.api.token.as_deref(), Some("eyJ_session"));
    assert_eq!(config.polling.initial_delay_ms, 800);
    assert_eq!(config.polling.interval_ms, 2000);
    assert_eq!(config.board.virtualize_threshold, 15);
    assert_eq!(config.board.column_width, 30);
    // Unset board fields keep their defaults.
    assert_eq!(config.board.card_height, BoardConfig::default().card_height);
    assert!(config.has_backend());
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let mut original = Config::new();
    original.api.base_url = Some("https://maps.example.com".to_string());
    original.api.project_id = Some(3);
    original.polling = WireframePolling::new(500, 3000);
    original.board.max_visible_rows = 8;

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn config_load_nonexistent_file_fails() {
    let result = Config::load_from("/nonexistent/path/storymap.json");
    assert!(result.is_err());
}

#[test]
fn config_load_rejects_invalid_polling() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("storymap.json5");

    fs::write(
        &config_path,
        r"{ polling: { initial_delay_ms: 10, interval_ms: 10 } }",
    )
    .unwrap();

    assert!(Config::load_from(&config_path).is_err());
}

#[test]
fn config_load_rejects_invalid_base_url() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("storymap.json5");

    fs::write(&config_path, r"{ api: { base_url: 'localhost:8000' } }").unwrap();

    assert!(Config::load_from(&config_path).is_err());
}

#[test]
fn saved_config_omits_unset_secrets() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    Config::new().save_to(&config_path).unwrap();
    let written = fs::read_to_string(&config_path).unwrap();

    assert!(!written.contains("token"));
    assert!(!written.contains("base_url"));
}

#[test]
fn save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("dir").join("config.json");

    Config::new().save_to(&config_path).unwrap();
    assert!(config_path.exists());
}
