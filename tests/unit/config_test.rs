//! Tests for loading `BrowserConfig`.

use std::fs;

use minimal_browser::types::config::{BrowserConfig, DEFAULT_DESTINATION, NEW_TAB_LABEL};
use minimal_browser::types::errors::ConfigError;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = BrowserConfig::default();
    assert_eq!(config.window_title, "Minimal Browser");
    assert_eq!(config.default_destination, DEFAULT_DESTINATION);
    assert_eq!(config.default_destination, "https://duckduckgo.com/");
    assert_eq!(config.new_tab_label, NEW_TAB_LABEL);
    assert_eq!((config.window_width, config.window_height), (1280, 800));
}

#[test]
fn test_partial_json_keeps_other_defaults() {
    let config = BrowserConfig::from_json_str(r#"{"window_width": 1024}"#).unwrap();
    assert_eq!(config.window_width, 1024);
    assert_eq!(config.window_height, 800);
    assert_eq!(config.default_destination, DEFAULT_DESTINATION);
}

#[test]
fn test_empty_object_is_default() {
    assert_eq!(BrowserConfig::from_json_str("{}").unwrap(), BrowserConfig::default());
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = BrowserConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let err = BrowserConfig::from_json_str(r#"{"window_width": "wide"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("browser.json");
    fs::write(
        &path,
        r#"{"window_title": "Test Shell", "default_destination": "https://start.example/"}"#,
    )
    .unwrap();

    let config = BrowserConfig::load(&path).unwrap();
    assert_eq!(config.window_title, "Test Shell");
    assert_eq!(config.default_destination, "https://start.example/");
    assert_eq!(config.toolbar_height, BrowserConfig::default().toolbar_height);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = BrowserConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(err.to_string().starts_with("Config I/O error: Failed to read"));
}
