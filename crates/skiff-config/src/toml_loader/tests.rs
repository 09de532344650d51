//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{LogLevel, SkiffConfig};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_skiff_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        skiff_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[browser]
home_url = "https://duckduckgo.com"
home_title = "DuckDuckGo"

[keyboard]
rows = ["ABC"]
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.browser.home_url, "https://duckduckgo.com");
    assert_eq!(config.keyboard.rows, vec!["ABC"]);
    // Defaults preserved
    assert_eq!(config.window.title, "Skiff");
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    assert!(matches!(
        load_from_path(&path).unwrap_err(),
        skiff_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn load_with_invalid_values_still_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[window]\ntoolbar_height = 5\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.toolbar_height, 5);
}

#[test]
fn template_parses_to_defaults() {
    let config: SkiffConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config, SkiffConfig::default());
}

#[test]
fn create_default_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("skiff").join("config.toml");

    create_default_config(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# Skiff Configuration"));
    assert_eq!(load_from_path(&path).unwrap(), SkiffConfig::default());
}

#[test]
fn default_config_path_ends_with_skiff_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("skiff/config.toml"));
    }
}
