//! Skiff configuration system.
//!
//! TOML-based configuration with live reload and validation. Every
//! section uses serde defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use skiff_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use schema::{SkiffConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use skiff_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file when none exists.
pub fn load_config() -> Result<SkiffConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<SkiffConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SkiffConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&SkiffConfig::default());
        assert!(json.contains("\"browser\""));
        assert!(json.contains("\"webview\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"keyboard\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"https://www.google.com\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&SkiffConfig::default());
        let parsed: SkiffConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.browser.home_title, "Google");
        assert_eq!(parsed.window.width, 1024);
        assert!(parsed.webview.javascript);
    }

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nwidth = 10\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[browser]\nhome_url = \"https://example.org\"\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.browser.home_url, "https://example.org");
    }
}
