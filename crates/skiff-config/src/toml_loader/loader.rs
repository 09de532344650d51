//! Core TOML config loading: read from path or platform default.

use crate::schema::SkiffConfig;
use crate::validation;
use skiff_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. Validation problems are logged
/// here; callers that must reject them run [`validation::validate`].
pub fn load_from_path(path: &Path) -> Result<SkiffConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: SkiffConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config validation warning: {e}");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/skiff/config.toml`
/// On Linux: `~/.config/skiff/config.toml`
///
/// If the file does not exist, writes the commented template and returns
/// defaults.
pub fn load_default() -> Result<SkiffConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!(path = %path.display(), "no config found, creating default");
        create_default_config(&path)?;
        return Ok(SkiffConfig::default());
    }

    load_from_path(&path)
}
