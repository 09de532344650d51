//! Full configuration validation.
//!
//! Validates numeric ranges, the home URL, and keyboard rows, collecting
//! every problem into a single `ConfigError`.

mod browser;
mod helpers;
mod keyboard;
mod window;

#[cfg(test)]
mod tests;

use crate::schema::SkiffConfig;
use skiff_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SkiffConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    browser::validate_browser(&mut errors, config);
    window::validate_window(&mut errors, config);
    keyboard::validate_keyboard(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
