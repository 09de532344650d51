//! Configuration schema types for Skiff.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod browser;
mod keyboard;
mod system;
mod webview;
mod window;

pub use browser::*;
pub use keyboard::*;
pub use system::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Skiff.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkiffConfig {
    pub browser: BrowserConfig,
    pub webview: WebViewSettings,
    pub window: WindowConfig,
    pub keyboard: KeyboardConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
