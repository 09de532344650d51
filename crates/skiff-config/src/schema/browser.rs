//! Start page configuration.

use serde::{Deserialize, Serialize};

/// Page every new tab opens on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub home_url: String,
    /// Title shown for a new tab until the page reports its own.
    pub home_title: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_url: "https://www.google.com".into(),
            home_title: "Google".into(),
        }
    }
}
