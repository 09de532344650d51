//! Window and chrome geometry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 320-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 240-4320).
    pub height: u32,
    /// Height of the tab strip plus address bar (valid range: 40-400).
    pub toolbar_height: u32,
    /// Height reserved for the keyboard overlay when shown (valid range: 100-600).
    pub keyboard_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Skiff".into(),
            width: 1024,
            height: 768,
            toolbar_height: 96,
            keyboard_height: 260,
        }
    }
}
