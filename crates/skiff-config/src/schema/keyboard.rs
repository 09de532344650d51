//! Virtual keyboard layout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Character rows, top to bottom. Each character becomes one key.
    /// Space, backspace, and clear are always appended as a final row.
    pub rows: Vec<String>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            rows: vec![
                "1234567890".into(),
                "QWERTYUIOP".into(),
                "ASDFGHJKL".into(),
                "ZXCVBNM".into(),
            ],
        }
    }
}
