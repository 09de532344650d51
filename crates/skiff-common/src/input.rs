//! Virtual keyboard keys and the structured edits they produce.

use serde::{Deserialize, Serialize};

/// An edit applied to the focused text field of a page.
///
/// The renderer layer turns these into script; callers never build
/// script strings themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCommand {
    AppendChar(char),
    Backspace,
    Clear,
}

/// A key on the in-app keyboard overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VirtualKey {
    Char(char),
    Space,
    Backspace,
    Clear,
    Close,
}

impl VirtualKey {
    /// Stable name used on the chrome IPC channel.
    pub fn name(&self) -> String {
        match self {
            VirtualKey::Char(c) => c.to_string(),
            VirtualKey::Space => "space".into(),
            VirtualKey::Backspace => "backspace".into(),
            VirtualKey::Clear => "clear".into(),
            VirtualKey::Close => "close".into(),
        }
    }

    /// Text shown on the key cap.
    pub fn label(&self) -> String {
        match self {
            VirtualKey::Char(c) => c.to_string(),
            VirtualKey::Space => "Space".into(),
            VirtualKey::Backspace => "\u{232B}".into(),
            VirtualKey::Clear => "Clear".into(),
            VirtualKey::Close => "Close keyboard".into(),
        }
    }

    /// Inverse of [`VirtualKey::name`]. A single character is a `Char` key.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "space" => Some(VirtualKey::Space),
            "backspace" => Some(VirtualKey::Backspace),
            "clear" => Some(VirtualKey::Clear),
            "close" => Some(VirtualKey::Close),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => Some(VirtualKey::Char(c)),
                    _ => None,
                }
            }
        }
    }
}
