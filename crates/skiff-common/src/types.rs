use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Sequential tab identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u32);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab-{}", self.0)
    }
}

/// Identifies one mount of a renderer. A tab that remounts gets a new
/// token, so callbacks carrying the old one can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MountToken(pub u64);

impl fmt::Display for MountToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mount-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_id_display() {
        assert_eq!(TabId(3).to_string(), "tab-3");
    }

    #[test]
    fn tab_id_serializes_as_number() {
        let json = serde_json::to_string(&TabId(7)).unwrap();
        assert_eq!(json, "7");
        let back: TabId = serde_json::from_str("7").unwrap();
        assert_eq!(back, TabId(7));
    }

    #[test]
    fn tab_id_ordering() {
        assert!(TabId(1) < TabId(2));
    }

    #[test]
    fn mount_token_display_and_hash() {
        use std::collections::HashSet;
        assert_eq!(MountToken(12).to_string(), "mount-12");

        let mut set = HashSet::new();
        set.insert(MountToken(1));
        set.insert(MountToken(1));
        set.insert(MountToken(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn rect_default_is_zero() {
        let r = Rect::default();
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
    }
}
