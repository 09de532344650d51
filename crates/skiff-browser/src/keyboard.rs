//! In-app keyboard overlay.
//!
//! The overlay keeps no text of its own: each key press becomes an
//! [`InputCommand`] for the focused field of the active page.

use skiff_common::{InputCommand, VirtualKey};
use tracing::debug;

pub const DEFAULT_KEY_ROWS: [&str; 4] = ["1234567890", "QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Rows of keys shown on the overlay. The last row always carries the
/// space, backspace, and clear keys; close is rendered separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    rows: Vec<Vec<VirtualKey>>,
}

impl KeyboardLayout {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let mut keys: Vec<Vec<VirtualKey>> = rows
            .iter()
            .map(|row| row.as_ref().chars().map(VirtualKey::Char).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        keys.push(vec![
            VirtualKey::Space,
            VirtualKey::Backspace,
            VirtualKey::Clear,
        ]);
        Self { rows: keys }
    }

    pub fn rows(&self) -> &[Vec<VirtualKey>] {
        &self.rows
    }

    pub fn contains(&self, key: VirtualKey) -> bool {
        key == VirtualKey::Close || self.rows.iter().flatten().any(|k| *k == key)
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::from_rows(&DEFAULT_KEY_ROWS)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VirtualKeyboard {
    layout: KeyboardLayout,
    visible: bool,
}

impl VirtualKeyboard {
    pub fn new(layout: KeyboardLayout) -> Self {
        Self {
            layout,
            visible: false,
        }
    }

    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: KeyboardLayout) {
        self.layout = layout;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Translate a key press. Close hides the overlay; presses while hidden
    /// or for keys outside the layout produce nothing.
    pub fn press(&mut self, key: VirtualKey) -> Option<InputCommand> {
        if !self.visible {
            debug!(key = %key.name(), "key press ignored: keyboard hidden");
            return None;
        }
        if !self.layout.contains(key) {
            debug!(key = %key.name(), "key press ignored: not in layout");
            return None;
        }
        match key {
            VirtualKey::Char(c) => Some(InputCommand::AppendChar(c)),
            VirtualKey::Space => Some(InputCommand::AppendChar(' ')),
            VirtualKey::Backspace => Some(InputCommand::Backspace),
            VirtualKey::Clear => Some(InputCommand::Clear),
            VirtualKey::Close => {
                self.visible = false;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown() -> VirtualKeyboard {
        let mut kb = VirtualKeyboard::default();
        kb.show();
        kb
    }

    #[test]
    fn default_layout_rows() {
        let layout = KeyboardLayout::default();
        assert_eq!(layout.rows().len(), 5);
        assert_eq!(layout.rows()[0].len(), 10);
        assert_eq!(layout.rows()[1][0], VirtualKey::Char('Q'));
        assert_eq!(layout.rows()[3].len(), 7);
        assert_eq!(
            layout.rows()[4],
            vec![VirtualKey::Space, VirtualKey::Backspace, VirtualKey::Clear]
        );
    }

    #[test]
    fn empty_rows_are_skipped() {
        let layout = KeyboardLayout::from_rows(&["ab", "", "c"]);
        assert_eq!(layout.rows().len(), 3);
    }

    #[test]
    fn starts_hidden() {
        assert!(!VirtualKeyboard::default().is_visible());
    }

    #[test]
    fn char_keys_append() {
        let mut kb = shown();
        assert_eq!(
            kb.press(VirtualKey::Char('A')),
            Some(InputCommand::AppendChar('A'))
        );
        assert_eq!(
            kb.press(VirtualKey::Char('0')),
            Some(InputCommand::AppendChar('0'))
        );
    }

    #[test]
    fn space_appends_blank() {
        let mut kb = shown();
        assert_eq!(
            kb.press(VirtualKey::Space),
            Some(InputCommand::AppendChar(' '))
        );
    }

    #[test]
    fn backspace_and_clear() {
        let mut kb = shown();
        assert_eq!(kb.press(VirtualKey::Backspace), Some(InputCommand::Backspace));
        assert_eq!(kb.press(VirtualKey::Clear), Some(InputCommand::Clear));
    }

    #[test]
    fn close_hides_overlay() {
        let mut kb = shown();
        assert_eq!(kb.press(VirtualKey::Close), None);
        assert!(!kb.is_visible());
    }

    #[test]
    fn hidden_keyboard_ignores_presses() {
        let mut kb = VirtualKeyboard::default();
        assert_eq!(kb.press(VirtualKey::Char('A')), None);
    }

    #[test]
    fn keys_outside_layout_are_ignored() {
        let mut kb = shown();
        assert_eq!(kb.press(VirtualKey::Char('a')), None);
        assert_eq!(kb.press(VirtualKey::Char('\'')), None);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut kb = VirtualKeyboard::default();
        kb.toggle();
        assert!(kb.is_visible());
        kb.toggle();
        assert!(!kb.is_visible());
    }
}
