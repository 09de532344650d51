//! Window layout: the toolbar strip on top, the keyboard overlay at the
//! bottom when shown, and the page in between.

use serde_json::json;
use skiff_common::Rect;
use skiff_config::schema::WindowConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ChromeLayout {
    pub toolbar_height: f64,
    pub keyboard_height: f64,
}

impl ChromeLayout {
    pub fn from_config(window: &WindowConfig) -> Self {
        Self {
            toolbar_height: f64::from(window.toolbar_height),
            keyboard_height: f64::from(window.keyboard_height),
        }
    }

    /// Area left for the page WebViews.
    pub fn page_rect(&self, viewport: Rect, keyboard_visible: bool) -> Rect {
        let top = self.toolbar_height.min(viewport.height);
        let bottom = if keyboard_visible {
            self.keyboard_height
        } else {
            0.0
        };
        Rect {
            x: viewport.x,
            y: viewport.y + top,
            width: viewport.width.max(0.0),
            height: (viewport.height - top - bottom).max(0.0),
        }
    }

    /// Geometry the chrome page needs to place its own elements.
    pub fn to_json(self) -> serde_json::Value {
        json!({
            "toolbar_height": self.toolbar_height,
            "keyboard_height": self.keyboard_height,
        })
    }
}
