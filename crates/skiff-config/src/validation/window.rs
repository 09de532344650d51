use super::helpers::{validate_not_blank, validate_range};
use crate::schema::SkiffConfig;

pub(super) fn validate_window(errors: &mut Vec<String>, config: &SkiffConfig) {
    let w = &config.window;
    validate_not_blank(errors, "window.title", &w.title);
    validate_range(errors, "window.width", w.width, 320, 7680);
    validate_range(errors, "window.height", w.height, 240, 4320);
    validate_range(errors, "window.toolbar_height", w.toolbar_height, 40, 400);
    validate_range(errors, "window.keyboard_height", w.keyboard_height, 100, 600);

    let chrome = w.toolbar_height.saturating_add(w.keyboard_height);
    if chrome >= w.height {
        errors.push(format!(
            "window.toolbar_height + window.keyboard_height ({chrome}) leaves no room for the page in window.height ({})",
            w.height
        ));
    }
}
