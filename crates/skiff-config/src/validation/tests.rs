//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&SkiffConfig::default()).is_ok());
}

#[test]
fn catches_home_url_without_scheme() {
    let mut config = SkiffConfig::default();
    config.browser.home_url = "google.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("browser.home_url"));
}

#[test]
fn accepts_about_blank_home() {
    let mut config = SkiffConfig::default();
    config.browser.home_url = "about:blank".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_home_url_blocked_by_navigation_allowlist() {
    let mut config = SkiffConfig::default();
    config.browser.home_url = "about:config".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("browser.home_url = \"about:config\""));
}

#[test]
fn catches_blank_home_title() {
    let mut config = SkiffConfig::default();
    config.browser.home_title = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("browser.home_title must not be empty"));
}

#[test]
fn catches_window_width_too_small() {
    let mut config = SkiffConfig::default();
    config.window.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width = 100 is out of range [320, 7680]"));
}

#[test]
fn catches_toolbar_height_out_of_range() {
    let mut config = SkiffConfig::default();
    config.window.toolbar_height = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.toolbar_height"));
}

#[test]
fn catches_chrome_taller_than_window() {
    let mut config = SkiffConfig::default();
    config.window.height = 300;
    config.window.toolbar_height = 100;
    config.window.keyboard_height = 200;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("leaves no room for the page"));
}

#[test]
fn catches_empty_keyboard() {
    let mut config = SkiffConfig::default();
    config.keyboard.rows = vec![String::new()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("keyboard.rows must contain at least one key"));
}

#[test]
fn catches_whitespace_key() {
    let mut config = SkiffConfig::default();
    config.keyboard.rows = vec!["AB C".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("keyboard.rows[0]"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SkiffConfig::default();
    config.window.width = 0;
    config.browser.home_url = "ftp://x".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("browser.home_url"));
    assert!(err.contains("; "));
}
