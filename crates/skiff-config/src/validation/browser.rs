use skiff_common::is_navigation_allowed;

use super::helpers::validate_not_blank;
use crate::schema::SkiffConfig;

pub(super) fn validate_browser(errors: &mut Vec<String>, config: &SkiffConfig) {
    let browser = &config.browser;
    validate_not_blank(errors, "browser.home_url", &browser.home_url);
    validate_not_blank(errors, "browser.home_title", &browser.home_title);

    // The home page must be one the page WebViews will actually open.
    let url = browser.home_url.trim();
    if !url.is_empty() && !is_navigation_allowed(url) {
        errors.push(format!(
            "browser.home_url = {url:?} must start with http:// or https://, or be about:blank"
        ));
    }
}
