//! Address bar text and URL normalization.

/// Trim `text` and prefix `https://` unless it already names an
/// `http://` or `https://` URL. The result is not validated.
pub fn normalize_url(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Free text typed by the user, reconciled into a URL on submit.
///
/// `revision` counts replacements made by the browser (submit, page loads,
/// tab switches). User edits leave it alone, so a view can tell its own
/// typing echoed back from text it must show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBar {
    text: String,
    revision: u64,
}

impl AddressBar {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revision: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Text typed by the user.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace the text on the browser's behalf.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.revision += 1;
    }

    /// Normalize the current text, keep the normalized form, and return it.
    pub fn submit(&mut self) -> String {
        let url = normalize_url(&self.text);
        self.set_text(url.as_str());
        url
    }
}
