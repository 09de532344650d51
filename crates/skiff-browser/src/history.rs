//! Visited URLs, deduplicated on insert.

use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<String>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `url` unless it is already present. Returns whether it was added.
    pub fn record(&mut self, url: &str) -> bool {
        if self.contains(url) {
            return false;
        }
        self.entries.push(url.to_string());
        debug!(url, count = self.entries.len(), "history recorded");
        true
    }

    /// Remove every entry equal to `url`. Returns how many were removed.
    pub fn remove(&mut self, url: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e != url);
        before - self.entries.len()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|e| e == url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
