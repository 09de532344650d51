//! Bookmarked pages, unique by URL.

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favorite {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    entries: Vec<Favorite>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a favorite unless one with the same URL exists. The stored
    /// title is never overwritten.
    pub fn add(&mut self, url: &str, title: &str) -> bool {
        if self.contains(url) {
            return false;
        }
        self.entries.push(Favorite {
            url: url.to_string(),
            title: title.to_string(),
        });
        debug!(url, title, "favorite added");
        true
    }

    pub fn remove(&mut self, url: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|f| f.url != url);
        before != self.entries.len()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|f| f.url == url)
    }

    pub fn get(&self, url: &str) -> Option<&Favorite> {
        self.entries.iter().find(|f| f.url == url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Favorite> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
