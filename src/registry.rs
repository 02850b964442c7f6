// src/registry.rs
// =============================================================================
// The set of URLs the crawl has already fetched.
//
// One registry is created per crawl and shared (behind an Arc) by every
// branch of that crawl. It only grows: URLs are added once and never removed.
//
// Concurrency note: the crawler checks `is_visited` before fetching and calls
// `mark_visited` after the fetch succeeded. Those are two separate lock
// acquisitions, so the check-then-mark is NOT atomic. Two branches crawling
// the same URL at the same moment could both fetch it. The crawler recurses
// sequentially, so this cannot happen today.
//
// Rust concepts:
// - RwLock: many readers OR one writer at a time
// - Interior mutability: `&self` methods that still modify the set
// =============================================================================

use parking_lot::RwLock;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct VisitedRegistry {
    urls: RwLock<HashSet<String>>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.urls.read().contains(url)
    }

    // Returns true if the URL was not in the registry before.
    // Marking a URL twice is a no-op.
    pub fn mark_visited(&self, url: &str) -> bool {
        let mut urls = self.urls.write();
        if urls.contains(url) {
            return false;
        }
        urls.insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.urls.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.read().is_empty()
    }

    // Sorted copy of every visited URL
    pub fn urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.urls.read().iter().cloned().collect();
        urls.sort();
        urls
    }
}
