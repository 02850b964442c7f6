// src/crawl/summary.rs
// =============================================================================
// The report of a successful crawl.
//
// #[derive(Serialize)] lets the CLI print it as JSON.
// =============================================================================

use serde::Serialize;

use crate::registry::VisitedRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlSummary {
    /// The URL the crawl started from
    pub seed_url: String,
    /// How many distinct pages were fetched
    pub pages_visited: usize,
    /// Every visited URL, sorted
    pub urls: Vec<String>,
}

impl CrawlSummary {
    pub fn from_registry(seed_url: &str, registry: &VisitedRegistry) -> Self {
        let urls = registry.urls();
        Self {
            seed_url: seed_url.to_string(),
            pages_visited: urls.len(),
            urls,
        }
    }
}
