// src/crawl/mod.rs
// =============================================================================
// This module handles the recursive crawl.
//
// Features:
// - Depth-first crawling starting from a seed URL
// - Every fetched page goes through the caller's content callback
// - Visited-URL registry so no page is fetched twice (and cycles end)
// - Optional same-domain restriction and a global page limit
// - The first error anywhere aborts the whole crawl
//
// Submodules:
// - engine: the Crawler itself
// - summary: what a successful crawl reports back
// =============================================================================

mod engine;
mod summary;

pub use engine::{run, Crawler};
pub use summary::CrawlSummary;
