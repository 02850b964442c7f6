// src/extract/mod.rs
// =============================================================================
// This module turns a page body into the list of links to crawl next.
//
// Submodules:
// - html: the HTML parsing seam (AnchorSource) and its scraper implementation
// - links: trims, parses, filters and resolves every href into an absolute URL
// =============================================================================

mod html;
mod links;

pub use html::{AnchorSource, ScraperAnchors};
pub use links::LinkExtractor;
