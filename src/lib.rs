// src/lib.rs
// =============================================================================
// page-crawler: a recursive web crawler.
//
// Starting from a seed URL it fetches pages, extracts their links and follows
// every link it hasn't seen yet, handing each page body to a content callback.
// The first error anywhere (bad status, network failure, rejected content,
// malformed link) aborts the crawl.
//
// Modules, leaves first:
// - domain: "same site" rule for hosts
// - fetch: HTTP client seam + status-checking page fetcher
// - extract: HTML parsing seam + link extraction/resolution
// - registry: set of visited URLs
// - crawl: the recursive crawler and its entry point `run`
// =============================================================================

pub mod config;
pub mod crawl;
pub mod domain;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod registry;

pub use config::{ContentCallback, CrawlParameters};
pub use crawl::{run, CrawlSummary, Crawler};
pub use error::{BoxError, CrawlError};
pub use extract::{AnchorSource, LinkExtractor, ScraperAnchors};
pub use fetch::{HttpClient, HttpResponse, PageFetcher, ReqwestClient};
pub use registry::VisitedRegistry;
