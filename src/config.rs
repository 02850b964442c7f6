// src/config.rs
// =============================================================================
// Per-run crawl parameters.
//
// A CrawlParameters value is built once (by the CLI or by a library user),
// validated, and then shared unchanged by every recursive crawl call.
//
// Rust concepts:
// - Arc<dyn Fn>: a shareable closure, so the content callback can be any
//   function or closure the caller likes
// - Builder-style setters: methods that take `self` and return `Self`
// =============================================================================

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::CrawlError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_STATUS_MIN: u16 = 200;
pub const DEFAULT_STATUS_MAX: u16 = 299;

/// Called once with the body of every page the crawl fetches.
/// Returning an error aborts the whole crawl.
pub type ContentCallback = Arc<dyn Fn(&str) -> anyhow::Result<()> + Send + Sync>;

#[derive(Clone)]
pub struct CrawlParameters {
    /// Timeout for each HTTP request
    pub timeout: Duration,
    /// Lowest accepted status code (inclusive)
    pub status_min: u16,
    /// Highest accepted status code (inclusive)
    pub status_max: u16,
    /// Only follow links whose main domain matches the page's
    pub only_same_host: bool,
    /// Stop descending once more than this many pages were visited (0 = no limit)
    pub links_limit: usize,
    pub on_page: ContentCallback,
}

impl CrawlParameters {
    // Defaults: 10s timeout, 2xx accepted, same host only, no limit
    pub fn new<F>(on_page: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            timeout: DEFAULT_TIMEOUT,
            status_min: DEFAULT_STATUS_MIN,
            status_max: DEFAULT_STATUS_MAX,
            only_same_host: true,
            links_limit: 0,
            on_page: Arc::new(on_page),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_status_range(mut self, min: u16, max: u16) -> Self {
        self.status_min = min;
        self.status_max = max;
        self
    }

    pub fn with_only_same_host(mut self, only_same_host: bool) -> Self {
        self.only_same_host = only_same_host;
        self
    }

    pub fn with_links_limit(mut self, links_limit: usize) -> Self {
        self.links_limit = links_limit;
        self
    }

    pub fn accepts_status(&self, code: u16) -> bool {
        (self.status_min..=self.status_max).contains(&code)
    }

    pub fn validate(&self) -> Result<(), CrawlError> {
        if self.status_min > self.status_max {
            return Err(CrawlError::InvalidConfig(format!(
                "status code range is empty: {} - {}",
                self.status_min, self.status_max
            )));
        }
        if self.timeout.is_zero() {
            return Err(CrawlError::InvalidConfig("timeout must be greater than zero".into()));
        }
        Ok(())
    }
}

// The callback is opaque, so Debug is written by hand
impl fmt::Debug for CrawlParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrawlParameters")
            .field("timeout", &self.timeout)
            .field("status_min", &self.status_min)
            .field("status_max", &self.status_max)
            .field("only_same_host", &self.only_same_host)
            .field("links_limit", &self.links_limit)
            .finish_non_exhaustive()
    }
}
