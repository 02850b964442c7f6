// src/error.rs
// =============================================================================
// Errors produced while crawling.
//
// Every error here is fatal to the whole crawl: nothing is retried and
// nothing is downgraded to a warning. The page that failed wraps its error
// with its own URL (CrawlError::Page) and the recursion hands that value
// back up to the caller untouched.
//
// Rust concepts:
// - thiserror: derives Display and std::error::Error for our enum
// - #[source]: links an error to the lower-level error that caused it
// - Box: lets an enum variant hold another CrawlError (recursive type)
// =============================================================================

use thiserror::Error;

// Error type returned by the injected collaborators (HTTP client, HTML parser)
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// Network or timeout failure while requesting a page
    #[error("request failed: {0}")]
    Transport(#[source] BoxError),

    /// The response status fell outside the accepted range
    #[error("bad status code: {code}, supported status code range: {min} - {max}")]
    BadStatus { code: u16, min: u16, max: u16 },

    /// The page body could not be parsed as HTML
    #[error("failed to parse page: {0}")]
    Parse(#[source] BoxError),

    /// A single href on the page is not a valid URL reference
    #[error("invalid link {href:?}: {reason}")]
    LinkParse { href: String, reason: String },

    /// The content callback rejected the page body
    #[error("content check failed: {0}")]
    Callback(#[source] anyhow::Error),

    /// The URL handed to the crawler is not an absolute http(s) URL
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The crawl parameters contradict each other
    #[error("invalid crawl parameters: {0}")]
    InvalidConfig(String),

    /// Context wrapper: the page at `url` failed with `source`
    #[error("for url {url}: {source}")]
    Page {
        url: String,
        #[source]
        source: Box<CrawlError>,
    },
}

impl CrawlError {
    // Wraps this error with the URL of the page it happened on
    pub fn at(self, url: impl Into<String>) -> Self {
        CrawlError::Page {
            url: url.into(),
            source: Box::new(self),
        }
    }

    /// Strips any `Page` context and returns the underlying failure.
    pub fn root_cause(&self) -> &CrawlError {
        match self {
            CrawlError::Page { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// URL of the page that failed, if the error carries one.
    pub fn page_url(&self) -> Option<&str> {
        match self {
            CrawlError::Page { url, .. } => Some(url),
            _ => None,
        }
    }
}
