// src/crawl/engine.rs
// =============================================================================
// This module implements the recursive, depth-first crawl.
//
// How it works, for every URL:
// 1. Skip it if the registry says it was already visited (this is what
//    breaks cycles like a -> b -> a)
// 2. Fetch the page, reject bad status codes
// 3. Hand the body to the content callback
// 4. Mark the URL as visited
// 5. Extract the page's links
// 6. For each link, in order: stop if the page limit is exceeded, otherwise
//    crawl the link completely before moving on to the next one
//
// Any error (fetch, callback, link extraction) is wrapped with the URL of the
// page that failed and aborts the whole crawl. There is no "skip and continue".
//
// Rust concepts:
// - BoxFuture: an async fn can't call itself directly (its future would have
//   infinite size), so the recursive step returns a boxed future
// - Arc<dyn Trait>: shared, swappable collaborators (HTTP client, HTML parser)
// - tracing spans: every log line inside a crawl step carries its URL
// =============================================================================

use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, Instrument};
use url::Url;

use super::CrawlSummary;
use crate::config::CrawlParameters;
use crate::error::CrawlError;
use crate::extract::{AnchorSource, LinkExtractor, ScraperAnchors};
use crate::fetch::{HttpClient, PageFetcher, ReqwestClient};
use crate::registry::VisitedRegistry;

pub struct Crawler {
    fetcher: PageFetcher,
    extractor: LinkExtractor,
    registry: Arc<VisitedRegistry>,
    params: CrawlParameters,
}

// Crawls `seed_url` with the default HTTP client and HTML parser
//
// Returns the list of visited pages, or the first error that stopped the
// crawl.
pub async fn run(seed_url: &str, params: CrawlParameters) -> Result<CrawlSummary, CrawlError> {
    let client = ReqwestClient::new().map_err(CrawlError::Transport)?;
    let anchors = ScraperAnchors::new()?;

    let crawler = Crawler::new(Arc::new(client), Arc::new(anchors), params)?;
    crawler.crawl(seed_url).await?;

    Ok(crawler.summary(seed_url))
}

impl Crawler {
    pub fn new(
        client: Arc<dyn HttpClient>,
        anchors: Arc<dyn AnchorSource>,
        params: CrawlParameters,
    ) -> Result<Self, CrawlError> {
        params.validate()?;

        Ok(Self {
            fetcher: PageFetcher::new(client, &params),
            extractor: LinkExtractor::new(anchors),
            registry: Arc::new(VisitedRegistry::new()),
            params,
        })
    }

    pub fn registry(&self) -> &Arc<VisitedRegistry> {
        &self.registry
    }

    pub fn summary(&self, seed_url: &str) -> CrawlSummary {
        CrawlSummary::from_registry(seed_url, &self.registry)
    }

    /// Crawls `url` and, recursively, every eligible link reachable from it.
    ///
    /// Reaching the page limit is not an error: the remaining links of the
    /// current page are dropped and the call returns `Ok(())`.
    pub fn crawl<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<(), CrawlError>> {
        let span = info_span!("crawl", parent_url = url, links_limit = self.params.links_limit);

        async move {
            let links = match self.visit(url).await.map_err(|e| e.at(url))? {
                Some(links) => links,
                None => return Ok(()),
            };

            for link in &links {
                if self.enough_links() {
                    info!(visited = self.registry.len(), "this is enough links");
                    return Ok(());
                }
                self.crawl(link).await?;
            }

            Ok(())
        }
        .instrument(span)
        .boxed()
    }

    // Fetches one page, runs the callback, marks it visited and returns its
    // links. None means the page was already visited.
    async fn visit(&self, url: &str) -> Result<Option<Vec<String>>, CrawlError> {
        let page_url = parse_page_url(url)?;

        // Check-then-mark is not atomic, see registry.rs
        if self.registry.is_visited(page_url.as_str()) {
            debug!(visited = self.registry.len(), "already requested, skip it");
            return Ok(None);
        }

        let started = Instant::now();
        info!(visited = self.registry.len(), "requesting");

        let bytes = self.fetcher.fetch(&page_url).await?;
        let body = String::from_utf8_lossy(&bytes);

        (self.params.on_page)(&*body).map_err(CrawlError::Callback)?;

        self.registry.mark_visited(page_url.as_str());

        let links = self
            .extractor
            .extract(&page_url, &body, self.params.only_same_host)?;

        info!(
            links = links.len(),
            elapsed = ?started.elapsed(),
            "requested"
        );

        Ok(Some(links))
    }

    fn enough_links(&self) -> bool {
        self.params.links_limit > 0 && self.registry.len() > self.params.links_limit
    }
}

// Only absolute http(s) URLs with a host can be crawled
fn parse_page_url(url: &str) -> Result<Url, CrawlError> {
    let invalid = |reason: String| CrawlError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("URL has no host".to_string()));
    }

    Ok(parsed)
}
