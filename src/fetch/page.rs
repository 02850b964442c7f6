// src/fetch/page.rs
// =============================================================================
// Fetches a single page and validates its status code.
//
// A status outside the accepted range is a hard failure for that page (the
// crawler aborts). It is never retried.
// =============================================================================

use std::sync::Arc;
use std::time::Duration;
use url::Url;

use super::HttpClient;
use crate::config::CrawlParameters;
use crate::error::CrawlError;

pub struct PageFetcher {
    client: Arc<dyn HttpClient>,
    timeout: Duration,
    status_min: u16,
    status_max: u16,
}

impl PageFetcher {
    pub fn new(client: Arc<dyn HttpClient>, params: &CrawlParameters) -> Self {
        Self {
            client,
            timeout: params.timeout,
            status_min: params.status_min,
            status_max: params.status_max,
        }
    }

    // Returns the full response body of `url`
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>, CrawlError> {
        let response = self
            .client
            .get(url, self.timeout)
            .await
            .map_err(CrawlError::Transport)?;

        if response.status < self.status_min || response.status > self.status_max {
            return Err(CrawlError::BadStatus {
                code: response.status,
                min: self.status_min,
                max: self.status_max,
            });
        }

        Ok(response.body)
    }
}
