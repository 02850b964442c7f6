// src/fetch/http.rs
// =============================================================================
// The HTTP side of the crawler.
//
// HttpClient is the only thing the crawler needs from HTTP: "GET this URL
// with this timeout, give me the status code and the body". ReqwestClient is
// the real implementation; tests provide their own.
//
// Rust concepts:
// - async-trait: lets a trait have async methods and still be used as
//   `dyn HttpClient`
// - Send + Sync: the client can be shared across tokio tasks
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::BoxError;

// Status code and full body of a GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Performs a GET request. Errors mean the request itself failed
    /// (network, DNS, timeout); any status code is a successful response.
    async fn get(&self, url: &Url, timeout: Duration) -> Result<HttpResponse, BoxError>;
}

// reqwest-backed client
//
// Client is cheap to clone (it's a reference counter around a connection
// pool), so one ReqwestClient can serve the whole crawl.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, BoxError> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5)) // Follow up to 5 redirects
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url, timeout: Duration) -> Result<HttpResponse, BoxError> {
        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                debug!(%url, kind = describe_error(&e), "request failed");
                e
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

// Short description of why a reqwest request failed, for the logs
fn describe_error(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else if error.is_redirect() {
        "too many redirects"
    } else if error.is_connect() {
        "connection failed"
    } else if error.is_body() || error.is_decode() {
        "bad response body"
    } else {
        "other"
    }
}
