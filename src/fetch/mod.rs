// src/fetch/mod.rs
// =============================================================================
// This module downloads pages.
//
// Submodules:
// - http: the HTTP client seam (a trait) and its reqwest implementation
// - page: the page fetcher, which checks the status code of each response
//
// The crawler only ever talks to the HttpClient trait, so tests can swap in
// an in-memory client and never touch the network.
// =============================================================================

mod http;
mod page;

pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use page::PageFetcher;
