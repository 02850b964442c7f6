// src/extract/links.rs
// =============================================================================
// Extracts the outbound links of a page.
//
// How it works, for every href on the page (in document order):
// 1. Trim whitespace, skip empty values
// 2. Resolve it against the page URL. A link without a host takes the page's
//    scheme and host and keeps its own path, rooted at "/"; a link without a
//    scheme takes the page's scheme. An href that is not a valid URL (bad
//    authority, broken %-escape) fails the WHOLE page: the first bad link
//    wins, we don't skip it and carry on
// 3. Drop links without a host (mailto:, javascript:, data:, ...), they
//    can't be crawled
// 4. In same-host mode, drop links to another main domain
//
// Rust concepts:
// - Iterator adapters: filter_map/map to build the pipeline
// - collect::<Result<Vec<_>, _>>(): stops at the first Err
// =============================================================================

use std::sync::Arc;
use tracing::debug;
use url::{ParseError, Url};

use super::AnchorSource;
use crate::domain::same_main_domain;
use crate::error::CrawlError;

pub struct LinkExtractor {
    anchors: Arc<dyn AnchorSource>,
}

impl LinkExtractor {
    pub fn new(anchors: Arc<dyn AnchorSource>) -> Self {
        Self { anchors }
    }

    pub fn extract(
        &self,
        page_url: &Url,
        body: &str,
        only_same_host: bool,
    ) -> Result<Vec<String>, CrawlError> {
        let page_host = page_url.host_str().unwrap_or_default();

        self.anchors
            .anchor_hrefs(body)?
            .iter()
            .map(|href| href.trim())
            .filter(|href| !href.is_empty())
            .map(|href| resolve(page_url, href))
            .filter_map(|resolved| match resolved {
                Ok(link) if keep_link(&link, page_host, only_same_host) => {
                    Some(Ok(link.to_string()))
                }
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            })
            .collect()
    }
}

// Resolves a possibly-relative href against the page URL
//
// Only the scheme and host are borrowed from the page, never its path.
// Examples with page = "https://example.com/docs/intro":
//   "/a"                 -> "https://example.com/a"
//   "b"                  -> "https://example.com/b"
//   "?q=1"               -> "https://example.com/?q=1"
//   "//cdn.example.com/" -> "https://cdn.example.com/"
//   "http://other.com/"  -> "http://other.com/"
fn resolve(page_url: &Url, href: &str) -> Result<Url, CrawlError> {
    let invalid = |reason: String| CrawlError::LinkParse {
        href: href.to_string(),
        reason,
    };

    check_escapes(href).map_err(invalid)?;

    match Url::parse(href) {
        Ok(link) => Ok(link),
        Err(ParseError::RelativeUrlWithoutBase) if href.starts_with("//") => page_url.join(href),
        Err(ParseError::RelativeUrlWithoutBase) => host_root(page_url).join(&rooted(href)),
        Err(e) => Err(e),
    }
    .map_err(|e| invalid(e.to_string()))
}

// The page URL reduced to scheme, host and port
fn host_root(page_url: &Url) -> Url {
    let mut root = page_url.clone();
    root.set_path("/");
    root.set_query(None);
    root.set_fragment(None);
    let _ = root.set_username("");
    let _ = root.set_password(None);
    root
}

fn rooted(href: &str) -> String {
    if href.starts_with('/') {
        href.to_string()
    } else {
        format!("/{}", href)
    }
}

// Every '%' outside the query string must start a two-digit hex escape
fn check_escapes(href: &str) -> Result<(), String> {
    let (rest, fragment) = href.split_once('#').unwrap_or((href, ""));
    let path = rest.split_once('?').map_or(rest, |(path, _)| path);

    for part in [path, fragment] {
        if let Some(escape) = invalid_escape(part) {
            return Err(format!("invalid URL escape {:?}", escape));
        }
    }
    Ok(())
}

fn invalid_escape(part: &str) -> Option<String> {
    let bytes = part.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == b'%')
        .find_map(|(idx, _)| match bytes.get(idx + 1..idx + 3) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => None,
            _ => Some(part[idx..].chars().take(3).collect()),
        })
}

fn keep_link(link: &Url, page_host: &str, only_same_host: bool) -> bool {
    let Some(host) = link.host_str() else {
        debug!(%link, "skipping link without host");
        return false;
    };

    if only_same_host && !same_main_domain(page_host, host) {
        debug!(%link, "skipping link to another domain");
        return false;
    }

    true
}
