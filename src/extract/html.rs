// src/extract/html.rs
// =============================================================================
// Reads the href of every anchor element in an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser), which recovers from
//   broken markup instead of failing
// =============================================================================

use scraper::{Html, Selector};

use crate::error::CrawlError;

pub trait AnchorSource: Send + Sync {
    /// Returns the raw `href` value of every anchor in `body`, in document
    /// order. Anchors without an `href` attribute are left out.
    fn anchor_hrefs(&self, body: &str) -> Result<Vec<String>, CrawlError>;
}

pub struct ScraperAnchors {
    anchors: Selector,
}

impl ScraperAnchors {
    pub fn new() -> Result<Self, CrawlError> {
        let anchors = Selector::parse("a").map_err(|e| {
            CrawlError::Parse(format!("invalid anchor selector: {:?}", e).into())
        })?;
        Ok(Self { anchors })
    }
}

impl AnchorSource for ScraperAnchors {
    fn anchor_hrefs(&self, body: &str) -> Result<Vec<String>, CrawlError> {
        let document = Html::parse_document(body);

        let hrefs = document
            .select(&self.anchors)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect();

        Ok(hrefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(html: &str) -> Vec<String> {
        ScraperAnchors::new().unwrap().anchor_hrefs(html).unwrap()
    }

    #[test]
    fn test_document_order() {
        let html = r#"
            <p><a href="/first">1</a></p>
            <div><a href="https://example.com/second">2</a></div>
            <a href="third">3</a>
        "#;
        assert_eq!(hrefs(html), vec!["/first", "https://example.com/second", "third"]);
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">Top</a><a href="/docs">Docs</a>"#;
        assert_eq!(hrefs(html), vec!["/docs"]);
    }

    #[test]
    fn test_broken_markup_still_parses() {
        let html = r#"<div><a href="/ok">unclosed <span></div></p>"#;
        assert_eq!(hrefs(html), vec!["/ok"]);
    }

    #[test]
    fn test_raw_values_are_untouched() {
        // Trimming and resolution happen in the link extractor
        let html = r#"<a href="  /spaced  ">x</a><a href="">empty</a>"#;
        assert_eq!(hrefs(html), vec!["  /spaced  ", ""]);
    }
}
