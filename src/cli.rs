// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use anyhow::{bail, Result};
use clap::Parser;
use std::time::Duration;

use page_crawler::CrawlParameters;

#[derive(Parser, Debug)]
#[command(
    name = "page-crawler",
    version,
    about = "Recursively crawl a website and check the content of every page",
    long_about = "page-crawler starts from a URL, follows every link it finds and runs a content \
                  check on each page. The first failing page (bad status code, network error, \
                  failed content check) stops the crawl with a non-zero exit code."
)]
pub struct Cli {
    /// URL to start crawling from (e.g., https://example.com)
    pub url: String,

    /// Timeout for each request, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Lowest accepted HTTP status code
    #[arg(long, default_value_t = 200)]
    pub status_min: u16,

    /// Highest accepted HTTP status code
    #[arg(long, default_value_t = 299)]
    pub status_max: u16,

    /// Follow links to other domains too
    ///
    /// By default only links whose main domain (last two labels of the
    /// host, e.g. example.com) matches the page's are followed.
    #[arg(long)]
    pub all_hosts: bool,

    /// Stop once more than this many pages were visited (0 = no limit)
    #[arg(long, default_value_t = 0)]
    pub links_limit: usize,

    /// Fail if a page does NOT contain this text
    #[arg(long)]
    pub require_text: Option<String>,

    /// Fail if a page contains this text
    #[arg(long)]
    pub reject_text: Option<String>,

    /// Output the crawl summary in JSON format
    #[arg(long)]
    pub json: bool,

    /// Print debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn crawl_parameters(&self) -> CrawlParameters {
        let check = ContentCheck {
            require: self.require_text.clone(),
            reject: self.reject_text.clone(),
        };

        CrawlParameters::new(move |body: &str| check.run(body))
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_status_range(self.status_min, self.status_max)
            .with_only_same_host(!self.all_hosts)
            .with_links_limit(self.links_limit)
    }
}

// The content callback the CLI hands to the crawler
#[derive(Debug, Clone, Default)]
struct ContentCheck {
    require: Option<String>,
    reject: Option<String>,
}

impl ContentCheck {
    fn run(&self, body: &str) -> Result<()> {
        if let Some(required) = &self.require {
            if !body.contains(required.as_str()) {
                bail!("page does not contain required text {:?}", required);
            }
        }
        if let Some(rejected) = &self.reject {
            if body.contains(rejected.as_str()) {
                bail!("page contains rejected text {:?}", rejected);
            }
        }
        Ok(())
    }
}
