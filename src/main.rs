// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Run the crawl
// 4. Print the summary and exit with the proper code
//    (0 = success, 1 = crawl aborted, 2 = invalid invocation / internal error)
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use page_crawler::{logging, CrawlError, CrawlSummary};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let params = cli.crawl_parameters();

    match page_crawler::run(&cli.url, params).await {
        Ok(summary) => {
            print_summary(&summary, cli.json)?;
            Ok(0)
        }
        // Bad parameters are the caller's mistake, not a failed crawl
        Err(CrawlError::InvalidConfig(reason)) => {
            eprintln!("Error: {}", reason);
            Ok(2)
        }
        Err(e) => {
            eprintln!("❌ Crawl aborted: {}", e);
            Ok(1)
        }
    }
}

fn print_summary(summary: &CrawlSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    for url in &summary.urls {
        println!("   {}", url);
    }
    println!();
    println!("✅ Crawled {} page(s) from {}", summary.pages_visited, summary.seed_url);
    Ok(())
}
