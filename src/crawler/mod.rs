//! Crawler module: frontier, worker pools, and run coordination
//!
//! The crawl runs in two phases that never overlap. A discovery pool scans
//! paginated listing pages and fills the shared frontier with article
//! paths; once every discovery worker has been joined, a crawl pool drains
//! the frontier, extracts a record per page, and accumulates the results.

mod coordinator;
mod discovery;
mod fetcher;
mod frontier;
mod limiter;
mod parser;
mod results;
mod worker;

pub use coordinator::{Coordinator, CrawlReport};
pub use fetcher::{build_http_client, fetch_page};
pub use frontier::Frontier;
pub use limiter::RateLimiter;
pub use parser::{extract_article, MEMBER_ONLY_CONTENT};
pub use results::{Article, ResultSet, SequencedRecord};

use crate::config::Config;

/// Runs a complete crawl
///
/// This is the main entry point: it builds a coordinator from the
/// configuration and runs the two-phase crawl for `target` articles.
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `target` - Number of article URLs to discover before crawling
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Extracted records plus run statistics
/// * `Err(CrawlError)` - Configuration or fatal fetch failure
pub async fn crawl(config: Config, target: usize) -> crate::Result<CrawlReport> {
    Coordinator::new(config)?.run(target).await
}
