//! Run statistics
//!
//! Counters filled in by the coordinator at the end of a run, plus a
//! plain-text report for the CLI.

use std::time::Duration;

/// Summary counters for one crawl run
#[derive(Debug, Clone, Default)]
pub struct CrawlStats {
    /// Number of article URLs the caller asked for
    pub target: usize,

    /// Listing pages fetched during discovery
    pub listing_pages_fetched: usize,

    /// Article URLs pushed onto the frontier
    pub urls_discovered: usize,

    /// Article pages fetched during the crawl phase
    pub articles_fetched: usize,

    /// Records successfully extracted
    pub records_extracted: usize,

    /// Fetched pages with no recognizable article structure
    pub articles_skipped: usize,

    /// Wall-clock duration of the whole run
    pub elapsed: Duration,
}

impl CrawlStats {
    /// Share of fetched articles that produced a record, as a percentage
    pub fn extraction_rate(&self) -> f64 {
        if self.articles_fetched == 0 {
            return 0.0;
        }
        (self.records_extracted as f64 / self.articles_fetched as f64) * 100.0
    }
}

/// Prints a run summary to stdout
pub fn print_stats(stats: &CrawlStats) {
    println!("=== Crawl Summary ===");
    println!("  Target articles: {}", stats.target);
    println!("  Listing pages fetched: {}", stats.listing_pages_fetched);
    println!("  URLs discovered: {}", stats.urls_discovered);
    println!("  Articles fetched: {}", stats.articles_fetched);
    println!(
        "  Records extracted: {} ({:.1}%)",
        stats.records_extracted,
        stats.extraction_rate()
    );
    println!("  Skipped (no content): {}", stats.articles_skipped);
    println!("  Elapsed: {:.2}s", stats.elapsed.as_secs_f64());
}
