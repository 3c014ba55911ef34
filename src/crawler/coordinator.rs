//! Crawl coordinator
//!
//! Orchestrates one run: the discovery pool fills the frontier up to the
//! target, every discovery worker is joined (the barrier that guarantees no
//! further frontier writes), then the crawl pool drains the frontier into
//! the result set and is joined in turn. Each run builds fresh frontier and
//! result state.
//!
//! Fatal fetch failures do not kill the process: the failing worker raises
//! a shared abort flag, its peers drain out, and the first error is
//! returned after the whole pool is joined. A crawl-phase failure is
//! wrapped with the number of records collected before it, so callers can
//! tell a partial run from an empty one.

use crate::config::Config;
use crate::crawler::discovery::{discover_links, DiscoveryShared};
use crate::crawler::fetcher::build_http_client;
use crate::crawler::frontier::Frontier;
use crate::crawler::limiter::RateLimiter;
use crate::crawler::results::{ResultSet, SequencedRecord};
use crate::crawler::worker::{crawl_articles, CrawlShared};
use crate::output::CrawlStats;
use crate::url::ArticleLinkMatcher;
use crate::{ConfigError, CrawlError};
use reqwest::Client;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use url::Url;

/// Outcome of a completed crawl run
#[derive(Debug)]
pub struct CrawlReport {
    /// Extracted records in sequence order
    pub records: Vec<SequencedRecord>,

    /// Run counters and timing
    pub stats: CrawlStats,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    client: Client,
    matcher: Arc<ArticleLinkMatcher>,
    limiter: RateLimiter,
    base_url: Url,
}

impl Coordinator {
    /// Creates a new coordinator from a validated configuration
    pub fn new(config: Config) -> crate::Result<Self> {
        let client = build_http_client(&config.http)?;

        let matcher = ArticleLinkMatcher::new(&config.site.article_pattern)
            .map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;

        let base_url = Url::parse(&config.site.base_url)
            .map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;

        let limiter = RateLimiter::new(config.crawler.delay_min_ms, config.crawler.delay_max_ms);

        Ok(Self {
            config: Arc::new(config),
            client,
            matcher: Arc::new(matcher),
            limiter,
            base_url,
        })
    }

    /// Runs one crawl: discovery phase, barrier, crawl phase, barrier
    ///
    /// # Arguments
    ///
    /// * `target` - Number of article URLs to discover before crawling
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - Records in sequence order plus run statistics
    /// * `Err(CrawlError)` - The first fatal failure, after all workers of
    ///   the failing pool have been joined
    pub async fn run(&self, target: usize) -> crate::Result<CrawlReport> {
        let started = Instant::now();

        let frontier = Arc::new(Frontier::new());
        let results = Arc::new(ResultSet::new());
        let abort = Arc::new(AtomicBool::new(false));

        // Discovery phase
        let discovery = Arc::new(DiscoveryShared {
            client: self.client.clone(),
            limiter: self.limiter.clone(),
            matcher: Arc::clone(&self.matcher),
            frontier: Arc::clone(&frontier),
            listing_template: self.config.site.listing_url_template.clone(),
            target,
            capacity: target + self.config.crawler.overshoot,
            next_page: AtomicU32::new(0),
            pages_fetched: AtomicUsize::new(0),
            target_reached: AtomicBool::new(false),
            abort: Arc::clone(&abort),
        });

        tracing::info!(
            target,
            workers = self.config.crawler.discovery_workers,
            "discovery phase started"
        );

        let handles: Vec<JoinHandle<crate::Result<()>>> = (0..self.config.crawler.discovery_workers)
            .map(|_| tokio::spawn(discover_links(Arc::clone(&discovery))))
            .collect();

        // Full join is the barrier: after this, nothing writes the frontier.
        join_pool(handles).await?;

        let urls_discovered = frontier.len();
        let listing_pages_fetched = discovery.pages_fetched.load(Ordering::SeqCst);
        tracing::info!(
            urls = urls_discovered,
            listing_pages = listing_pages_fetched,
            "discovery phase complete"
        );

        // Crawl phase
        let crawl = Arc::new(CrawlShared {
            client: self.client.clone(),
            limiter: self.limiter.clone(),
            frontier: Arc::clone(&frontier),
            results: Arc::clone(&results),
            base_url: self.base_url.clone(),
            skipped: AtomicUsize::new(0),
            abort: Arc::clone(&abort),
        });

        tracing::info!(
            workers = self.config.crawler.crawl_workers,
            "crawl phase started"
        );

        let handles: Vec<JoinHandle<crate::Result<()>>> = (0..self.config.crawler.crawl_workers)
            .map(|_| tokio::spawn(crawl_articles(Arc::clone(&crawl))))
            .collect();

        if let Err(source) = join_pool(handles).await {
            return Err(CrawlError::Aborted {
                records_collected: results.len(),
                source: Box::new(source),
            });
        }

        let records = results.take_records();
        let skipped = crawl.skipped.load(Ordering::SeqCst);
        let stats = CrawlStats {
            target,
            listing_pages_fetched,
            urls_discovered,
            articles_fetched: records.len() + skipped,
            records_extracted: records.len(),
            articles_skipped: skipped,
            elapsed: started.elapsed(),
        };

        tracing::info!(
            records = stats.records_extracted,
            skipped = stats.articles_skipped,
            elapsed_secs = stats.elapsed.as_secs_f64(),
            "crawl complete"
        );

        Ok(CrawlReport { records, stats })
    }
}

/// Awaits every worker of a pool, returning the first error seen
///
/// Every handle is awaited even after an error, so the caller never
/// proceeds while pool tasks are still running.
async fn join_pool(handles: Vec<JoinHandle<crate::Result<()>>>) -> crate::Result<()> {
    let mut first_error = None;

    for handle in handles {
        let outcome = match handle.await {
            Ok(result) => result,
            Err(join_error) => Err(CrawlError::Worker(join_error)),
        };
        if let Err(e) = outcome {
            if first_error.is_none() {
                first_error = Some(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
