//! Link-discovery pool
//!
//! N workers share one listing-page counter and one frontier. Each worker
//! claims a page number atomically (no page is ever requested twice),
//! fetches the listing, and pushes every matching article path until the
//! frontier reaches the target. A non-success listing fetch is fatal for
//! the whole run: the worker raises the abort flag and returns the error;
//! peers observe the flag at the top of their loop and exit cleanly.

use crate::crawler::fetcher::fetch_page;
use crate::crawler::frontier::Frontier;
use crate::crawler::limiter::RateLimiter;
use crate::url::{listing_url, ArticleLinkMatcher};
use reqwest::Client;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;

/// State shared by all discovery workers
pub(crate) struct DiscoveryShared {
    pub client: Client,
    pub limiter: RateLimiter,
    pub matcher: Arc<ArticleLinkMatcher>,
    pub frontier: Arc<Frontier>,

    /// Listing endpoint template with a `{page}` placeholder
    pub listing_template: String,

    /// Number of URLs the caller asked for
    pub target: usize,

    /// `target` plus the configured overshoot allowance
    pub capacity: usize,

    /// Last claimed listing page number; claimed with fetch_add
    pub next_page: AtomicU32,

    /// Listing pages fetched successfully (for the final report)
    pub pages_fetched: AtomicUsize,

    /// Set once the frontier holds at least `target` entries
    pub target_reached: AtomicBool,

    /// Set by any worker that hit a fatal fetch failure
    pub abort: Arc<AtomicBool>,
}

/// One discovery worker's loop
///
/// Runs until the target is reached, a peer aborts, or its own fetch fails.
pub(crate) async fn discover_links(shared: Arc<DiscoveryShared>) -> crate::Result<()> {
    while !shared.target_reached.load(Ordering::SeqCst) && !shared.abort.load(Ordering::SeqCst) {
        // Claiming and fetching are separate steps, so pages may be fetched
        // out of numeric order across workers; each number is claimed once.
        let page = shared.next_page.fetch_add(1, Ordering::SeqCst) + 1;
        let url = listing_url(&shared.listing_template, page);

        shared.limiter.pause().await;

        let body = match fetch_page(&shared.client, &url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(page, error = %e, "listing fetch failed, aborting run");
                shared.abort.store(true, Ordering::SeqCst);
                return Err(e);
            }
        };
        shared.pages_fetched.fetch_add(1, Ordering::SeqCst);

        let paths = shared.matcher.extract_paths(&body);
        tracing::debug!(page, found = paths.len(), "scanned listing page");

        for path in paths {
            if shared.frontier.push_within(path, shared.capacity) {
                let len = shared.frontier.len();
                if len % 50 == 0 {
                    tracing::info!(urls = len, "frontier progress");
                }
                if len >= shared.target {
                    shared.target_reached.store(true, Ordering::SeqCst);
                }
            } else {
                // Capacity reached; the rest of this batch is discarded.
                shared.target_reached.store(true, Ordering::SeqCst);
                break;
            }
        }
    }

    Ok(())
}
