//! Crawl worker pool
//!
//! M workers drain the frontier after discovery has fully joined. Because
//! no producer exists during this phase, an empty pop means the run is
//! done; workers exit immediately without polling. A non-success article
//! fetch is fatal for the whole run, mirroring the listing policy; an
//! extraction miss only skips that URL.

use crate::crawler::fetcher::fetch_page;
use crate::crawler::frontier::Frontier;
use crate::crawler::limiter::RateLimiter;
use crate::crawler::parser::extract_article;
use crate::crawler::results::ResultSet;
use crate::url::article_url;
use reqwest::Client;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use url::Url;

/// State shared by all crawl workers
pub(crate) struct CrawlShared {
    pub client: Client,
    pub limiter: RateLimiter,
    pub frontier: Arc<Frontier>,
    pub results: Arc<ResultSet>,

    /// Base URL article paths are resolved against
    pub base_url: Url,

    /// Fetched pages with no recognizable article structure
    pub skipped: AtomicUsize,

    /// Set by any worker that hit a fatal fetch failure
    pub abort: Arc<AtomicBool>,
}

/// One crawl worker's loop
///
/// Pops until the frontier is empty, a peer aborts, or its own fetch fails.
pub(crate) async fn crawl_articles(shared: Arc<CrawlShared>) -> crate::Result<()> {
    loop {
        if shared.abort.load(Ordering::SeqCst) {
            return Ok(());
        }

        // Discovery is fully joined before this pool starts, so empty is
        // unambiguous: no more work.
        let Some(path) = shared.frontier.try_pop() else {
            return Ok(());
        };

        let url = match article_url(&shared.base_url, &path) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(path, error = %e, "unresolvable article path, aborting run");
                shared.abort.store(true, Ordering::SeqCst);
                return Err(e.into());
            }
        };

        shared.limiter.pause().await;

        let body = match fetch_page(&shared.client, url.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "article fetch failed, aborting run");
                shared.abort.store(true, Ordering::SeqCst);
                return Err(e);
            }
        };

        match extract_article(&body) {
            Some(article) => {
                let seq = shared.results.push(article);
                if seq % 50 == 0 {
                    tracing::info!(records = seq, "extraction progress");
                }
            }
            None => {
                shared.skipped.fetch_add(1, Ordering::SeqCst);
                tracing::debug!(url = %url, "no extractable content, skipping");
            }
        }
    }
}
