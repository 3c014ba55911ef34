//! HTTP fetcher implementation
//!
//! One shared client serves both pools. The fetch contract is deliberately
//! strict: any non-success status is an error, and the caller decides that
//! it is fatal for the whole run. There is no retry, no backoff, and no
//! manual redirect handling.

use crate::config::HttpConfig;
use crate::CrawlError;
use reqwest::Client;
use std::time::Duration;

/// Builds the shared HTTP client
///
/// # Arguments
///
/// * `config` - HTTP client configuration (User-Agent, timeouts)
///
/// # Example
///
/// ```no_run
/// use breaknews::config::HttpConfig;
/// use breaknews::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body
///
/// # Returns
///
/// * `Ok(String)` - The response body on a success status
/// * `Err(CrawlError::Http)` - Any non-success status
/// * `Err(CrawlError::Network)` - Connection, TLS, or timeout failures
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, CrawlError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| CrawlError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CrawlError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| CrawlError::Network {
        url: url.to_string(),
        source,
    })
}
