use serde::Deserialize;

/// Main configuration structure for breaknews
///
/// Every field carries a default matching the site the crawler was written
/// for, so the program runs without a configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            crawler: CrawlerConfig::default(),
            http: HttpConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL that article paths are resolved against
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Listing endpoint template; `{page}` is replaced with the page number
    #[serde(rename = "listing-url-template")]
    pub listing_url_template: String,

    /// Regex matched against raw listing bodies to find article paths
    #[serde(rename = "article-pattern")]
    pub article_pattern: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://udn.com".to_string(),
            listing_url_template:
                "https://udn.com/api/more?page={page}&id=&channelId=1&cate_id=0&type=breaknews"
                    .to_string(),
            article_pattern: r"/news/story/\d+/\d+".to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Number of workers scanning listing pages
    #[serde(rename = "discovery-workers")]
    pub discovery_workers: usize,

    /// Number of workers fetching article pages
    #[serde(rename = "crawl-workers")]
    pub crawl_workers: usize,

    /// Lower bound of the randomized per-request pause (milliseconds)
    #[serde(rename = "delay-min-ms")]
    pub delay_min_ms: u64,

    /// Upper bound of the randomized per-request pause (milliseconds)
    #[serde(rename = "delay-max-ms")]
    pub delay_max_ms: u64,

    /// How many URLs beyond the target the frontier may accept while a
    /// worker finishes its current listing batch
    pub overshoot: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            discovery_workers: 5,
            crawl_workers: 5,
            delay_min_ms: 1000,
            delay_max_ms: 2000,
            overshoot: 0,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Overall request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connect timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/84.0.4147.125 Safari/537.36"
                .to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the results file is written into (created if absent)
    pub directory: String,

    /// Name of the results file
    #[serde(rename = "file-name")]
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "udn-news".to_string(),
            file_name: "news.csv".to_string(),
        }
    }
}
