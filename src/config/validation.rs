use crate::config::types::{Config, CrawlerConfig, HttpConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use regex::Regex;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_crawler_config(&config.crawler)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http or https, got '{}'",
            base.scheme()
        )));
    }

    if !config.listing_url_template.contains("{page}") {
        return Err(ConfigError::Validation(
            "listing-url-template must contain a {page} placeholder".to_string(),
        ));
    }

    Regex::new(&config.article_pattern)
        .map_err(|e| ConfigError::InvalidPattern(format!("article-pattern: {}", e)))?;

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.discovery_workers < 1 || config.discovery_workers > 64 {
        return Err(ConfigError::Validation(format!(
            "discovery-workers must be between 1 and 64, got {}",
            config.discovery_workers
        )));
    }

    if config.crawl_workers < 1 || config.crawl_workers > 64 {
        return Err(ConfigError::Validation(format!(
            "crawl-workers must be between 1 and 64, got {}",
            config.crawl_workers
        )));
    }

    if config.delay_max_ms < config.delay_min_ms {
        return Err(ConfigError::Validation(format!(
            "delay-max-ms ({}) must be >= delay-min-ms ({})",
            config.delay_max_ms, config.delay_min_ms
        )));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.file_name.is_empty() {
        return Err(ConfigError::Validation(
            "output file-name cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_zero_discovery_workers() {
        let mut config = Config::default();
        config.crawler.discovery_workers = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_zero_crawl_workers() {
        let mut config = Config::default();
        config.crawler.crawl_workers = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_inverted_delay_bounds() {
        let mut config = Config::default();
        config.crawler.delay_min_ms = 2000;
        config.crawler.delay_max_ms = 1000;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_accepts_equal_delay_bounds() {
        let mut config = Config::default();
        config.crawler.delay_min_ms = 500;
        config.crawler.delay_max_ms = 500;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let mut config = Config::default();
        config.site.base_url = "not a url".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = Config::default();
        config.site.base_url = "ftp://udn.com".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_template_without_page_placeholder() {
        let mut config = Config::default();
        config.site.listing_url_template = "https://udn.com/api/more?page=1".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_article_pattern() {
        let mut config = Config::default();
        config.site.article_pattern = r"/news/story/(\d+".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_rejects_empty_output_fields() {
        let mut config = Config::default();
        config.output.directory = String::new();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.output.file_name = String::new();
        assert!(validate(&config).is_err());
    }
}
