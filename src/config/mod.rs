//! Configuration module for breaknews
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every setting has a default, so a missing or partial file is fine.
//!
//! # Example
//!
//! ```no_run
//! use breaknews::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("breaknews.toml")).unwrap();
//! println!("Crawl workers: {}", config.crawler.crawl_workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, HttpConfig, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::load_config;

// Re-export validation for callers that build configs in code
pub use validation::validate;
