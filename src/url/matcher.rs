//! Article-path extraction from raw listing bodies
//!
//! Listing responses are JSON-ish text with escaped slashes; rather than
//! parse the payload structurally, article paths are pulled out with a
//! regex after stripping the backslash escapes.

use regex::Regex;

/// Matches article paths inside raw listing-page bodies
#[derive(Debug, Clone)]
pub struct ArticleLinkMatcher {
    pattern: Regex,
}

impl ArticleLinkMatcher {
    /// Compiles the article-path pattern
    ///
    /// # Arguments
    ///
    /// * `pattern` - Regex matching article paths, e.g. `/news/story/\d+/\d+`
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Extracts all article paths from a raw listing body
    ///
    /// Backslash escape characters are removed first (the listing endpoint
    /// returns `\/news\/story\/...`), then every match is returned in
    /// document order. Duplicates are preserved.
    pub fn extract_paths(&self, body: &str) -> Vec<String> {
        let cleaned = body.replace('\\', "");
        self.pattern
            .find_iter(&cleaned)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
