//! URL handling module for breaknews
//!
//! Builds listing-page URLs from the configured template and resolves
//! discovered article paths against the base URL.

mod matcher;

pub use matcher::ArticleLinkMatcher;

use url::Url;

/// Builds the listing-page URL for a page number
///
/// The template's `{page}` placeholder is replaced with the page number;
/// validation guarantees the placeholder is present.
pub fn listing_url(template: &str, page: u32) -> String {
    template.replace("{page}", &page.to_string())
}

/// Resolves an article path against the site base URL
///
/// # Arguments
///
/// * `base` - The parsed base URL (e.g. `https://udn.com`)
/// * `path` - A root-relative article path (e.g. `/news/story/7331/5555001`)
pub fn article_url(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    base.join(path)
}
