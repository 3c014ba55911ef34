//! Article field extraction
//!
//! Two strategies, tried in order:
//! 1. Structured DOM: pages with a `section[itemprop="articleBody"]` carry
//!    title, category, journalist, and timestamp in named elements.
//! 2. Embedded JSON-LD metadata: member-only pages have no article body in
//!    the DOM; fields come from the `application/ld+json` script instead,
//!    and the content is replaced with a fixed member-only sentinel.
//!
//! A page matching neither strategy is an extraction miss, not an error.

use crate::crawler::results::Article;
use regex::Regex;
use scraper::{Html, Selector};

/// Content placeholder for member-only articles
pub const MEMBER_ONLY_CONTENT: &str = "會員專屬內容";

/// Extracts an article record from a fetched page body
///
/// # Returns
///
/// * `Some(Article)` - Fields extracted via the DOM or metadata strategy
/// * `None` - The page has no recognizable article structure
pub fn extract_article(html: &str) -> Option<Article> {
    let document = Html::parse_document(html);

    if let Some(article) = extract_from_body(&document) {
        return Some(article);
    }

    extract_from_metadata(&document)
}

/// Structured-DOM strategy
///
/// The presence of the article-body section decides the strategy; the other
/// fields default to empty strings when their elements are missing.
fn extract_from_body(document: &Html) -> Option<Article> {
    let body_selector = Selector::parse(r#"section[itemprop="articleBody"]"#).ok()?;
    document.select(&body_selector).next()?;

    // Content is the text of the section's direct <p> children only;
    // nested figures and asides stay out.
    let paragraph_selector = Selector::parse(r#"section[itemprop="articleBody"] > p"#).ok()?;
    let content: String = document
        .select(&paragraph_selector)
        .map(|p| p.text().collect::<String>())
        .collect();

    let title = select_text(document, "h1.article-content__title").unwrap_or_default();

    // The first breadcrumb item is the site root; the category is the second.
    let category = Selector::parse("a.breadcrumb-items")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .nth(1)
                .map(|element| element.text().collect::<String>())
        })
        .unwrap_or_default();

    let journalist = select_text(document, "span.article-content__author a").unwrap_or_default();
    let published_at = select_text(document, "time.article-content__time").unwrap_or_default();

    Some(Article {
        title,
        category,
        journalist,
        published_at,
        content,
    })
}

/// Embedded-JSON fallback for member-only pages
fn extract_from_metadata(document: &Html) -> Option<Article> {
    let script_selector = Selector::parse(r#"script[type="application/ld+json"]"#).ok()?;
    let script = document.select(&script_selector).next()?;

    // The payload may be wrapped in a one-element JSON array
    let raw = script.text().collect::<String>();
    let trimmed = raw.trim_matches(|c| matches!(c, ' ' | '\n' | '\r' | '[' | ']'));
    let metadata: serde_json::Value = serde_json::from_str(trimmed).ok()?;

    let title = metadata.get("headline")?.as_str()?.to_string();
    let category = metadata
        .get("articleSection")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let journalist = metadata
        .get("author")
        .and_then(|author| author.get("name"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let date_published = metadata
        .get("datePublished")
        .and_then(|v| v.as_str())
        .unwrap_or_default();

    Some(Article {
        title,
        category,
        journalist,
        published_at: reformat_timestamp(date_published),
        content: MEMBER_ONLY_CONTENT.to_string(),
    })
}

/// Rebuilds `datePublished` as `YYYY-MM-DD HH:MM` display text
///
/// Falls back to the raw value when the combined field does not carry both
/// components.
fn reformat_timestamp(date_published: &str) -> String {
    let date_re = Regex::new(r"^[\d-]+").ok();
    let time_re = Regex::new(r"(\d{2}:\d{2})").ok();

    let date = date_re
        .as_ref()
        .and_then(|re| re.find(date_published))
        .map(|m| m.as_str());
    let time = time_re
        .as_ref()
        .and_then(|re| re.find(date_published))
        .map(|m| m.as_str());

    match (date, time) {
        (Some(date), Some(time)) => format!("{} {}", date, time),
        _ => date_published.to_string(),
    }
}

/// Text of the first element matching a selector, if any
fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}
