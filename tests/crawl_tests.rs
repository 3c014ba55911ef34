//! Integration tests for the crawler
//!
//! These tests use wiremock to fake the listing and article endpoints and
//! exercise the full two-phase crawl end-to-end.

use breaknews::config::Config;
use breaknews::crawler::{crawl, MEMBER_ONLY_CONTENT};
use breaknews::CrawlError;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the mock server
fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.site.listing_url_template = format!("{}/api/more?page={{page}}&type=breaknews", base_url);
    config.crawler.discovery_workers = 2;
    config.crawler.crawl_workers = 3;
    // Very short pauses for testing
    config.crawler.delay_min_ms = 1;
    config.crawler.delay_max_ms = 2;
    config.crawler.overshoot = 0;
    config
}

/// A listing body in the endpoint's escaped-JSON shape
fn listing_body(paths: &[&str]) -> String {
    let entries: Vec<String> = paths
        .iter()
        .map(|p| format!(r#"{{"titleLink":"{}"}}"#, p.replace('/', r"\/")))
        .collect();
    format!(r#"{{"lists":[{}]}}"#, entries.join(","))
}

/// A minimal article page the DOM strategy can extract
fn article_body(title: &str) -> String {
    format!(
        r#"<html><body>
        <h1 class="article-content__title">{}</h1>
        <a class="breadcrumb-items" href="/">首頁</a>
        <a class="breadcrumb-items" href="/cate">要聞</a>
        <span class="article-content__author"><a href="/reporter">記者</a></span>
        <time class="article-content__time">2020-08-20 14:30</time>
        <section itemprop="articleBody"><p>內文。</p></section>
        </body></html>"#,
        title
    )
}

#[tokio::test]
async fn test_full_crawl_end_to_end() {
    let server = MockServer::start().await;

    // Every listing page returns the same 3 paths; duplicates are allowed
    // and the frontier stops at the target anyway.
    Mock::given(method("GET"))
        .and(path("/api/more"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_body(&[
            "/news/story/7331/5550001",
            "/news/story/7331/5550002",
            "/news/story/6656/5550003",
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/news/story/\d+/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_body("測試標題")))
        .mount(&server)
        .await;

    let report = crawl(test_config(&server.uri()), 5).await.expect("crawl failed");

    // Overshoot is 0: the frontier stops at exactly the target
    assert_eq!(report.stats.urls_discovered, 5);
    assert_eq!(report.records.len(), 5);
    assert_eq!(report.stats.records_extracted, 5);
    assert_eq!(report.stats.articles_skipped, 0);

    // Sequence numbers are contiguous from 1 and the records are sorted
    for (index, record) in report.records.iter().enumerate() {
        assert_eq!(record.seq, index as u64 + 1);
        assert_eq!(record.article.title, "測試標題");
        assert_eq!(record.article.category, "要聞");
    }
}

#[tokio::test]
async fn test_discovery_overshoot_allowance() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/more"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_body(&[
            "/news/story/1/1",
            "/news/story/1/2",
            "/news/story/1/3",
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/news/story/\d+/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_body("標題")))
        .mount(&server)
        .await;

    let mut config = test_config(&server.uri());
    config.crawler.overshoot = 2;

    let report = crawl(config, 5).await.expect("crawl failed");

    // The frontier ends within [target, target + overshoot]
    assert!(report.stats.urls_discovered >= 5);
    assert!(report.stats.urls_discovered <= 7);
    assert_eq!(report.records.len(), report.stats.urls_discovered);
}

#[tokio::test]
async fn test_no_duplicate_page_claims() {
    let server = MockServer::start().await;

    // Each listing page may be requested at most once; wiremock verifies
    // the expectations when the server drops.
    for page in 1..=20u32 {
        Mock::given(method("GET"))
            .and(path("/api/more"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string(listing_body(&[
                "/news/story/2/1",
                "/news/story/2/2",
                "/news/story/2/3",
            ])))
            .expect(0..=1)
            .mount(&server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path_regex(r"^/news/story/\d+/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_body("標題")))
        .mount(&server)
        .await;

    let report = crawl(test_config(&server.uri()), 6).await.expect("crawl failed");
    assert_eq!(report.stats.urls_discovered, 6);
}

#[tokio::test]
async fn test_listing_failure_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/more"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = crawl(test_config(&server.uri()), 5).await.unwrap_err();
    assert!(matches!(err, CrawlError::Http { status: 500, .. }));
}

#[tokio::test]
async fn test_article_failure_aborts_with_partial_marker() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/more"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_body(&[
            "/news/story/3/1",
            "/news/story/3/2",
            "/news/story/3/3",
        ])))
        .mount(&server)
        .await;

    // One article consistently fails; the others are fine
    Mock::given(method("GET"))
        .and(path("/news/story/3/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/news/story/\d+/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_body("標題")))
        .mount(&server)
        .await;

    let err = crawl(test_config(&server.uri()), 3).await.unwrap_err();
    match err {
        CrawlError::Aborted {
            records_collected,
            source,
        } => {
            // The failing fetch happened before all three could complete
            assert!(records_collected < 3);
            assert!(matches!(*source, CrawlError::Http { status: 500, .. }));
        }
        other => panic!("expected Aborted, got {:?}", other),
    }
}

#[tokio::test]
async fn test_extraction_miss_skips_without_failing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/more"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_body(&[
            "/news/story/4/1",
            "/news/story/4/2",
            "/news/story/4/3",
        ])))
        .mount(&server)
        .await;

    // One page has no recognizable article structure
    Mock::given(method("GET"))
        .and(path("/news/story/4/2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>nothing here</body></html>"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/news/story/\d+/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_body("標題")))
        .mount(&server)
        .await;

    let report = crawl(test_config(&server.uri()), 3).await.expect("crawl failed");

    assert_eq!(report.stats.articles_fetched, 3);
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.stats.articles_skipped, 1);
}

#[tokio::test]
async fn test_member_only_article_uses_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/more"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_body(&["/news/story/5/1", "/news/story/5/2"])),
        )
        .mount(&server)
        .await;

    let member_only = r#"<html><head>
        <script type="application/ld+json">
        [{"headline":"會員標題","articleSection":"財經",
          "author":{"name":"李記者"},
          "datePublished":"2020-08-20T09:15:00+08:00"}]
        </script>
        </head><body>subscribe to read</body></html>"#;

    Mock::given(method("GET"))
        .and(path_regex(r"^/news/story/\d+/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(member_only))
        .mount(&server)
        .await;

    let report = crawl(test_config(&server.uri()), 2).await.expect("crawl failed");

    assert_eq!(report.records.len(), 2);
    for record in &report.records {
        assert_eq!(record.article.title, "會員標題");
        assert_eq!(record.article.content, MEMBER_ONLY_CONTENT);
        assert_eq!(record.article.published_at, "2020-08-20 09:15");
    }
}
