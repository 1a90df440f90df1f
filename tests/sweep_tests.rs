//! End-to-end tests for a sweep run
//!
//! These use wiremock for remote pages and tempfile for local HTML trees, so
//! nothing here touches the internet.

use link_sweep::crawl::{check_page, Session};
use link_sweep::{render_json, run, CheckerConfig, LinkOutcome, Target};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, at: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_page_one_broken_link() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/ok">ok</a> <a href="/missing">missing</a></body></html>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let target = Target::parse(&format!("{}/", server.uri())).unwrap();
    let report = run(&target, CheckerConfig::default()).await.unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&render_json(&report.results).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            format!("{}/ok", server.uri()): {"status": 200, "message": "OK"},
            format!("{}/missing", server.uri()): {"status": 404, "message": "HTTP 404"},
        })
    );
    assert!(!report.all_ok());
    assert!(report.seed_failures.is_empty());
}

#[tokio::test]
async fn test_excluded_and_external_hrefs_are_not_checked() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r##"
        <a href="#top">top</a>
        <a href="mailto:a@b.com">mail</a>
        <a href="javascript:void(0)">js</a>
        <a href="https://other.invalid/page">elsewhere</a>
        <a href="/c">c</a>
        "##,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let target = Target::parse(&format!("{}/", server.uri())).unwrap();
    let report = run(&target, CheckerConfig::default()).await.unwrap();

    assert_eq!(report.results.len(), 1);
    assert!(report.all_ok());
}

#[tokio::test]
async fn test_slow_link_times_out() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/slow">slow</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = CheckerConfig::default().with_timeout(Duration::from_millis(500));
    let target = Target::parse(&format!("{}/", server.uri())).unwrap();
    let report = run(&target, config).await.unwrap();

    let slow = format!("{}/slow", server.uri());
    assert_eq!(report.results.get(&slow), Some(&LinkOutcome::Timeout));
}

#[tokio::test]
async fn test_dead_link_shared_by_two_seeds_is_checked_once() {
    let server = MockServer::start().await;
    mount_page(&server, "/one", r#"<a href="/dead">dead</a> <a href="/two">two</a>"#).await;
    mount_page(&server, "/two", r#"<a href="/dead">dead again</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/dead"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::open(CheckerConfig::default()).unwrap();
    let base = Url::parse(&server.uri()).unwrap();
    check_page(&session, &base.join("/one").unwrap()).await;
    check_page(&session, &base.join("/two").unwrap()).await;

    assert_eq!(session.checked_count().await, 2);
    let report = session.finish();
    assert_eq!(report.results.len(), 2);
    let dead = format!("{}/dead", server.uri());
    assert_eq!(report.results.get(&dead), Some(&LinkOutcome::Http(404)));
}

#[tokio::test]
async fn test_directory_with_shared_dead_link() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("docs")).unwrap();
    std::fs::write(
        root.join("index.html"),
        r#"<a href="docs/guide.html">guide</a> <a href="missing.html">broken</a>"#,
    )
    .unwrap();
    std::fs::write(root.join("missing-too.htm"), r#"<a href="missing.html">broken</a>"#).unwrap();
    std::fs::write(
        root.join("docs/guide.html"),
        r#"<a href="../index.html">home</a> <a href="https://example.com/">external</a>"#,
    )
    .unwrap();

    let target = Target::Directory(root.to_path_buf());
    let report = run(&target, CheckerConfig::default()).await.unwrap();

    assert!(report.seed_failures.is_empty());
    // guide.html, missing.html, index.html; the external link is out of scope
    assert_eq!(report.results.len(), 3);

    let missing: Vec<_> = report
        .results
        .iter()
        .filter(|r| r.url.ends_with("/missing.html"))
        .collect();
    assert_eq!(missing.len(), 1);
    assert!(matches!(missing[0].outcome, LinkOutcome::Transport(_)));
    assert_eq!(report.results.broken_count(), 1);
}

#[tokio::test]
async fn test_bounded_concurrency_still_checks_everything() {
    let server = MockServer::start().await;
    let anchors: String = (0..40).map(|i| format!(r#"<a href="/p{}">p</a>"#, i)).collect();
    mount_page(&server, "/", &anchors).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(20)))
        .mount(&server)
        .await;

    let config = CheckerConfig::default().with_concurrency(2);
    let target = Target::parse(&format!("{}/", server.uri())).unwrap();
    let report = run(&target, config).await.unwrap();

    assert_eq!(report.results.len(), 40);
    assert!(report.all_ok());
}
