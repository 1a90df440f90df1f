// src/checker/http.rs
// =============================================================================
// This module checks whether a single URL is reachable.
//
// Key functionality:
// - Builds the one HTTP client shared by a whole run
// - Makes one GET request per link (no retries)
// - file:// links are checked against the local filesystem instead
// - Turns every possible failure into a LinkOutcome value; nothing here
//   returns an error to the caller
//
// Outcome classification:
//   response with 200           -> Http(200)       -> {200, "OK"}
//   response with any other code -> Http(code)     -> {code, "HTTP <code>"}
//   request ran out of time     -> Timeout         -> {0, "Timeout"}
//   anything else went wrong    -> Transport(why)  -> {0, why}
//
// Rust concepts:
// - Enums with data: LinkOutcome carries the code or the reason
// - From trait: flattening the enum into the renderer's shape
// - async fn: waiting on the network without blocking a thread
// =============================================================================

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::error::Error as _;
use url::Url;

use crate::config::CheckerConfig;
use crate::error::{Result, SweepError};

/// What happened when we tried to reach a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The server answered with this status code
    Http(u16),
    /// The request ran past the configured timeout
    Timeout,
    /// Any other failure, with a human readable cause
    Transport(String),
}

impl LinkOutcome {
    /// Only a plain 200 counts as healthy
    pub fn is_ok(&self) -> bool {
        matches!(self, LinkOutcome::Http(code) if *code == StatusCode::OK.as_u16())
    }
}

/// The flat `{status, message}` shape handed to renderers
///
/// `status` is 0 whenever no HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: u16,
    pub message: String,
}

impl From<&LinkOutcome> for CheckResult {
    fn from(outcome: &LinkOutcome) -> Self {
        match outcome {
            LinkOutcome::Http(200) => CheckResult {
                status: 200,
                message: "OK".to_string(),
            },
            LinkOutcome::Http(code) => CheckResult {
                status: *code,
                message: format!("HTTP {}", code),
            },
            LinkOutcome::Timeout => CheckResult {
                status: 0,
                message: "Timeout".to_string(),
            },
            LinkOutcome::Transport(reason) => CheckResult {
                status: 0,
                message: reason.clone(),
            },
        }
    }
}

/// One checked link: the resolved URL and what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCheckResult {
    pub url: String,
    pub outcome: LinkOutcome,
}

impl LinkCheckResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

// Builds the HTTP client shared by every request in a run
//
// The client is configured once (user agent + total timeout) and only ever
// read afterwards. Cloning it is cheap: clones share one connection pool.
pub fn build_client(config: &CheckerConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .build()
        .map_err(SweepError::ClientBuild)
}

// Checks a single link and classifies the result
//
// Parameters:
//   client: the run's shared HTTP client
//   url: an absolute URL (http, https, file, or anything else parseable)
//
// Returns: a LinkOutcome, never an error
pub async fn check_link(client: &Client, url: &Url) -> LinkOutcome {
    if url.scheme() == "file" {
        return check_local_file(url).await;
    }

    match client.get(url.clone()).send().await {
        Ok(response) => LinkOutcome::Http(response.status().as_u16()),
        Err(e) if e.is_timeout() => LinkOutcome::Timeout,
        Err(e) => LinkOutcome::Transport(describe_error(&e)),
    }
}

// file:// links exist or they don't - there is no status code to ask for
async fn check_local_file(url: &Url) -> LinkOutcome {
    let path = match url.to_file_path() {
        Ok(path) => path,
        Err(()) => return LinkOutcome::Transport(format!("invalid file URL: {}", url)),
    };

    match tokio::fs::metadata(&path).await {
        Ok(_) => LinkOutcome::Http(StatusCode::OK.as_u16()),
        Err(e) => LinkOutcome::Transport(format!("{}: {}", path.display(), e)),
    }
}

// reqwest's top-level message is vague ("error sending request for url");
// walk the source chain so the report says *why*
fn describe_error(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an enum AND a struct for results?
//    - LinkOutcome says exactly what happened (a code, a timeout, a failure)
//    - CheckResult is the flat {status, message} pair renderers expect
//    - Keeping them apart means a "status 0" sentinel never leaks into logic
//
// 2. What is `impl From<&LinkOutcome> for CheckResult`?
//    - It teaches Rust how to turn one type into another
//    - Callers can write `CheckResult::from(&outcome)` or `(&outcome).into()`
//
// 3. What does `Err(e) if e.is_timeout()` mean?
//    - It's a match guard: the arm only matches when the condition is true
//    - Otherwise matching falls through to the next arm
//
// 4. Why `Err(())` for to_file_path?
//    - The url crate returns a unit error: it only says "that didn't work"
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_flatten_outcomes() {
        assert_eq!(
            CheckResult::from(&LinkOutcome::Http(200)),
            CheckResult { status: 200, message: "OK".to_string() }
        );
        assert_eq!(
            CheckResult::from(&LinkOutcome::Http(404)),
            CheckResult { status: 404, message: "HTTP 404".to_string() }
        );
        assert_eq!(
            CheckResult::from(&LinkOutcome::Timeout),
            CheckResult { status: 0, message: "Timeout".to_string() }
        );
        assert_eq!(
            CheckResult::from(&LinkOutcome::Transport("boom".to_string())),
            CheckResult { status: 0, message: "boom".to_string() }
        );
    }

    #[test]
    fn test_only_200_is_ok() {
        assert!(LinkOutcome::Http(200).is_ok());
        assert!(!LinkOutcome::Http(204).is_ok());
        assert!(!LinkOutcome::Http(404).is_ok());
        assert!(!LinkOutcome::Timeout.is_ok());
    }

    #[tokio::test]
    async fn test_check_classifies_status_codes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(410))
            .mount(&server)
            .await;

        let client = build_client(&CheckerConfig::default()).unwrap();
        let base = Url::parse(&server.uri()).unwrap();

        let ok = check_link(&client, &base.join("/ok").unwrap()).await;
        assert_eq!(ok, LinkOutcome::Http(200));

        let gone = check_link(&client, &base.join("/gone").unwrap()).await;
        assert_eq!(gone, LinkOutcome::Http(410));
    }

    #[tokio::test]
    async fn test_check_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let config = CheckerConfig::default().with_timeout(Duration::from_millis(200));
        let client = build_client(&config).unwrap();
        let url = Url::parse(&server.uri()).unwrap().join("/slow").unwrap();

        assert_eq!(check_link(&client, &url).await, LinkOutcome::Timeout);
    }

    #[tokio::test]
    async fn test_sends_configured_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(wiremock::matchers::header("user-agent", "sweep-test/1.0"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let config = CheckerConfig::default().with_user_agent("sweep-test/1.0");
        let client = build_client(&config).unwrap();
        let url = Url::parse(&server.uri()).unwrap();

        // Without the header the mock would not match and wiremock answers 404
        assert_eq!(check_link(&client, &url).await, LinkOutcome::Http(200));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let client = build_client(&CheckerConfig::default()).unwrap();
        // Port 9 (discard) on localhost is almost never listening
        let url = Url::parse("http://127.0.0.1:9/").unwrap();

        match check_link(&client, &url).await {
            LinkOutcome::Transport(reason) => assert!(!reason.is_empty()),
            other => panic!("expected transport failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_local_file_checks() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("here.html");
        std::fs::write(&present, "<html></html>").unwrap();
        let client = build_client(&CheckerConfig::default()).unwrap();

        let present_url = Url::from_file_path(&present).unwrap();
        assert_eq!(check_link(&client, &present_url).await, LinkOutcome::Http(200));

        let missing_url = Url::from_file_path(dir.path().join("missing.html")).unwrap();
        assert!(matches!(
            check_link(&client, &missing_url).await,
            LinkOutcome::Transport(_)
        ));
    }
}
