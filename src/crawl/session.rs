// src/crawl/session.rs
// =============================================================================
// The state one run shares across all of its link checks.
//
// A Session owns:
// - the HTTP client (built once, read-only afterwards)
// - the set of URLs already submitted for checking
// - the result store and any seed-level failures
//
// The checked set and result store live behind one tokio Mutex. The
// "already checked?" test and the insert happen in a single critical section,
// so two concurrent checks of the same URL can never both get through. The
// lock is never held while a request is in flight.
//
// Rust concepts:
// - Arc-free sharing: checks borrow &Session, buffer_unordered polls them all
//   on the current task
// - tokio::sync::Mutex: an async-aware lock
// - Consuming self: finish() takes the session by value, which drops (and
//   releases) the client
// =============================================================================

use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::collections::HashSet;
use tokio::sync::Mutex;
use tracing::{debug, trace};
use url::{ParseError, Url};

use crate::checker::{build_client, check_link, LinkOutcome};
use crate::config::CheckerConfig;
use crate::error::{Result, SweepError};
use crate::report::{CrawlReport, ResultStore, SeedFailure};

#[derive(Debug, Default)]
struct RunState {
    checked: HashSet<String>,
    results: ResultStore,
    seed_failures: Vec<SeedFailure>,
}

/// Shared context for one sweep run
#[derive(Debug)]
pub struct Session {
    client: Client,
    config: CheckerConfig,
    state: Mutex<RunState>,
}

impl Session {
    /// Builds the run's HTTP client and empty state
    pub fn open(mut config: CheckerConfig) -> Result<Self> {
        // The field is public, so with_concurrency's clamp may have been bypassed
        config.concurrency = config.concurrency.max(1);
        let client = build_client(&config)?;
        debug!(
            timeout = ?config.timeout,
            concurrency = config.concurrency,
            "session opened"
        );
        Ok(Self {
            client,
            config,
            state: Mutex::new(RunState::default()),
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    // Checks one link unless some earlier call already claimed it
    //
    // Parameters:
    //   candidate: usually absolute already; a relative string is resolved
    //              against `origin` first
    //   origin: the location of the page the link came from
    pub async fn validate(&self, candidate: &str, origin: &Url) {
        let target = resolve(candidate, origin);
        let key = match &target {
            Ok(url) => url.to_string(),
            Err(_) => candidate.to_string(),
        };

        {
            let mut state = self.state.lock().await;
            if !state.checked.insert(key.clone()) {
                trace!(url = %key, "already checked, skipping");
                return;
            }
        }

        let outcome = match target {
            Ok(url) => check_link(&self.client, &url).await,
            Err(e) => LinkOutcome::Transport(format!("invalid URL: {}", e)),
        };
        debug!(url = %key, ?outcome, "link checked");

        self.state.lock().await.results.insert(key, outcome);
    }

    // Fans out one check per link and returns once every one has finished
    //
    // At most `config.concurrency` checks are in flight at a time. Results
    // land in the store in completion order.
    pub async fn validate_all(&self, links: Vec<String>, origin: &Url) {
        stream::iter(links)
            .map(|link| async move { self.validate(&link, origin).await })
            .buffer_unordered(self.config.concurrency)
            .collect::<Vec<()>>()
            .await;
    }

    pub async fn record_seed_failure(&self, seed: &str, error: &SweepError) {
        self.state
            .lock()
            .await
            .seed_failures
            .push(SeedFailure::new(seed, error));
    }

    /// Number of distinct URLs submitted for checking so far
    pub async fn checked_count(&self) -> usize {
        self.state.lock().await.checked.len()
    }

    /// Closes the session and hands back everything it collected
    pub fn finish(self) -> CrawlReport {
        let state = self.state.into_inner();
        debug!(
            checked = state.checked.len(),
            results = state.results.len(),
            "session closed"
        );
        CrawlReport {
            results: state.results,
            seed_failures: state.seed_failures,
        }
    }
}

// Absolute strings parse as-is; anything relative is joined onto the origin
fn resolve(candidate: &str, origin: &Url) -> std::result::Result<Url, ParseError> {
    match Url::parse(candidate) {
        Ok(url) => Ok(url),
        Err(_) => origin.join(candidate),
    }
}
