// src/crawl/mod.rs
// =============================================================================
// This module drives a whole run.
//
// Two modes:
// - Page: fetch one URL, extract its links, check them all
// - Directory: walk a local tree; every HTML file is its own seed page
//
// Each seed goes through one "cycle":
//   fetch/read -> extract links -> check them concurrently -> wait for all
// Cycles run one after another; a link found on any seed is checked at most
// once for the whole run. Links are never followed further than that.
//
// A seed that cannot be fetched or read is recorded in the report and the run
// moves on. The run itself only fails if the session cannot be opened.
// =============================================================================

mod directory;
mod session;

pub use directory::{file_origin, find_html_files};
pub use session::Session;

use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use url::Url;

use crate::checker::extract_links;
use crate::config::CheckerConfig;
use crate::error::{Result, SweepError};
use crate::report::CrawlReport;

/// What a run starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A remote page (http or https)
    Page(Url),
    /// A local directory of HTML files
    Directory(PathBuf),
}

impl Target {
    // Anything starting with http:// or https:// is a page, the rest are paths
    pub fn parse(input: &str) -> Result<Self> {
        if input.starts_with("http://") || input.starts_with("https://") {
            let url = Url::parse(input).map_err(|source| SweepError::InvalidTarget {
                url: input.to_string(),
                source,
            })?;
            Ok(Target::Page(url))
        } else {
            Ok(Target::Directory(PathBuf::from(input)))
        }
    }
}

// Runs a full sweep and returns the finished report
//
// The session (and its HTTP client) lives exactly as long as this call; it is
// released on every return path, and also if the future is dropped early.
pub async fn run(target: &Target, config: CheckerConfig) -> Result<CrawlReport> {
    let session = Session::open(config)?;

    match target {
        Target::Page(url) => check_page(&session, url).await,
        Target::Directory(root) => check_directory(&session, root).await,
    }

    Ok(session.finish())
}

// Single-page mode: one seed cycle on a remote page
pub async fn check_page(session: &Session, seed: &Url) {
    info!("Checking page: {}", seed);

    match fetch_seed(session.client(), seed).await {
        Ok(html) => seed_cycle(session, &html, seed).await,
        Err(e) => {
            error!("{}", e);
            session.record_seed_failure(seed.as_str(), &e).await;
        }
    }
}

// Directory mode: one seed cycle per HTML file, strictly in sequence
pub async fn check_directory(session: &Session, root: &Path) {
    if !root.exists() {
        let e = SweepError::DirectoryMissing {
            path: root.to_path_buf(),
        };
        error!("{}", e);
        session
            .record_seed_failure(&root.display().to_string(), &e)
            .await;
        return;
    }

    let files = find_html_files(root);
    info!("Found {} HTML file(s) under {}", files.len(), root.display());

    for file in files {
        if let Err(e) = check_file(session, &file).await {
            error!("{}", e);
            session
                .record_seed_failure(&file.display().to_string(), &e)
                .await;
        }
    }
}

async fn check_file(session: &Session, file: &Path) -> Result<()> {
    let origin = file_origin(file)?;
    let html = tokio::fs::read_to_string(file)
        .await
        .map_err(|source| SweepError::SeedRead {
            path: file.to_path_buf(),
            source,
        })?;

    seed_cycle(session, &html, &origin).await;
    Ok(())
}

// Extract, fan out, fan in - returns once every link from this seed is done
async fn seed_cycle(session: &Session, html: &str, origin: &Url) {
    let links = extract_links(html, origin);
    info!("{} link(s) found on {}", links.len(), origin);

    session.validate_all(links, origin).await;
}

// Fetches the seed page body
//
// Like a browser, we read whatever body comes back; an error status on the
// seed itself is only worth a warning.
async fn fetch_seed(client: &Client, url: &Url) -> Result<String> {
    let fetch_error = |source: reqwest::Error| SweepError::SeedFetch {
        url: url.to_string(),
        source,
    };

    let response = client.get(url.clone()).send().await.map_err(fetch_error)?;
    if !response.status().is_success() {
        warn!("Seed page {} answered HTTP {}", url, response.status().as_u16());
    }
    response.text().await.map_err(fetch_error)
}
