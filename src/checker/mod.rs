// src/checker/mod.rs
// =============================================================================
// This module contains the per-link logic.
//
// Submodules:
// - scope: decides which hrefs stay on the origin's host
// - html: extracts checkable links from an HTML page
// - http: checks one link and classifies what happened
//
// Everything in here works on one page or one link at a time. Sharing state
// across a whole run (dedup, results) is the crawl module's job.
// =============================================================================

mod html;
mod http;
mod scope;

pub use html::extract_links;
pub use http::{build_client, check_link, CheckResult, LinkCheckResult, LinkOutcome};
pub use scope::is_in_scope;
