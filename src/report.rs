// src/report.rs
// =============================================================================
// The result store and the two ways of showing it.
//
// ResultStore maps each checked URL to its outcome, remembering the order in
// which checks finished so output is stable for a given run. It is written
// only by the crawl session and handed out read-only at the end.
//
// Renderers:
// - JSON: { "<url>": {"status": 200, "message": "OK"}, ... }
// - Table: URL / STATUS / MESSAGE columns plus a summary
//
// Rust concepts:
// - Custom Serialize impl: emit a JSON object in our own order
// - HashMap + Vec: fast lookup by URL while keeping insertion order
// =============================================================================

use colored::Colorize;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt::Write as _;

use crate::checker::{CheckResult, LinkCheckResult, LinkOutcome};
use crate::error::SweepError;

/// Mapping from checked URL to outcome, in completion order
#[derive(Debug, Default, Clone)]
pub struct ResultStore {
    entries: Vec<LinkCheckResult>,
    index: HashMap<String, usize>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an outcome; a second insert for the same URL replaces the first
    pub fn insert(&mut self, url: String, outcome: LinkOutcome) {
        match self.index.get(&url) {
            Some(&slot) => self.entries[slot].outcome = outcome,
            None => {
                self.index.insert(url.clone(), self.entries.len());
                self.entries.push(LinkCheckResult { url, outcome });
            }
        }
    }

    pub fn get(&self, url: &str) -> Option<&LinkOutcome> {
        self.index.get(url).map(|&slot| &self.entries[slot].outcome)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkCheckResult> {
        self.entries.iter()
    }

    pub fn broken_count(&self) -> usize {
        self.entries.iter().filter(|r| !r.is_ok()).count()
    }
}

// Serialized as a JSON object keyed by URL, values flattened to {status, message}
impl Serialize for ResultStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.url, &CheckResult::from(&entry.outcome))?;
        }
        map.end()
    }
}

/// A page or file that could not be used as a starting point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFailure {
    /// The URL or file path of the seed
    pub seed: String,
    pub reason: String,
}

impl SeedFailure {
    pub fn new(seed: impl Into<String>, error: &SweepError) -> Self {
        Self {
            seed: seed.into(),
            reason: error.to_string(),
        }
    }
}

/// Everything a finished run produced
#[derive(Debug, Default, Clone)]
pub struct CrawlReport {
    pub results: ResultStore,
    pub seed_failures: Vec<SeedFailure>,
}

impl CrawlReport {
    /// True when every checked link came back 200
    pub fn all_ok(&self) -> bool {
        self.results.broken_count() == 0
    }
}

// Output format picked on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

// Renders the results as pretty-printed JSON
pub fn render_json(results: &ResultStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

// Renders the results as a human-readable table with a summary
//
// Rows are green for 200 and red for everything else when `color` is set.
pub fn render_table(results: &ResultStore, color: bool) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail, so the fmt::Results are ignored
    let _ = writeln!(out, "{:<60} {:<8} {:<30}", "URL", "STATUS", "MESSAGE");
    let _ = writeln!(out, "{}", "=".repeat(100));

    for entry in results.iter() {
        let flat = CheckResult::from(&entry.outcome);
        let row = format!(
            "{:<60} {:<8} {:<30}",
            truncate_url(&entry.url),
            flat.status,
            flat.message
        );

        if !color {
            let _ = writeln!(out, "{}", row);
        } else if entry.is_ok() {
            let _ = writeln!(out, "{}", row.green());
        } else {
            let _ = writeln!(out, "{}", row.red());
        }
    }

    let broken = results.broken_count();
    let _ = writeln!(out);
    let _ = writeln!(out, "📊 Summary:");
    let _ = writeln!(out, "   ✅ OK: {}", results.len() - broken);
    let _ = writeln!(out, "   ❌ Broken: {}", broken);
    let _ = writeln!(out, "   📋 Total: {}", results.len());
    out
}

// Long URLs would wreck the column layout
fn truncate_url(url: &str) -> String {
    if url.chars().count() > 57 {
        format!("{}...", url.chars().take(57).collect::<String>())
    } else {
        url.to_string()
    }
}
