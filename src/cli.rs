// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   link-sweep https://example.com
//   link-sweep ./public --format json --timeout 10
// =============================================================================

use clap::Parser;
use std::num::NonZeroUsize;
use std::time::Duration;

use link_sweep::config::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use link_sweep::{CheckerConfig, OutputFormat};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "link-sweep",
    version,
    about = "Check a web page or a local HTML tree for broken links",
    long_about = "link-sweep fetches a page (or walks a directory of HTML files), collects every \
                  link that stays on the same host, and checks each one exactly once. \
                  Exit code 0 means every link answered 200, 1 means something is broken."
)]
pub struct Cli {
    /// URL (http:// or https://) or local directory to check
    pub target: String,

    /// Output format for the results
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Total time budget per request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Maximum number of links checked at the same time
    #[arg(long, default_value_t = NonZeroUsize::new(DEFAULT_CONCURRENCY).unwrap_or(NonZeroUsize::MIN))]
    pub concurrency: NonZeroUsize,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    // Turns the parsed flags into the library's run configuration
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig::default()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_concurrency(self.concurrency.get())
            .with_user_agent(self.user_agent.clone())
    }
}
