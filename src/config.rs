// src/config.rs
// =============================================================================
// Run configuration.
//
// The CLI (src/cli.rs) turns user flags into a CheckerConfig; the crawl
// session takes it by value when it opens and never changes it afterwards.
// =============================================================================

use std::time::Duration;

/// User agent sent with every request unless overridden
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Total time budget for one request, seed fetch included
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upper bound on link checks in flight during one seed cycle
pub const DEFAULT_CONCURRENCY: usize = 50;

// Settings fixed for the lifetime of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Total-time budget per request
    pub timeout: Duration,
    /// Maximum number of concurrent link checks
    pub concurrency: usize,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CheckerConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    // A limit of 0 would make buffer_unordered never poll, hanging the run.
    // Session::open applies the same clamp for configs built field by field.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
