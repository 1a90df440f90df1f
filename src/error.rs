// src/error.rs
// =============================================================================
// Error types for the library side of link-sweep.
//
// Only *seed-level* problems are errors here: the page we start from could not
// be fetched, a local HTML file could not be read, the directory is missing.
// A broken link is NOT an error - it is an ordinary LinkOutcome value recorded
// in the result store (see checker/http.rs).
//
// Rust concepts:
// - thiserror: derive macro that writes the Display and Error impls for us
// - #[source]: links an error to the lower-level error that caused it
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a sweep run
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("invalid target URL '{url}': {source}")]
    InvalidTarget {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("error accessing {url}: {source}")]
    SeedFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error processing {}: {source}", path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot express {} as a file:// URL", path.display())]
    FileUrl { path: PathBuf },

    #[error("directory {} does not exist", path.display())]
    DirectoryMissing { path: PathBuf },
}

/// Result type alias for sweep operations
pub type Result<T> = std::result::Result<T, SweepError>;
