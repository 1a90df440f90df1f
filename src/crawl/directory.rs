// src/crawl/directory.rs
// =============================================================================
// Finds the HTML files under a local directory.
//
// Each file becomes its own seed page with a file:// origin, so relative
// links inside it resolve against the file's own location.
// =============================================================================

use std::path::{Path, PathBuf};
use tracing::warn;
use url::Url;
use walkdir::WalkDir;

use crate::error::{Result, SweepError};

const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

// Recursively lists HTML files beneath `root`, sorted by name at each level
//
// Entries that cannot be read (permissions, broken symlinks) are logged and
// skipped; they never stop the walk.
pub fn find_html_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_html_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| HTML_EXTENSIONS.iter().any(|html| ext.eq_ignore_ascii_case(html)))
        .unwrap_or(false)
}

// Builds the file:// origin for one HTML file
//
// The path is canonicalized first because file URLs must be absolute.
pub fn file_origin(path: &Path) -> Result<Url> {
    let absolute = std::fs::canonicalize(path).map_err(|source| SweepError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    Url::from_file_path(&absolute).map_err(|()| SweepError::FileUrl { path: absolute })
}
