//! link-sweep: find broken links on a web page or in a local HTML tree
//!
//! The engine fetches a seed page (or walks a directory of HTML files),
//! extracts same-host links, and checks each distinct link exactly once with
//! a bounded number of concurrent requests. The result is a mapping from URL
//! to `{status, message}`.

pub mod checker;
pub mod config;
pub mod crawl;
pub mod error;
pub mod report;

pub use checker::{CheckResult, LinkOutcome};
pub use config::CheckerConfig;
pub use crawl::{run, Target};
pub use error::{Result, SweepError};
pub use report::{render_json, render_table, CrawlReport, OutputFormat, ResultStore};
