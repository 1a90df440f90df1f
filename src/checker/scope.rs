// src/checker/scope.rs
// =============================================================================
// Decides whether an href found on a page should be checked at all.
//
// Rule: stay on the origin's host.
// - Relative hrefs ("/docs", "../a.html", "page2") have no host -> in scope
// - Absolute hrefs are in scope only if their host equals the origin's host
// - Anything that does not parse is simply out of scope (never an error)
//
// Only the host string is compared; scheme and port are ignored, so
// http://example.com:8080/x is in scope for https://example.com.
// =============================================================================

use url::{ParseError, Url};

// Returns true if `candidate` should be checked for a page at `origin`
//
// Examples (origin = https://example.com/):
//   "https://example.com/a" -> true
//   "https://other.com/a"   -> false
//   "/a"                    -> true
//   "http://[::1"           -> false (malformed)
pub fn is_in_scope(candidate: &str, origin: &Url) -> bool {
    match Url::parse(candidate) {
        Ok(url) => match url.host_str() {
            Some(host) => Some(host) == origin.host_str(),
            None => true,
        },
        // "//host/path" is relative by scheme but still names a host
        Err(ParseError::RelativeUrlWithoutBase) if candidate.starts_with("//") => {
            match origin.join(candidate) {
                Ok(joined) => joined.host_str() == origin.host_str(),
                Err(_) => false,
            }
        }
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}
