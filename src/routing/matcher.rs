//! Route matching logic.
//!
//! # Responsibilities
//! - Match a navigation path against a route path
//! - Apply case sensitivity and trailing slash options
//!
//! # Design Decisions
//! - Case-insensitive by default
//! - A single trailing slash is tolerated unless `strict`
//! - Query strings and fragments are stripped before matching (see history.rs)

use serde::{Deserialize, Serialize};

/// Trait for matching navigation paths against a condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Path comparison options shared by every route of a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Reject a trailing slash that the route path does not have.
    pub strict: bool,

    /// Compare paths case-sensitively.
    pub sensitive: bool,
}

/// Normalize a path for comparison under the given options.
pub fn normalize_path(path: &str, options: MatchOptions) -> String {
    let mut normalized = if options.sensitive {
        path.to_string()
    } else {
        path.to_lowercase()
    };

    if !options.strict && normalized.len() > 1 && normalized.ends_with('/') && !normalized.ends_with("//") {
        normalized.pop();
    }

    normalized
}

/// Matches one route path exactly.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    expected: String,
    options: MatchOptions,
}

impl ExactPathMatcher {
    /// Create a new exact path matcher.
    /// The route path is normalized once, at compile time.
    pub fn new(path: &str, options: MatchOptions) -> Self {
        Self {
            expected: normalize_path(path, options),
            options,
        }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        normalize_path(path, self.options) == self.expected
    }
}
