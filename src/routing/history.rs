//! Navigation history modes.
//!
//! # Responsibilities
//! - Turn a route path into a link (`href`)
//! - Turn a location (path, query, fragment) back into a route path
//!
//! # Design Decisions
//! - `Web` uses the native URL path; the server must answer every route path
//! - `Hash` keeps the route in the fragment; only the base path reaches the server
//! - The base is normalized to a leading slash and no trailing slash

use serde::{Deserialize, Serialize};

/// How the route is encoded in the browser URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Browser-native URL path, no hash fragment.
    #[default]
    Web,
    /// Route path carried in the URL fragment (`/#/favorites`).
    Hash,
}

/// A history mode anchored at a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    mode: HistoryMode,
    /// Normalized base; empty string for the site root.
    base: String,
}

impl History {
    pub fn new(mode: HistoryMode, base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        Self { mode, base }
    }

    /// Web history at the site root.
    pub fn web() -> Self {
        Self::new(HistoryMode::Web, "/")
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// The base path, `/` for the site root.
    pub fn base(&self) -> &str {
        if self.base.is_empty() {
            "/"
        } else {
            &self.base
        }
    }

    /// Link for a route path.
    pub fn href(&self, path: &str) -> String {
        match self.mode {
            HistoryMode::Web => format!("{}{}", self.base, path),
            HistoryMode::Hash => format!("{}/#{}", self.base, path),
        }
    }

    /// Route path addressed by a location.
    ///
    /// Returns `None` when the location lies outside the base, or, in hash
    /// mode, when the document is requested from anywhere but the base.
    pub fn location_path(&self, location: &str) -> Option<String> {
        let (before_fragment, fragment) = match location.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment)),
            None => (location, None),
        };
        let path = strip_query(before_fragment);
        let relative = self.strip_base(path)?;

        match self.mode {
            HistoryMode::Web => Some(relative.to_string()),
            HistoryMode::Hash => {
                if relative != "/" {
                    return None;
                }
                let route_path = strip_query(fragment.unwrap_or(""));
                if route_path.is_empty() {
                    Some("/".to_string())
                } else if route_path.starts_with('/') {
                    Some(route_path.to_string())
                } else {
                    Some(format!("/{}", route_path))
                }
            }
        }
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(if path.is_empty() { "/" } else { path });
        }

        let rest = path.strip_prefix(self.base.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            // "/apple" is not under base "/app"
            None
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::web()
    }
}

fn strip_query(s: &str) -> &str {
    s.split_once('?').map(|(path, _)| path).unwrap_or(s)
}
