//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Resolve a location to a matching route
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in declaration order (six routes)
//! - Explicit NoMatch rather than silent default

use crate::routing::history::History;
use crate::routing::matcher::{ExactPathMatcher, MatchOptions, Matcher};
use crate::routing::route::Route;
use crate::routing::table::RouteTable;

/// Outcome of resolving a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched(&'a Route),
    NoMatch { path: String },
}

impl<'a> Resolution<'a> {
    pub fn route(&self) -> Option<&'a Route> {
        match self {
            Resolution::Matched(route) => Some(route),
            Resolution::NoMatch { .. } => None,
        }
    }
}

/// Client-side router: route table, compiled matchers and history mode.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    matchers: Vec<ExactPathMatcher>,
    history: History,
}

impl Router {
    pub fn new(table: RouteTable, history: History, options: MatchOptions) -> Self {
        let matchers = table
            .iter()
            .map(|route| ExactPathMatcher::new(route.path, options))
            .collect();

        Self {
            table,
            matchers,
            history,
        }
    }

    /// Resolve a location (path with optional query and fragment).
    pub fn resolve(&self, location: &str) -> Resolution<'_> {
        let Some(path) = self.history.location_path(location) else {
            return Resolution::NoMatch {
                path: location.to_string(),
            };
        };
        // Percent-escapes are matched as the characters they encode
        let decoded = urlencoding::decode(&path).map(|decoded| decoded.into_owned());
        let Ok(path) = decoded else {
            return Resolution::NoMatch { path };
        };

        self.table
            .iter()
            .zip(&self.matchers)
            .find(|(_, matcher)| matcher.matches(&path))
            .map(|(route, _)| Resolution::Matched(route))
            .unwrap_or(Resolution::NoMatch { path })
    }

    /// Link to a route by name.
    pub fn href_for(&self, name: &str) -> Option<String> {
        self.table.by_name(name).map(|route| self.history.href(route.path))
    }

    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Page;
    use crate::routing::history::HistoryMode;

    fn standard_router(history: History) -> Router {
        let options = MatchOptions::default();
        Router::new(RouteTable::standard(options).unwrap(), history, options)
    }

    #[test]
    fn test_every_declared_path_resolves_to_its_route() {
        let router = standard_router(History::web());

        for route in router.routes().iter() {
            assert_eq!(router.resolve(route.path), Resolution::Matched(route));
        }
    }

    #[test]
    fn test_undeclared_paths_do_not_match() {
        let router = standard_router(History::web());

        for path in ["/settings", "/favorites/1", "/olympiads", "/user/profile", "//"] {
            let resolution = router.resolve(path);
            assert!(resolution.route().is_none(), "{} should not match", path);
        }
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        let router = standard_router(History::web());

        let route = router.resolve("/participants?page=2#list").route().unwrap();
        assert_eq!(route.page, Page::Participants);
    }

    #[test]
    fn test_percent_encoded_paths_are_decoded() {
        let router = standard_router(History::web());

        assert_eq!(router.resolve("/us%65r").route().map(|r| r.name), Some("User"));
        assert_eq!(router.resolve("/%66avorites?tab=all").route().map(|r| r.name), Some("Favorites"));
        assert_eq!(
            router.resolve("/user%2Fprofile"),
            Resolution::NoMatch {
                path: "/user/profile".to_string()
            }
        );
        // Not valid UTF-8 once decoded
        assert!(router.resolve("/us%FFer").route().is_none());
    }

    #[test]
    fn test_hash_history_resolution() {
        let router = standard_router(History::new(HistoryMode::Hash, "/"));

        assert_eq!(router.resolve("/#/user").route().map(|r| r.name), Some("User"));
        assert_eq!(router.resolve("/").route().map(|r| r.name), Some("Home"));
        assert!(router.resolve("/user").route().is_none());
    }

    #[test]
    fn test_href_for() {
        let router = standard_router(History::new(HistoryMode::Web, "/front"));

        assert_eq!(router.href_for("Notifications").as_deref(), Some("/front/notifications"));
        assert_eq!(router.href_for("Home").as_deref(), Some("/front/"));
        assert_eq!(router.href_for("Missing"), None);
    }
}
