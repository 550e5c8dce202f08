//! Static route table.
//!
//! # Responsibilities
//! - Hold routes in declaration order
//! - Reject tables with duplicate names or paths
//!
//! # Design Decisions
//! - Validated once at construction, immutable afterwards
//! - Paths are compared after normalization, so `/User` and `/user`
//!   collide unless matching is case-sensitive

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::routing::matcher::{normalize_path, MatchOptions};
use crate::routing::route::{Route, STANDARD_ROUTES};

/// Errors detected while building a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    /// Route path is not absolute.
    #[error("route `{name}` has path `{path}` which does not start with '/'")]
    RelativePath { name: String, path: String },

    /// Route has an empty name.
    #[error("route with path `{0}` has an empty name")]
    EmptyName(String),

    /// Two routes share a name.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// Two routes share a path.
    #[error("routes `{first}` and `{second}` share the path `{path}`")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },
}

/// An ordered, validated sequence of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, checking that names and paths are pairwise distinct.
    pub fn new(routes: Vec<Route>, options: MatchOptions) -> Result<Self, RouteTableError> {
        let mut names: HashSet<&str> = HashSet::with_capacity(routes.len());
        let mut paths: HashMap<String, &str> = HashMap::with_capacity(routes.len());

        for route in &routes {
            if route.name.is_empty() {
                return Err(RouteTableError::EmptyName(route.path.to_string()));
            }
            if !route.path.starts_with('/') {
                return Err(RouteTableError::RelativePath {
                    name: route.name.to_string(),
                    path: route.path.to_string(),
                });
            }
            if !names.insert(route.name) {
                return Err(RouteTableError::DuplicateName(route.name.to_string()));
            }
            let key = normalize_path(route.path, options);
            if let Some(first) = paths.insert(key, route.name) {
                return Err(RouteTableError::DuplicatePath {
                    path: route.path.to_string(),
                    first: first.to_string(),
                    second: route.name.to_string(),
                });
            }
        }

        Ok(Self { routes })
    }

    /// The application's six declared routes.
    pub fn standard(options: MatchOptions) -> Result<Self, RouteTableError> {
        Self::new(STANDARD_ROUTES.to_vec(), options)
    }

    /// Look up a route by its logical name.
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Page;

    #[test]
    fn test_standard_table_is_valid() {
        let table = RouteTable::standard(MatchOptions::default()).unwrap();
        assert_eq!(table.len(), 6);

        let names: Vec<_> = table.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["Home", "Favorites", "Notifications", "Participants", "User", "Olympiad"]
        );
    }

    #[test]
    fn test_standard_table_valid_under_strict_sensitive() {
        let options = MatchOptions { strict: true, sensitive: true };
        assert!(RouteTable::standard(options).is_ok());
    }

    #[test]
    fn test_by_name() {
        let table = RouteTable::standard(MatchOptions::default()).unwrap();
        assert_eq!(table.by_name("Olympiad").map(|r| r.path), Some("/olympiad"));
        assert!(table.by_name("olympiad").is_none()); // Names are exact
        assert!(table.by_name("Settings").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let routes = vec![
            Route::new("/", "Home", Page::Home),
            Route::new("/home", "Home", Page::Home),
        ];
        let err = RouteTable::new(routes, MatchOptions::default()).unwrap_err();
        assert_eq!(err, RouteTableError::DuplicateName("Home".into()));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let routes = vec![
            Route::new("/user", "User", Page::User),
            Route::new("/User/", "Profile", Page::User),
        ];
        let err = RouteTable::new(routes, MatchOptions::default()).unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicatePath { ref first, .. } if first == "User"));

        // Distinct once matching is strict and case-sensitive
        let routes = vec![
            Route::new("/user", "User", Page::User),
            Route::new("/User/", "Profile", Page::User),
        ];
        let options = MatchOptions { strict: true, sensitive: true };
        assert!(RouteTable::new(routes, options).is_ok());
    }

    #[test]
    fn test_relative_path_and_empty_name_rejected() {
        let err = RouteTable::new(vec![Route::new("user", "User", Page::User)], MatchOptions::default())
            .unwrap_err();
        assert!(matches!(err, RouteTableError::RelativePath { .. }));

        let err = RouteTable::new(vec![Route::new("/user", "", Page::User)], MatchOptions::default())
            .unwrap_err();
        assert_eq!(err, RouteTableError::EmptyName("/user".into()));
    }
}
