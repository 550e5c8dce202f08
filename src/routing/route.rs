//! Route records.

use serde::Serialize;

use crate::pages::Page;

/// A declarative mapping from a URL path to a page and a logical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    /// URL path pattern, always starting with `/`.
    pub path: &'static str,

    /// Logical identifier used for named navigation.
    pub name: &'static str,

    /// Page rendered into the router view when this route matches.
    pub page: Page,
}

impl Route {
    pub const fn new(path: &'static str, name: &'static str, page: Page) -> Self {
        Self { path, name, page }
    }
}

/// The application's navigable surface, in declaration order.
pub const STANDARD_ROUTES: [Route; 6] = [
    Route::new("/", "Home", Page::Home),
    Route::new("/favorites", "Favorites", Page::Favorites),
    Route::new("/notifications", "Notifications", Page::Notifications),
    Route::new("/participants", "Participants", Page::Participants),
    Route::new("/user", "User", Page::User),
    Route::new("/olympiad", "Olympiad", Page::Olympiad),
];
