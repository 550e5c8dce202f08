//! Page components.
//!
//! Each page renders a single section carrying `data-page`.

pub mod layout;

use serde::Serialize;

/// A renderable page unit addressed by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    Home,
    Favorites,
    Notifications,
    Participants,
    User,
    Olympiad,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Favorites,
        Page::Notifications,
        Page::Participants,
        Page::User,
        Page::Olympiad,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Favorites => "Favorites",
            Page::Notifications => "Notifications",
            Page::Participants => "Participants",
            Page::User => "User",
            Page::Olympiad => "Olympiad",
        }
    }

    /// Heading shown at the top of the page.
    pub fn heading(self) -> &'static str {
        match self {
            Page::Home => "Olympiads",
            Page::Favorites => "Favorite olympiads",
            Page::Notifications => "Notifications",
            Page::Participants => "Participants",
            Page::User => "Profile",
            Page::Olympiad => "Olympiad",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Favorites => "favorites",
            Page::Notifications => "notifications",
            Page::Participants => "participants",
            Page::User => "user",
            Page::Olympiad => "olympiad",
        }
    }

    pub fn render(self) -> String {
        format!(
            "<section class=\"page page-{}\" data-page=\"{}\"><h1>{}</h1></section>",
            self.slug(),
            self.name(),
            self.heading()
        )
    }
}

/// Escape text for use in HTML content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
