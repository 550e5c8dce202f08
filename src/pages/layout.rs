//! Root layout component.
//!
//! Renders the navigation bar and the router view. The matched page goes
//! into the router view; an unmatched navigation leaves it empty.

use crate::pages::escape_html;
use crate::routing::{Route, Router};

/// Root component of the application.
#[derive(Debug, Clone)]
pub struct Layout {
    brand: String,
}

impl Layout {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
        }
    }

    /// Render the layout with `outlet` placed inside the router view.
    pub fn render(
        &self,
        router: &Router,
        active: Option<&Route>,
        outlet_attributes: &[(String, String)],
        outlet: &str,
    ) -> String {
        let history = router.history();
        let mut html = String::with_capacity(512 + outlet.len());

        html.push_str("<div class=\"layout\"><header class=\"app-header\">");
        html.push_str(&format!(
            "<a class=\"brand\" href=\"{}\">{}</a><nav>",
            escape_html(&history.href("/")),
            escape_html(&self.brand)
        ));

        for route in router.routes().iter() {
            let current = if active.map(|a| a.name) == Some(route.name) {
                " aria-current=\"page\""
            } else {
                ""
            };
            html.push_str(&format!(
                "<a href=\"{}\" data-route=\"{}\"{}>{}</a>",
                escape_html(&history.href(route.path)),
                escape_html(route.name),
                current,
                escape_html(route.page.heading())
            ));
        }

        html.push_str("</nav></header><main class=\"router-view\"");
        for (name, value) in outlet_attributes {
            if value.is_empty() {
                html.push_str(&format!(" {}", name));
            } else {
                html.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
            }
        }
        html.push('>');
        html.push_str(outlet);
        html.push_str("</main></div>");
        html
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new("Olympiads")
    }
}
