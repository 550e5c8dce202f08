//! Application object.
//!
//! # Data Flow
//! ```text
//! App::new(root layout)
//!     → use_plugin(RouterPlugin)      (router + route table)
//!     → use_plugin(AutoAnimatePlugin) (head script, router view marker)
//!     → mount(shell, "#app")          (consumes the App)
//!     → MountedApp, shared via Arc by request handlers
//!
//! Per navigation:
//!     location → Router::resolve → Layout::render(page | empty)
//!     → shell.before + layout + shell.after
//! ```
//!
//! # Design Decisions
//! - `mount` takes `self`, so an application mounts exactly once
//! - Reinstalling a plugin with the same name is ignored
//! - A mounted application is immutable

pub mod plugin;
pub mod shell;

use std::sync::Arc;

use thiserror::Error;

use crate::pages::layout::Layout;
use crate::routing::{Resolution, Route, Router};

pub use plugin::{AutoAnimatePlugin, Plugin, PluginError, RouterPlugin};
pub use shell::{MountPoint, ShellTemplate};

/// Errors raised while mounting an application.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    /// No plugin provided a router.
    #[error("no router installed; install the router plugin before mounting")]
    NoRouter,

    /// Only `#id` selectors can be mounted.
    #[error("unsupported mount selector `{0}`, expected `#id`")]
    InvalidSelector(String),

    /// The shell has no element matching the selector.
    #[error("mount target `{0}` not found in shell document")]
    TargetNotFound(String),

    /// The mount element is never closed.
    #[error("mount target `{0}` has no closing tag")]
    UnclosedTarget(String),

    /// Head tags were requested but the shell has no `</head>`.
    #[error("shell document has no </head> before the mount target")]
    MissingHead,
}

/// Mutable state plugins install into.
#[derive(Debug, Default)]
pub struct AppContext {
    router: Option<Arc<Router>>,
    head_tags: Vec<String>,
    outlet_attributes: Vec<(String, String)>,
}

impl AppContext {
    pub fn provide_router(&mut self, router: Arc<Router>) -> Result<(), PluginError> {
        if self.router.is_some() {
            return Err(PluginError::RouterAlreadyInstalled);
        }
        self.router = Some(router);
        Ok(())
    }

    pub fn add_head_tag(&mut self, tag: impl Into<String>) {
        self.head_tags.push(tag.into());
    }

    /// Set an attribute on the router view; an empty value renders a bare attribute.
    pub fn set_outlet_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.outlet_attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.outlet_attributes.push((name, value)),
        }
    }

    pub fn router(&self) -> Option<&Router> {
        self.router.as_deref()
    }

    pub fn head_tags(&self) -> &[String] {
        &self.head_tags
    }

    pub fn outlet_attributes(&self) -> &[(String, String)] {
        &self.outlet_attributes
    }
}

/// An application that has not been mounted yet.
pub struct App {
    root: Layout,
    context: AppContext,
    installed: Vec<&'static str>,
}

impl App {
    pub fn new(root: Layout) -> Self {
        Self {
            root,
            context: AppContext::default(),
            installed: Vec::new(),
        }
    }

    /// Install a plugin. A plugin whose name is already installed is skipped.
    pub fn use_plugin<P: Plugin>(mut self, plugin: P) -> Result<Self, PluginError> {
        let name = plugin.name();
        if self.installed.contains(&name) {
            tracing::warn!(plugin = name, "Plugin has already been applied to this app");
            return Ok(self);
        }

        plugin.install(&mut self.context)?;
        self.installed.push(name);
        tracing::debug!(plugin = name, "Plugin installed");
        Ok(self)
    }

    pub fn installed_plugins(&self) -> &[&'static str] {
        &self.installed
    }

    /// Attach the application to the shell element matching `selector`.
    pub fn mount(self, shell: &ShellTemplate, selector: &str) -> Result<MountedApp, MountError> {
        let id = selector
            .strip_prefix('#')
            .filter(|id| !id.is_empty() && !id.contains(|c: char| c.is_whitespace() || c == '"' || c == '\''))
            .ok_or_else(|| MountError::InvalidSelector(selector.to_string()))?;

        let router = self.context.router.clone().ok_or(MountError::NoRouter)?;
        let mount_point = shell.split(id, &self.context.head_tags)?;

        tracing::info!(
            selector = %selector,
            routes = router.routes().len(),
            plugins = ?self.installed,
            "Application mounted"
        );

        Ok(MountedApp {
            root: self.root,
            router,
            outlet_attributes: self.context.outlet_attributes,
            mount_point,
            selector: selector.to_string(),
            plugins: self.installed,
        })
    }
}

/// Whether a navigation matched a declared route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Matched,
    NotFound,
}

/// A rendered document.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub status: RenderStatus,
    pub route: Option<Route>,
    pub html: String,
}

/// An application attached to its mount element.
#[derive(Debug)]
pub struct MountedApp {
    root: Layout,
    router: Arc<Router>,
    outlet_attributes: Vec<(String, String)>,
    mount_point: MountPoint,
    selector: String,
    plugins: Vec<&'static str>,
}

impl MountedApp {
    /// Navigate to `location` and render the full document.
    pub fn render(&self, location: &str) -> Rendered {
        let resolution = self.router.resolve(location);

        let (status, route) = match resolution {
            Resolution::Matched(route) => (RenderStatus::Matched, Some(*route)),
            Resolution::NoMatch { ref path } => {
                tracing::warn!(location = %location, path = %path, "No match found for location");
                (RenderStatus::NotFound, None)
            }
        };

        let outlet = route.map(|r| r.page.render()).unwrap_or_default();
        let body = self
            .root
            .render(&self.router, route.as_ref(), &self.outlet_attributes, &outlet);

        let mut html = String::with_capacity(
            self.mount_point.before.len() + body.len() + self.mount_point.after.len(),
        );
        html.push_str(&self.mount_point.before);
        html.push_str(&body);
        html.push_str(&self.mount_point.after);

        Rendered { status, route, html }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn plugins(&self) -> &[&'static str] {
        &self.plugins
    }
}
