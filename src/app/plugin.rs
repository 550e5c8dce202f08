//! Application plugins.
//!
//! A plugin extends the application before mount: it may provide the
//! router, add tags to the document head, or decorate the router view.

use std::sync::Arc;

use thiserror::Error;

use crate::app::AppContext;
use crate::pages::escape_html;
use crate::routing::Router;

/// Errors raised while installing a plugin.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PluginError {
    /// A second router was offered to the application.
    #[error("a router is already installed")]
    RouterAlreadyInstalled,

    /// Plugin options are unusable.
    #[error("plugin `{plugin}` is misconfigured: {reason}")]
    Misconfigured {
        plugin: &'static str,
        reason: String,
    },
}

/// Something that can be installed into an application.
pub trait Plugin: Send + Sync {
    /// Unique plugin name; a name is installed at most once.
    fn name(&self) -> &'static str;

    /// Install into the application context.
    fn install(&self, app: &mut AppContext) -> Result<(), PluginError>;
}

/// Provides the router to the application.
#[derive(Debug, Clone)]
pub struct RouterPlugin {
    router: Arc<Router>,
}

impl RouterPlugin {
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}

impl Plugin for RouterPlugin {
    fn name(&self) -> &'static str {
        "router"
    }

    fn install(&self, app: &mut AppContext) -> Result<(), PluginError> {
        app.provide_router(self.router.clone())
    }
}

/// Animates router view transitions.
///
/// Loads the animation script as a module and marks the router view with
/// `data-auto-animate`; the script animates children of marked elements.
#[derive(Debug, Clone)]
pub struct AutoAnimatePlugin {
    script_src: String,
}

impl AutoAnimatePlugin {
    pub const DEFAULT_SCRIPT_SRC: &'static str = "/assets/auto-animate.js";

    pub fn new(script_src: impl Into<String>) -> Self {
        Self {
            script_src: script_src.into(),
        }
    }
}

impl Default for AutoAnimatePlugin {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCRIPT_SRC)
    }
}

impl Plugin for AutoAnimatePlugin {
    fn name(&self) -> &'static str {
        "auto-animate"
    }

    fn install(&self, app: &mut AppContext) -> Result<(), PluginError> {
        if self.script_src.trim().is_empty() {
            return Err(PluginError::Misconfigured {
                plugin: self.name(),
                reason: "script_src is empty".to_string(),
            });
        }

        app.add_head_tag(format!(
            "<script type=\"module\" src=\"{}\"></script>",
            escape_html(&self.script_src)
        ));
        app.set_outlet_attribute("data-auto-animate", "");
        Ok(())
    }
}
