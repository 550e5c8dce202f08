//! Startup orchestration.
//!
//! Builds the route table and router from configuration, installs the
//! plugins and mounts the application into the shell document.

use std::path::Path;

use thiserror::Error;

use crate::app::{App, AutoAnimatePlugin, MountError, MountedApp, PluginError, RouterPlugin, ShellTemplate};
use crate::config::FrontConfig;
use crate::pages::layout::Layout;
use crate::routing::{History, RouteTable, RouteTableError, Router};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid route table: {0}")]
    Routes(#[from] RouteTableError),

    #[error("plugin installation failed: {0}")]
    Plugin(#[from] PluginError),

    #[error("failed to read shell document {path}: {source}")]
    Shell {
        path: String,
        source: std::io::Error,
    },

    #[error("mount failed: {0}")]
    Mount(#[from] MountError),
}

/// Create, configure and mount the application.
pub fn build_app(config: &FrontConfig) -> Result<MountedApp, StartupError> {
    let options = config.router.match_options();
    let table = RouteTable::standard(options)?;
    let history = History::new(config.router.history, &config.router.base);

    tracing::debug!(
        routes = table.len(),
        history = ?history.mode(),
        base = %history.base(),
        "Route table compiled"
    );

    let router = Router::new(table, history, options);

    let mut app = App::new(Layout::new(config.app.title.clone())).use_plugin(RouterPlugin::new(router))?;
    if config.plugins.auto_animate.enabled {
        app = app.use_plugin(AutoAnimatePlugin::new(config.plugins.auto_animate.script_src.clone()))?;
    }

    let shell = match &config.app.index_html {
        Some(path) => ShellTemplate::from_file(Path::new(path)).map_err(|source| StartupError::Shell {
            path: path.clone(),
            source,
        })?,
        None => ShellTemplate::standard(&config.app.title, &config.app.stylesheet_href()),
    };

    Ok(app.mount(&shell, &config.app.mount_selector)?)
}
