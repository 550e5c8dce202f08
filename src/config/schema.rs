//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the front
//! server. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::{HistoryMode, MatchOptions};

/// Root configuration for the front server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FrontConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Application shell and mount settings.
    pub app: AppConfig,

    /// Router settings.
    pub router: RouterConfig,

    /// Plugin settings.
    pub plugins: PluginsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Response hardening.
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Application shell configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Document title and navigation brand.
    pub title: String,

    /// Selector of the element the application mounts into.
    pub mount_selector: String,

    /// Optional `index.html` replacing the built-in shell.
    pub index_html: Option<String>,

    /// Directory served as static assets.
    pub assets_dir: String,

    /// URL prefix the assets are served under.
    pub assets_prefix: String,

    /// Stylesheet linked from the built-in shell, relative to `assets_prefix`.
    pub stylesheet: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Olympiads".to_string(),
            mount_selector: "#app".to_string(),
            index_html: None,
            assets_dir: "assets".to_string(),
            assets_prefix: "/assets".to_string(),
            stylesheet: "main.css".to_string(),
        }
    }
}

impl AppConfig {
    /// Public URL of the stylesheet.
    pub fn stylesheet_href(&self) -> String {
        format!(
            "{}/{}",
            self.assets_prefix.trim_end_matches('/'),
            self.stylesheet.trim_start_matches('/')
        )
    }
}

/// Router configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// History mode ("web" or "hash").
    pub history: HistoryMode,

    /// Base path the application lives under.
    pub base: String,

    /// Reject trailing slashes the route path does not have.
    pub strict: bool,

    /// Case-sensitive path matching.
    pub sensitive: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryMode::Web,
            base: "/".to_string(),
            strict: false,
            sensitive: false,
        }
    }
}

impl RouterConfig {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            strict: self.strict,
            sensitive: self.sensitive,
        }
    }
}

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PluginsConfig {
    pub auto_animate: AutoAnimateConfig,
}

/// Auto-animate plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AutoAnimateConfig {
    /// Install the plugin.
    pub enabled: bool,

    /// Module script that animates marked elements.
    pub script_src: String,
}

impl Default for AutoAnimateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            script_src: "/assets/auto-animate.js".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
        }
    }
}
