//! Olympiad front server library.
//!
//! Hosts the olympiad single-page application: a static table of six named
//! routes, a history-mode router, an auto-animate plugin, and a one-shot
//! mount into the `#app` element of the shell document.

pub mod app;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod routing;
pub mod security;

pub use app::{App, MountedApp};
pub use config::FrontConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Route, RouteTable, Router};
