//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, security headers)
//! - Serve static assets
//! - Fall back to the mounted application for every other path
//! - Bind server to listener with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::MountedApp;
use crate::config::FrontConfig;
use crate::http::handlers::{health, list_routes, page_handler};
use crate::http::request::{request_id_of, MakeRequestUuid, X_REQUEST_ID};
use crate::lifecycle::Shutdown;
use crate::security::headers::with_security_headers;

pub const HEALTH_PATH: &str = "/healthz";
pub const ROUTES_PATH: &str = "/__routes";

/// Paths answered by the server itself, never by assets or the application.
pub const RESERVED_PATHS: [&str; 2] = [HEALTH_PATH, ROUTES_PATH];

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub app: Arc<MountedApp>,
}

/// HTTP server for the front application.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around a mounted application.
    pub fn new(config: FrontConfig, app: MountedApp) -> Self {
        let state = AppState { app: Arc::new(app) };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &FrontConfig, state: AppState) -> Router {
        let router = Router::new()
            .route(HEALTH_PATH, get(health))
            .route(ROUTES_PATH, get(list_routes))
            .nest_service(&config.app.assets_prefix, ServeDir::new(&config.app.assets_dir))
            .fallback(page_handler)
            .with_state(state);

        let router = if config.security.enable_headers {
            with_security_headers(router)
        } else {
            router
        };

        router
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id_of(request),
                )
            }))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` is triggered.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.signalled())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
