//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign or propagate x-request-id)
//!     → handlers.rs
//!         /healthz, /__routes      → fixed responses
//!         <assets_prefix>/*        → static files
//!         anything else (GET/HEAD) → MountedApp::render (history fallback)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
