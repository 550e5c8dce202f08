//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every HTTP log line (TraceLayer span)
//! - Metrics are cheap (atomic increments)
//! - `RUST_LOG` overrides the configured level

pub mod logging;
pub mod metrics;
