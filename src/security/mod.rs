//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (content sniffing, framing and referrer policy)
//! ```
//!
//! # Design Decisions
//! - Headers are only set when the handler did not set them
//! - Toggled as a whole by `security.enable_headers`

pub mod headers;
