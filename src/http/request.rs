//! Request identification.
//!
//! # Responsibilities
//! - Generate a UUID v4 request ID when the client sent none
//! - Keep a client-supplied `x-request-id` unchanged
//! - Echo the ID on the response
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates request IDs from random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Request ID of a request, or `"unknown"` before the layer ran.
pub fn request_id_of<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
