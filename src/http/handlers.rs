//! Request handlers.

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::app::RenderStatus;
use crate::http::request::request_id_of;
use crate::http::server::AppState;
use crate::observability::metrics;

/// One entry of the public route listing.
#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub href: String,
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// The route table in declaration order.
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteEntry>> {
    let router = state.app.router();
    let entries = router
        .routes()
        .iter()
        .map(|route| RouteEntry {
            name: route.name,
            path: route.path,
            href: router.history().href(route.path),
        })
        .collect();

    Json(entries)
}

/// History-mode fallback: render the application for any other path.
pub async fn page_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();

    if method != Method::GET && method != Method::HEAD {
        let mut response = StatusCode::METHOD_NOT_ALLOWED.into_response();
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("GET, HEAD"));
        metrics::record_request(405, None, start_time);
        return response;
    }

    let uri = request.uri();
    let location = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    tracing::debug!(
        request_id = %request_id_of(&request),
        method = %method,
        location = %location,
        "Rendering application"
    );

    let rendered = state.app.render(location);
    let status = match rendered.status {
        RenderStatus::Matched => StatusCode::OK,
        RenderStatus::NotFound => StatusCode::NOT_FOUND,
    };

    metrics::record_request(status.as_u16(), rendered.route.map(|r| r.name), start_time);

    if method == Method::HEAD {
        let mut response = status.into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
        return response;
    }

    (status, Html(rendered.html)).into_response()
}
