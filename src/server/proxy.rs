//! Backend proxy
//!
//! `GET /api/*` is forwarded unchanged (path and query string) so the
//! front end can call same-origin URLs during development.

use axum::{
    body::Body,
    extract::{Path, RawQuery, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;

use super::error::{ServerError, ServerResult};
use super::ServerState;

/// Backend URL for a proxied path
pub fn upstream_url(backend: &str, path: &str, query: Option<&str>) -> String {
    let backend = backend.trim_end_matches('/');
    match query {
        Some(query) if !query.is_empty() => format!("{}/api/{}?{}", backend, path, query),
        _ => format!("{}/api/{}", backend, path),
    }
}

/// GET /api/*path
pub async fn forward(
    State(state): State<Arc<ServerState>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> ServerResult<Response> {
    let url = upstream_url(&state.backend_url, &path, query.as_deref());
    tracing::debug!(%url, "Forwarding to backend");

    let upstream_error = |e: reqwest::Error| ServerError::Upstream {
        url: url.clone(),
        message: e.to_string(),
    };

    let upstream = state.client.get(&url).send().await.map_err(upstream_error)?;

    let status = StatusCode::from_u16(upstream.status().as_u16())
        .map_err(|e| ServerError::Internal(e.to_string()))?;
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    let body = upstream.bytes().await.map_err(upstream_error)?;

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .map_err(|e| ServerError::Internal(e.to_string()))
}
