//! Dashboard Dev Server
//!
//! Serves the built front end and proxies the backend API, built with Axum.
//!
//! # Routes
//!
//! - `GET /api/*path` - forwarded to the configured backend
//! - `GET /health` - liveness probe
//! - everything else - files from the dist directory, falling back to
//!   `index.html`

pub mod error;
pub mod proxy;

pub use error::{ServerError, ServerResult};

use axum::{http::StatusCode, routing::get, Router};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::Config;

/// Shared state of the proxy handlers
pub struct ServerState {
    pub client: reqwest::Client,
    pub backend_url: String,
}

impl ServerState {
    pub fn new(backend_url: impl Into<String>, timeout: Duration) -> ServerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServerError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            backend_url: backend_url.into(),
        })
    }
}

/// GET /health
async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Build the router with all routes and middleware
pub fn build_router(state: ServerState, dist_dir: &Path) -> Router {
    let static_files =
        ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/api/*path", get(proxy::forward))
        .route("/health", get(liveness))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Dev server settings resolved from config and CLI flags
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub host: String,
    pub port: u16,
    pub dist_dir: PathBuf,
    pub backend_url: String,
    pub request_timeout: Duration,
}

impl From<&Config> for ServeOptions {
    fn from(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            dist_dir: config.server.dist_dir.clone(),
            backend_url: config.api.base_url.clone(),
            request_timeout: Duration::from_secs(config.api.request_timeout_secs),
        }
    }
}

impl ServeOptions {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Start the dev server
pub async fn serve(options: &ServeOptions) -> ServerResult<()> {
    if !options.dist_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {:?}; build the front end with `trunk build` first",
            options.dist_dir
        );
    }

    let state = ServerState::new(options.backend_url.clone(), options.request_timeout)?;
    let router = build_router(state, &options.dist_dir);

    let addr = options.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);
    tracing::info!("Proxying /api to {}", options.backend_url);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        extract::RawQuery,
        http::{header, Request},
        Json,
    };
    use serde_json::{json, Value};
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    /// Backend stub on an ephemeral port
    async fn spawn_backend() -> String {
        let backend = Router::new()
            .route("/api/paises", get(|| async { Json(json!(["Brazil", "Germany"])) }))
            .route(
                "/api/estatisticas_pib",
                get(|RawQuery(q): RawQuery| async move { Json(json!({ "query": q })) }),
            )
            .route(
                "/api/anos_range",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, backend).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn app(backend: &str, dist: &Path) -> Router {
        let state = ServerState::new(backend, Duration::from_secs(5)).unwrap();
        build_router(state, dist)
    }

    async fn get_request(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let dist = tempdir().unwrap();
        let (status, _, _) = get_request(app("http://127.0.0.1:9", dist.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_serves_static_files_with_index_fallback() {
        let dist = tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<html>dashboard</html>").unwrap();
        std::fs::write(dist.path().join("app.js"), "console.log(1);").unwrap();

        let (status, _, body) = get_request(app("http://127.0.0.1:9", dist.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log(1);");

        let (status, content_type, body) =
            get_request(app("http://127.0.0.1:9", dist.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert_eq!(body, b"<html>dashboard</html>");
    }

    #[tokio::test]
    async fn test_proxy_relays_body_status_and_query() {
        let backend = spawn_backend().await;
        let dist = tempdir().unwrap();

        let (status, content_type, body) = get_request(app(&backend, dist.path()), "/api/paises").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let countries: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(countries, json!(["Brazil", "Germany"]));

        let (_, _, body) = get_request(
            app(&backend, dist.path()),
            "/api/estatisticas_pib?paises=Brazil%2CChile&minAno=2015&maxAno=2020",
        )
        .await;
        let echoed: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            echoed["query"],
            json!("paises=Brazil%2CChile&minAno=2015&maxAno=2020")
        );

        let (status, _, _) = get_request(app(&backend, dist.path()), "/api/anos_range").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_bad_gateway() {
        let dist = tempdir().unwrap();
        let (status, _, body) = get_request(app("http://127.0.0.1:9", dist.path()), "/api/paises").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["error"]["code"], json!("BAD_GATEWAY"));
    }
}
