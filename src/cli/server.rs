//! HTTP server mode for REST API access to page-list generation

use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::loader::GenerationOptions;
use crate::pagination::{generate_pages, GenerationConfig};

/// Largest `window_size` or `count` the server accepts
///
/// Output length is bounded by the window or count, so this caps the
/// memory a single request can claim.
pub const MAX_PAGE_SLOTS: u32 = 1_000;

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Layout used when a request carries no options
    pub default_config: GenerationConfig,
}

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

/// Request body for the pages endpoint
#[derive(Debug, Deserialize)]
struct PagesRequest {
    /// Page currently viewed (1-indexed)
    current_page: u32,
    /// Number of pages available
    total_pages: u32,
    /// Flat options; the server default applies when absent
    #[serde(default)]
    options: Option<GenerationOptions>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the HTTP router
pub fn router(config: ServerConfig) -> Router {
    let state = AppState { config };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/pages", post(pages))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    tracing::info!(
        mode = config.default_config.mode(),
        "Default generator config loaded"
    );
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to port {port}"))?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Reject layouts wider than [`MAX_PAGE_SLOTS`]
fn check_limits(config: &GenerationConfig) -> Result<()> {
    let (field, value) = match config {
        GenerationConfig::Range(range) => ("window_size", range.window_size),
        GenerationConfig::Count(count) => ("count", count.count),
    };
    if value > MAX_PAGE_SLOTS {
        return Err(Error::invalid_value(
            field,
            format!("{field} {value} exceeds the server limit of {MAX_PAGE_SLOTS}"),
        ));
    }
    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Generate a page list
async fn pages(State(state): State<Arc<AppState>>, Json(req): Json<PagesRequest>) -> Response {
    let config = req
        .options
        .map(GenerationOptions::into_config)
        .transpose()
        .map(|config| config.unwrap_or(state.config.default_config))
        .and_then(|config| check_limits(&config).map(|()| config));
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(e.to_string())),
            )
                .into_response();
        }
    };

    match generate_pages(req.current_page, req.total_pages, &config) {
        Ok(pages) => (
            StatusCode::OK,
            Json(ApiResponse::success(json!({
                "mode": config.mode(),
                "current_page": req.current_page,
                "total_pages": req.total_pages,
                "pages": pages,
            }))),
        )
            .into_response(),
        Err(e) => {
            tracing::debug!("Rejected page request: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(e.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{CountConfig, RangeConfig};

    #[test]
    fn test_check_limits() {
        assert!(check_limits(&GenerationConfig::default()).is_ok());
        assert!(check_limits(&RangeConfig::new(MAX_PAGE_SLOTS).into()).is_ok());
        assert!(check_limits(&CountConfig::new(MAX_PAGE_SLOTS).into()).is_ok());

        let err = check_limits(&CountConfig::new(u32::MAX).into()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
        let err = check_limits(&RangeConfig::new(MAX_PAGE_SLOTS + 2).into()).unwrap_err();
        assert!(err.to_string().contains("server limit"));
    }

    #[tokio::test]
    async fn test_serve_reports_bind_failure() {
        let taken = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = serve(ServerConfig::default(), port).await.unwrap_err();
        assert!(matches!(err, Error::Anyhow(_)));
        assert!(err.to_string().contains(&format!("Failed to bind to port {port}")));
    }
}
