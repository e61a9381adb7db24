//! HTTP server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/compareStatistics` | Compare the raw request body against the baseline |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! The body of `POST /compareStatistics` is the document text itself, not
//! JSON. The response is a [`ComparisonResponse`].
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "baseline_unavailable", "message": "Failed to compute statistics. Please try again later." } }
//! ```
//!
//! Error codes: `baseline_unavailable` (503), `internal` (500). The message
//! is the same for every failure; the cause is only logged.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so browser frontends on
//! another port can call the API.

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use healthstats_core::compare::ComparisonResponse;
use healthstats_core::error::CompareError;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

use crate::config::Config;
use crate::service::ComparisonService;

/// Message returned for every failed comparison.
pub const FAILURE_MESSAGE: &str = "Failed to compute statistics. Please try again later.";

#[derive(Clone)]
struct AppState {
    service: Arc<ComparisonService>,
}

/// Starts the HTTP server on `[server].bind` and runs until the process is
/// terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let service = Arc::new(ComparisonService::from_config(config)?);
    let app = router(service, config.server.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!(
        bind = %config.server.bind,
        baseline = %config.baseline.path.display(),
        "server listening"
    );
    println!("HealthStats server listening on http://{}", config.server.bind);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the application router around `service`.
///
/// Request bodies larger than `max_body_bytes` are rejected with 413.
pub fn router(service: Arc<ComparisonService>, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/compareStatistics", post(handle_compare))
        .route("/health", get(handle_health))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(cors)
        .with_state(AppState { service })
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

struct AppError {
    status: StatusCode,
    code: &'static str,
}

impl From<CompareError> for AppError {
    fn from(err: CompareError) -> Self {
        let status = match &err {
            CompareError::BaselineUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CompareError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(code = err.code(), error = %err, "comparison failed");
        AppError {
            status,
            code: err.code(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code.to_string(),
                message: FAILURE_MESSAGE.to_string(),
            },
        };
        (self.status, Json(body)).into_response()
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ POST /compareStatistics ============

/// Handler for `POST /compareStatistics`.
///
/// The whole body is the document. An empty body is valid and yields an
/// all-zero user-input row.
async fn handle_compare(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ComparisonResponse>, AppError> {
    let response = state.service.compare(&body).await?;
    Ok(Json(response))
}
