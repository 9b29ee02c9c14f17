use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tower::BoxError;

/// Startup failures
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] toml::de::Error),
    #[error("Invalid setting `{key}`: {reason}")]
    InvalidSetting { key: &'static str, reason: String },
    #[error("Failed to load airport model: {0}")]
    ModelError(#[from] wayfinder_core::Error),
}

/// Request failures, rendered as `{"error": "..."}`
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Unknown POI: {0}")]
    UnknownPoi(String),
    #[error("Unknown gate: {0}")]
    UnknownGate(String),
    #[error("No walkable path from {from} to {to}")]
    NoRoute { from: String, to: String },
    #[error(transparent)]
    Core(#[from] wayfinder_core::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownPoi(_) | ApiError::UnknownGate(_) => StatusCode::NOT_FOUND,
            ApiError::NoRoute { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Maps failures raised by the timeout and concurrency middleware
pub async fn handle_middleware_error(err: BoxError) -> (StatusCode, Json<ErrorResponse>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorResponse {
                error: "Request timed out".to_string(),
            }),
        )
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Unhandled internal error: {err}"),
            }),
        )
    }
}
