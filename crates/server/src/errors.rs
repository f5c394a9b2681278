use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error response with body `{timestamp, status, error, message}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    timestamp: String,
    status: u16,
    error: &'a str,
    message: &'a str,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(message.into()))
    }

    pub fn category_not_found() -> Self { Self::not_found("Category not found") }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(msg)),
            other => {
                error!(err = %other, "catalog operation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(other.to_string()))
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            status: self.status.as_u16(),
            error: self.error,
            message: self.message.as_deref().unwrap_or(self.error),
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage initialisation failed: {0}")]
    Storage(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
