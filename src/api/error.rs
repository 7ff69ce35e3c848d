//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::data::DashboardError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Load or selection failure from the render pipeline
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    /// Render stage that failed ("load" or "selection")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, component) = match &self {
            ApiError::Dashboard(e @ DashboardError::Configuration(_)) => {
                (StatusCode::BAD_REQUEST, "CONFIGURATION_ERROR", Some(e.component()))
            }
            ApiError::Dashboard(e @ DashboardError::DataSource { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATA_SOURCE_ERROR",
                Some(e.component()),
            ),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", None),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR", None),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Rejected selection"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                component: component.map(str::to_string),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
