//! API Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use climate_storage::{parse_date, StorageError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path segment is not a `YYYY-MM-DD` date
    #[error("Invalid {param} date '{value}', expected YYYY-MM-DD")]
    InvalidDate { param: &'static str, value: String },

    /// Dataset could not be read
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidDate { .. } => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::InvalidDate { .. } => {
                warn!("Rejected request: {}", self);
                self.to_string()
            }
            ApiError::Storage(e) => {
                error!("Request failed: {}", e);
                "database error".to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Check that a path parameter is a well-formed date
pub fn require_date(param: &'static str, value: &str) -> Result<(), ApiError> {
    parse_date(value).map(|_| ()).map_err(|_| ApiError::InvalidDate {
        param,
        value: value.to_string(),
    })
}
