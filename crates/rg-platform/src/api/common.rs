//! Common API types and utilities

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::WaitlistError;
use crate::repository::DEFAULT_PAGE_SIZE;
use crate::validation::FieldError;

pub type ApiResult<T> = std::result::Result<Json<T>, WaitlistError>;

/// Standard failure envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Pagination window (`skip`/`limit` query parameters)
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    #[serde(default)]
    pub skip: u64,

    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl IntoResponse for WaitlistError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            WaitlistError::Validation { details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError {
                    success: false,
                    error: "Validation failed".to_string(),
                    message: "Request failed".to_string(),
                    details: Some(details),
                },
            ),
            WaitlistError::Duplicate { .. } => (
                StatusCode::CONFLICT,
                ApiError {
                    success: false,
                    error: "This email is already on the waitlist".to_string(),
                    message: "Request failed".to_string(),
                    details: None,
                },
            ),
            // Store and serialization faults stay server-side; the
            // caller gets a generic message only.
            err => {
                tracing::error!(error = %err, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError {
                        success: false,
                        error: "Internal server error".to_string(),
                        message: "Request failed".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
