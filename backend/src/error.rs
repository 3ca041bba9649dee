//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitplan_shared::PlanError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Profile required")]
    ProfileRequired,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl From<PlanError> for ApiError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::InvalidProfile(msg) => ApiError::InvalidProfile(msg),
            PlanError::ProfileRequired => ApiError::ProfileRequired,
        }
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::InvalidProfile(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_PROFILE", msg.clone())
            }
            ApiError::ProfileRequired => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "PROFILE_REQUIRED",
                "No profile on file; set up a profile before generating a plan".to_string(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::Validation("bad input".to_string()), StatusCode::BAD_REQUEST)]
    #[case(ApiError::InvalidProfile("height".to_string()), StatusCode::BAD_REQUEST)]
    #[case(ApiError::ProfileRequired, StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(ApiError::NotFound("plan".to_string()), StatusCode::NOT_FOUND)]
    fn test_error_status_codes(#[case] error: ApiError, #[case] expected: StatusCode) {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }

    #[test]
    fn test_plan_error_maps_to_api_error() {
        let err: ApiError = PlanError::ProfileRequired.into();
        assert!(matches!(err, ApiError::ProfileRequired));

        let err: ApiError = PlanError::InvalidProfile("height".to_string()).into();
        assert!(matches!(err, ApiError::InvalidProfile(_)));
    }
}
