use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use crate::domain::entities::FieldError;
use crate::domain::errors::DomainError;
use crate::infrastructure::http::response::BaseResponse;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Validation(Vec<FieldError>),
    /// Request refused by an extractor with its own status (415, 413)
    Rejected(StatusCode, String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Validation(fields) => {
                write!(f, "Validation failed on {} field(s)", fields.len())
            }
            ApiError::Rejected(status, msg) => write!(f, "Rejected ({}): {}", status, msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, BaseResponse::error(msg)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, BaseResponse::error(msg)),
            ApiError::Validation(fields) => (StatusCode::BAD_REQUEST, BaseResponse::errors(fields)),
            ApiError::Rejected(status, msg) => (status, BaseResponse::error(msg)),
            ApiError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, BaseResponse::error(msg))
            }
        };

        (status, Json(body)).into_response()
    }
}

// Convert from domain errors
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DomainError::Database(db_err) => ApiError::Internal(db_err.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
