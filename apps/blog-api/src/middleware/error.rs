//! Error handling - maps failures to the API's `{error, details}` bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use blog_shared::{ErrorBody, to_pretty_json};
use std::fmt;

use blog_core::error::DomainError;

/// Application-level error type.
///
/// Write failures answer 400 on create but 404 on update and delete; existing
/// clients depend on those codes.
#[derive(Debug)]
pub enum AppError {
    /// Unknown id or unparseable path.
    NotFound,
    /// Create was rejected by validation or by the store.
    CreateFailed(String),
    /// Update or delete was rejected by validation or by the store.
    WriteFailed(String),
    /// Request rejected outside of any create, update or delete.
    BadRequest(String),
    Internal(String),
}

impl AppError {
    pub fn create_failed(err: impl fmt::Display) -> Self {
        AppError::CreateFailed(err.to_string())
    }

    pub fn write_failed(err: impl fmt::Display) -> Self {
        AppError::WriteFailed(err.to_string())
    }

    pub fn internal(err: impl fmt::Display) -> Self {
        AppError::Internal(err.to_string())
    }

    fn body(&self) -> ErrorBody {
        match self {
            AppError::NotFound => ErrorBody::not_found(),
            AppError::CreateFailed(detail) => {
                tracing::warn!(details = %detail, "Blog post could not be created");
                ErrorBody::new("Blog post could not be created", detail.as_str())
            }
            AppError::WriteFailed(detail) => {
                tracing::warn!(details = %detail, "Blog post write failed");
                ErrorBody::new("Blog post cannot be found", detail.as_str())
            }
            AppError::BadRequest(detail) => ErrorBody::new("Bad Request", detail.as_str()),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorBody::new(
                    "Internal Server Error",
                    "The server encountered an internal error.",
                )
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::CreateFailed(msg) => write!(f, "Create failed: {}", msg),
            AppError::WriteFailed(msg) => write!(f, "Write failed: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::WriteFailed(_) => StatusCode::NOT_FOUND,
            AppError::CreateFailed(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match to_pretty_json(&self.body()) {
            Ok(bytes) => response.content_type(ContentType::json()).body(bytes),
            Err(_) => response.finish(),
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::NotFound,
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
