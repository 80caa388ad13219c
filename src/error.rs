use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Request-level failures, mapped onto HTTP responses in one place.
///
/// `NotFoundOrForbidden` covers both a nonexistent snippet id and a snippet
/// owned by somebody else; callers cannot tell the two apart.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Validation(String),

    #[error("Snippet not found or you do not have permission to access it")]
    NotFoundOrForbidden,

    #[error("Storage operation failed")]
    Storage,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFoundOrForbidden => StatusCode::NOT_FOUND,
            ApiError::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
