use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Why an apply attempt was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EligibilityError {
    #[error("You must be logged in to apply.")]
    NotSignedIn,
    #[error("Only employees can apply to job posts.")]
    WrongRole,
    #[error("You have already applied to this job.")]
    AlreadyApplied,
}

/// Error taxonomy for the whole service.
///
/// Validation errors never touch the store; write and read failures are
/// logged with detail and surfaced with a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    NotEligible(#[from] EligibilityError),
    #[error("backend write failed: {0}")]
    RemoteWrite(#[source] rusqlite::Error),
    #[error("backend read failed: {0}")]
    RemoteRead(#[source] rusqlite::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotEligible(reason) => match reason {
                EligibilityError::NotSignedIn => StatusCode::UNAUTHORIZED,
                EligibilityError::WrongRole => StatusCode::FORBIDDEN,
                EligibilityError::AlreadyApplied => StatusCode::CONFLICT,
            },
            ApiError::RemoteWrite(_) | ApiError::RemoteRead(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::RemoteWrite(e) => {
                error!(error = %e, "backend write failed");
                "A database error occurred".to_string()
            }
            ApiError::RemoteRead(e) => {
                error!(error = %e, "backend read failed");
                "A database error occurred".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "error": message
        }))
    }
}
