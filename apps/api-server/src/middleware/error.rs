//! Error handling - every failure becomes a JSON `{error, help?}` body.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use lingo_core::DomainError;
use lingo_core::ports::UpstreamError;
use lingo_shared::ErrorResponse;

/// Operator guidance attached to credential errors.
pub const CREDENTIAL_HELP: &str =
    "Set RAPIDAPI_KEY in the server (or host) environment variables and restart the relay";

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Server misconfiguration: RAPIDAPI_KEY not set")]
    MisconfiguredCredential,

    #[error("Upstream request timed out")]
    UpstreamTimeout,

    #[error("Upstream error: status {0}")]
    UpstreamStatus(u16),

    #[error("Unexpected upstream shape")]
    UnexpectedShape,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::MisconfiguredCredential => StatusCode::SERVICE_UNAVAILABLE,
            AppError::UpstreamTimeout => StatusCode::INTERNAL_SERVER_ERROR,
            // 4xx from the provider says nothing about the relay's own
            // client, so the status is floored at 500.
            AppError::UpstreamStatus(code) => match (*code).max(500) {
                code @ 500..=599 => StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
                _ => StatusCode::BAD_GATEWAY,
            },
            AppError::UnexpectedShape => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::new(detail.clone()),
            AppError::RateLimited => ErrorResponse::rate_limited(),
            AppError::MisconfiguredCredential => {
                ErrorResponse::new(self.to_string()).with_help(CREDENTIAL_HELP)
            }
            AppError::UpstreamTimeout => ErrorResponse::upstream_timeout(),
            AppError::UpstreamStatus(_) => ErrorResponse::upstream_error(),
            AppError::UnexpectedShape => ErrorResponse::unexpected_shape(),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::MissingCredential => AppError::MisconfiguredCredential,
            UpstreamError::Timeout(_) => AppError::UpstreamTimeout,
            UpstreamError::Status(code) => AppError::UpstreamStatus(code),
            UpstreamError::UnexpectedShape => AppError::UnexpectedShape,
            UpstreamError::Transport(msg) => AppError::Internal(msg),
        }
    }
}

/// Turn actix's body/query extraction failures into JSON 400s.
pub fn payload_error_handler<E: std::fmt::Display>(err: E, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
