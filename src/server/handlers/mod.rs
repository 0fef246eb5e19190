//! HTTP handlers for the server.

pub mod photo;
pub mod resume;
pub mod templates;

use axum::http::StatusCode;

use crate::error::ResumeError;

/// Map a library error to the `(status, message)` pair handlers return.
pub(crate) fn error_response(e: ResumeError) -> (StatusCode, String) {
    let status = match e {
        ResumeError::UnsupportedFormat(_)
        | ResumeError::UnknownTemplate(_)
        | ResumeError::InvalidColor(_)
        | ResumeError::InvalidSection(_) => StatusCode::BAD_REQUEST,
        ResumeError::Serialization(_)
        | ResumeError::Json(_)
        | ResumeError::Image(_)
        | ResumeError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}

/// Error for a blocking task that panicked or was cancelled.
pub(crate) fn task_error(e: tokio::task::JoinError) -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Processing error: {}", e),
    )
}
