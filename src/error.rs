//! # Error Types
//!
//! This module defines error types used throughout the resume builder.

use thiserror::Error;

/// Main error type for resume builder operations
#[derive(Debug, Error)]
pub enum ResumeError {
    /// Uploaded image bytes could not be decoded
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Template name not present in the registry
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    /// Color text is not `#RRGGBB`
    #[error("Invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    /// Store mutation referenced a missing section or entry
    #[error("Invalid section: {0}")]
    InvalidSection(String),

    /// Document assembly failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
