//! # HTTP Export API
//!
//! Stateless endpoints that render, normalize or process whatever the
//! client sends. Nothing is stored between requests.
//!
//! ## Usage
//!
//! ```bash
//! resume-builder serve --listen 127.0.0.1:8080
//! ```
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | GET | `/api/templates` | | template descriptors |
//! | POST | `/api/resume/pdf` | `{template, resume, footerNote?}` | `resume.pdf` |
//! | POST | `/api/resume/json` | resume | `resume_data.json` |
//! | POST | `/api/photo` | multipart `image` | 200×200 PNG |

mod handlers;
mod state;

pub use handlers::resume::{PdfRequest, WARNINGS_HEADER};
pub use state::{DEFAULT_MAX_UPLOAD_BYTES, ServerConfig};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ResumeError;

/// Build the API router.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/api/templates", get(handlers::templates::list))
        .route("/api/resume/pdf", post(handlers::resume::pdf))
        .route("/api/resume/json", post(handlers::resume::json))
        .route(
            "/api/photo",
            post(handlers::photo::upload).layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use resume_builder::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), resume_builder::ResumeError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), ResumeError> {
    let app = router(&config);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            ResumeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to bind to {}: {}", config.listen_addr, e),
            ))
        })?;

    info!(
        addr = %config.listen_addr,
        max_upload_bytes = config.max_upload_bytes,
        "Resume builder API listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
