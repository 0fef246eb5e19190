//! Resume export handlers.
//!
//! Every request carries the whole resume; nothing is kept between calls.

use axum::{
    Json,
    http::{HeaderName, StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;

use super::{error_response, task_error};
use crate::{
    document::RenderOptions,
    export::{self, Export},
    resume::ResumeData,
    template::DEFAULT_TEMPLATE,
};

/// Response header carrying the number of render warnings.
pub const WARNINGS_HEADER: HeaderName = HeaderName::from_static("x-render-warnings");

/// Request body for the PDF endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfRequest {
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default)]
    pub resume: ResumeData,
    #[serde(default)]
    pub footer_note: Option<String>,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn attachment(export: Export) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, export.mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ),
            (WARNINGS_HEADER, export.warnings.len().to_string()),
        ],
        export.bytes,
    )
}

/// POST /api/resume/pdf - Render a resume snapshot.
pub async fn pdf(
    Json(request): Json<PdfRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let export = tokio::task::spawn_blocking(move || {
        let mut data = request.resume;
        data.sync_section_order();
        let options = RenderOptions {
            footer_note: request.footer_note,
            ..Default::default()
        };
        export::pdf(&data, &request.template, &options)
    })
    .await
    .map_err(task_error)?
    .map_err(error_response)?;

    Ok(attachment(export))
}

/// POST /api/resume/json - Normalize a resume snapshot into the data file.
pub async fn json(
    Json(mut data): Json<ResumeData>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    data.sync_section_order();
    let export = export::json(&data).map_err(error_response)?;
    Ok(attachment(export))
}
