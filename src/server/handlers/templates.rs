//! Template registry handler.

use axum::Json;

use crate::template::{self, TemplateStyle};

/// GET /api/templates - List every template with its settings.
pub async fn list() -> Json<&'static [TemplateStyle]> {
    Json(template::TEMPLATES)
}
