//! Photo upload handler.

use axum::{
    extract::Multipart,
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::{error_response, task_error};
use crate::photo;

/// POST /api/photo - Turn the uploaded `image` field into the circular avatar.
pub async fn upload(mut multipart: Multipart) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Multipart error: {}", e)))?
    {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read image: {}", e)))?;
            image_data = Some(bytes.to_vec());
            break;
        }
    }

    let image_bytes =
        image_data.ok_or((StatusCode::BAD_REQUEST, "No image field found".to_string()))?;

    // Move CPU-intensive work to blocking thread pool
    let png = tokio::task::spawn_blocking(move || photo::process_profile_image(&image_bytes))
        .await
        .map_err(task_error)?
        .map_err(error_response)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
