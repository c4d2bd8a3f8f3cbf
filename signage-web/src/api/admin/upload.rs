use actix_multipart::{Field, Multipart};
use actix_web::web;
use futures::StreamExt;
use signage_error::{web::WebError, WebResult};
use signage_models::{constants::UPLOADS_URL_PREFIX, web::UploadResponse};

use crate::AppState;

/// `POST /api/upload`: accepts exactly one file per request, in a multipart
/// field named `file`. Extension decides acceptance and the reported type;
/// the body is streamed with a hard byte limit.
pub async fn upload_file(
    state: web::Data<AppState>,
    mut multipart: Multipart,
) -> WebResult<web::Json<UploadResponse>> {
    let mut field = find_file_field(&mut multipart)
        .await?
        .ok_or_else(|| WebError::BadRequest("No file uploaded".to_string()))?;

    let original = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .map(str::to_owned)
        .unwrap_or_default();
    if original.is_empty() {
        return Err(WebError::BadRequest("Empty filename".to_string()));
    }

    let kind = state
        .uploads
        .classify(&original)
        .ok_or_else(|| WebError::BadRequest(format!("File type not allowed: `{original}`")))?;

    let bytes = read_limited(&mut field, state.settings.upload.max_bytes).await?;
    if bytes.is_empty() {
        return Err(WebError::BadRequest("Empty file uploaded".to_string()));
    }

    let filename = state.uploads.store(&original, &bytes).await?;
    Ok(web::Json(UploadResponse {
        success: true,
        url: format!("{UPLOADS_URL_PREFIX}/{filename}"),
        filename,
        kind: kind.as_str().to_string(),
    }))
}

/// Locate the `file` field, draining any other form fields along the way.
async fn find_file_field(multipart: &mut Multipart) -> WebResult<Option<Field>> {
    while let Some(item) = multipart.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .map(str::to_owned);
        if name.as_deref() == Some("file") {
            return Ok(Some(field));
        }
        while let Some(chunk) = field.next().await {
            chunk?;
        }
    }
    Ok(None)
}

/// Read field bytes with a strict size limit.
///
/// # Errors
/// Returns 400 when the accumulated size exceeds the limit.
async fn read_limited(field: &mut Field, max_bytes: usize) -> WebResult<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();
    let mut total: usize = 0;
    while let Some(chunk) = field.next().await {
        let data = chunk?;
        total = total.saturating_add(data.len());
        if total > max_bytes {
            return Err(WebError::BadRequest(format!(
                "File too large: {} bytes (max {})",
                total, max_bytes
            )));
        }
        buf.extend_from_slice(&data);
    }
    Ok(buf)
}
