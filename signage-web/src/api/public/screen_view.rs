use actix_web::{web, HttpResponse};
use signage_error::{web::WebError, WebResult};
use signage_models::ScreenId;
use std::io::ErrorKind;

use crate::AppState;

/// Public display route: streams back the previously generated page
/// verbatim. No session required; display devices point straight here.
pub async fn show_screen(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> WebResult<HttpResponse> {
    let id = path
        .parse::<i64>()
        .ok()
        .and_then(|n| ScreenId::new(n).ok())
        .ok_or_else(|| WebError::NotFound("Screen not found".into()))?;

    match tokio::fs::read_to_string(state.generator.page_path(id)).await {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(WebError::NotFound(format!(
            "Screen {id} has not been generated yet. Generate the presentation first."
        ))),
        Err(e) => Err(e.into()),
    }
}
