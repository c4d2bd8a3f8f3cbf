use actix_web::web;
use signage_error::WebResult;
use signage_models::{web::SaveResponse, ScreenConfig, ScreenId, ScreenSummary};
use tracing::info;

use crate::AppState;

/// `GET /api/screens`: one summary per display, always five entries.
pub async fn list_screens(
    state: web::Data<AppState>,
) -> WebResult<web::Json<Vec<ScreenSummary>>> {
    Ok(web::Json(state.store.summaries().await?))
}

/// `GET /api/screen/{id}`: the stored record, or a default empty one.
pub async fn get_screen(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> WebResult<web::Json<ScreenConfig>> {
    let id = ScreenId::new(path.into_inner())?;
    Ok(web::Json(state.store.load(id).await?))
}

/// `POST /api/screen/{id}`: wholesale overwrite of the record. The document
/// is stored verbatim; no schema is enforced.
pub async fn save_screen(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ScreenConfig>,
) -> WebResult<web::Json<SaveResponse>> {
    let id = ScreenId::new(path.into_inner())?;
    let config = body.into_inner();
    state.store.save(id, &config).await?;
    info!(screen = %id, slides = config.slides_count(), "screen config updated");
    Ok(web::Json(SaveResponse::saved()))
}
