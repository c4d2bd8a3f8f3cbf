use actix_web::web;
use signage_error::WebResult;
use signage_models::{web::GenerateResponse, ScreenId};

use crate::AppState;

/// `POST /api/generate/{id}`: render the display's current configuration to
/// its static page. I/O failures surface as 500 with the error's message
/// text; the previous page, if any, stays in place.
pub async fn generate_screen(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> WebResult<web::Json<GenerateResponse>> {
    let id = ScreenId::new(path.into_inner())?;
    let page_path = state.generator.generate(id).await?;
    Ok(web::Json(GenerateResponse {
        success: true,
        message: "Presentation generated".to_string(),
        url: id.public_url(),
        path: page_path.display().to_string(),
    }))
}
