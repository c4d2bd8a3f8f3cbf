use actix_web::HttpResponse;

const PANEL_PAGE: &str = include_str!("../../../templates/panel.html");

/// Admin panel page. All interaction happens through the JSON API; this is
/// a single static document.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(PANEL_PAGE)
}
