//! Routes reachable without a session: login/logout, health, uploaded media
//! and the generated display pages.

pub mod auth;
pub mod health;
pub mod screen_view;

use actix_files::Files;
use actix_web::web;
use signage_models::{constants::UPLOADS_URL_PREFIX, Settings};

pub fn configure_routes(cfg: &mut web::ServiceConfig, settings: &Settings) {
    cfg.service(
        web::resource("/login")
            .route(web::get().to(auth::login_form))
            .route(web::post().to(auth::login)),
    )
    .route("/logout", web::get().to(auth::logout))
        .configure(health::configure_health_routes)
        .route("/pantalla{id}", web::get().to(screen_view::show_screen))
        .service(Files::new(UPLOADS_URL_PREFIX, settings.upload.dir.as_str()));
}
