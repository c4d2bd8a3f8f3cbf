//! Administrative routes, all behind the session guard.

mod generate;
mod panel;
mod screens;
mod upload;

use actix_web::web;

use crate::middleware::RequireLogin;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .wrap(RequireLogin)
            .route("/", web::get().to(panel::index))
            .service(
                web::scope("/api")
                    .route("/screens", web::get().to(screens::list_screens))
                    .service(
                        web::resource("/screen/{id}")
                            .route(web::get().to(screens::get_screen))
                            .route(web::post().to(screens::save_screen)),
                    )
                    .route("/upload", web::post().to(upload::upload_file))
                    .route("/generate/{id}", web::post().to(generate::generate_screen)),
            ),
    );
}
