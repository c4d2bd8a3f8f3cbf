//! Web server module for the signage panel.

pub mod api;
mod middleware;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{
    cookie::Key,
    dev::Server,
    middleware::{Logger, NormalizePath},
    web::{self, Data},
    App, HttpServer,
};
use sha2::{Digest, Sha512};
use signage_core::{PageGenerator, ScreenStore, UploadStore};
use signage_error::{web::WebError, SignageResult};
use signage_models::Settings;
use tracing::info;

/// Shared application state: settings plus the three core services.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub store: ScreenStore,
    pub uploads: UploadStore,
    pub generator: PageGenerator,
}

impl AppState {
    pub fn from_settings(settings: Settings) -> SignageResult<Self> {
        let store = ScreenStore::new(settings.screens.config_dir.as_str());
        let uploads = UploadStore::new(
            settings.upload.dir.as_str(),
            settings.upload.allowed_image_exts.clone(),
            settings.upload.allowed_video_exts.clone(),
        );
        let generator = PageGenerator::new(store.clone(), settings.screens.output_dir.as_str())?;
        Ok(AppState {
            settings,
            store,
            uploads,
            generator,
        })
    }
}

/// Derive the cookie-signing key from the configured secret.
///
/// `Key::from` wants at least 64 bytes of material; a single SHA-512 digest
/// of the secret provides exactly that, whatever the secret's length.
pub fn session_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(&digest)
}

/// JSON extractor config shared by the server and the integration tests:
/// malformed bodies come back as the panel's `{"error": ...}` shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| WebError::BadRequest(err.to_string()).into())
}

/// SignageWebServer handles the web server initialization.
pub struct SignageWebServer;

impl SignageWebServer {
    /// Create and configure the HTTP server.
    pub fn create_server(settings: &Settings) -> SignageResult<Server> {
        let state = AppState::from_settings(settings.clone())?;
        let key = session_key(&settings.auth.session_secret);
        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let workers = settings.web.workers;
        let settings_for_app = settings.clone();

        let mut server = HttpServer::new(move || {
            App::new()
                .app_data(Data::new(state.clone()))
                .app_data(json_config())
                .app_data(web::PayloadConfig::new(state.settings.upload.max_bytes))
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
                        // The panel is an internal tool, commonly reached over
                        // plain HTTP on a LAN.
                        .cookie_secure(false)
                        .build(),
                )
                .wrap(Logger::default())
                .wrap(NormalizePath::trim())
                .configure(|cfg| api::configure_routes(cfg, &settings_for_app))
        });

        if workers > 0 {
            server = server.workers(workers);
        }

        server = server
            .bind(&addr)
            .map_err(|e| format!("Failed to bind HTTP server to {addr}: {e}"))?;

        info!(%addr, "signage panel listening");
        Ok(server.run())
    }

    /// Bind and run the server until it is stopped.
    pub async fn run(settings: &Settings) -> SignageResult<()> {
        let server = Self::create_server(settings)?;
        server.await.map_err(Into::into)
    }
}
