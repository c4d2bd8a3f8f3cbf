//! Router module for all panel routes.

pub mod admin;
pub mod public;

use actix_web::web;
use signage_models::Settings;

/// Configure all routes. Public routes are registered first so they take
/// precedence over the catch-all authenticated scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig, settings: &Settings) {
    public::configure_routes(cfg, settings);
    admin::configure_routes(cfg);
}
