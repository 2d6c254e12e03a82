//! HTTP handlers and route configuration.

mod detect;
mod health;
mod languages;
mod proxy;
mod translate;
mod transliterate;


use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::web;

use crate::middleware::error::payload_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let json_config =
        web::JsonConfig::default().error_handler(payload_error_handler::<JsonPayloadError>);
    let query_config =
        web::QueryConfig::default().error_handler(payload_error_handler::<QueryPayloadError>);

    cfg.app_data(json_config).app_data(query_config).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Proxied upstream operations
            .route("/translate", web::post().to(translate::translate))
            .route("/detect", web::post().to(detect::detect))
            .route("/languages", web::get().to(languages::languages))
            // Local helpers
            .route("/transliterate", web::post().to(transliterate::transliterate)),
    );
}
