//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    /// Seconds since the server started.
    pub uptime: f64,
    pub version: &'static str,
    pub cache_items: usize,
    pub rate_map_entries: usize,
    pub rate_limit: RateLimitInfo,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitInfo {
    pub window_ms: u64,
    pub max: u32,
}

/// Health check endpoint - returns server status and store sizes.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        uptime: state.started_at.elapsed().as_secs_f64(),
        version: env!("CARGO_PKG_VERSION"),
        cache_items: state.cache.len().await,
        rate_map_entries: state.rate_limiter.tracked_keys().await,
        rate_limit: RateLimitInfo {
            window_ms: u64::try_from(state.rate_limit.window.as_millis()).unwrap_or(u64::MAX),
            max: state.rate_limit.max_requests,
        },
    };

    HttpResponse::Ok().json(response)
}
