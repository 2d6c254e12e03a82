//! Language detection endpoint.

use actix_web::{HttpResponse, web};

use lingo_core::domain::{CacheKey, DetectQuery, Detection};
use lingo_shared::dto::{DetectRequest, DetectResponse};

use super::proxy::{self, ProxyReply};
use crate::middleware::client_key::ClientKey;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/detect
pub async fn detect(
    state: web::Data<AppState>,
    client: ClientKey,
    body: web::Json<DetectRequest>,
) -> AppResult<HttpResponse> {
    let query = DetectQuery::parse(body.into_inner().text)?;

    let mut reply = ProxyReply::check(&state, &client).await;
    let outcome = detect_cached(&state, &mut reply, &query).await;
    Ok(reply.finish(outcome))
}

async fn detect_cached(
    state: &AppState,
    reply: &mut ProxyReply,
    query: &DetectQuery,
) -> AppResult<HttpResponse> {
    reply.ensure_allowed()?;

    let key = CacheKey::detect(&query.text);
    if let Some(detection) = reply.lookup::<Detection>(state.cache.as_ref(), &key).await {
        return Ok(HttpResponse::Ok().json(respond(detection, true)));
    }

    let detection = state.provider.detect(query).await?;
    proxy::store(state.cache.as_ref(), &key, &detection).await;

    Ok(HttpResponse::Ok().json(respond(detection, false)))
}

fn respond(detection: Detection, cached: bool) -> DetectResponse {
    DetectResponse {
        language: detection.language,
        confidence: detection.confidence,
        cached,
    }
}
