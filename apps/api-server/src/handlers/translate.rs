//! Translation endpoint.

use actix_web::{HttpResponse, web};

use lingo_core::domain::{CacheKey, TranslateQuery};
use lingo_shared::dto::{TranslateRequest, TranslateResponse};

use super::proxy::{self, ProxyReply};
use crate::middleware::client_key::ClientKey;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/translate
pub async fn translate(
    state: web::Data<AppState>,
    client: ClientKey,
    body: web::Json<TranslateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let query = TranslateQuery::parse(req.text, req.target, req.source)?;

    let mut reply = ProxyReply::check(&state, &client).await;
    let outcome = translate_cached(&state, &mut reply, &query).await;
    Ok(reply.finish(outcome))
}

async fn translate_cached(
    state: &AppState,
    reply: &mut ProxyReply,
    query: &TranslateQuery,
) -> AppResult<HttpResponse> {
    reply.ensure_allowed()?;

    let key = CacheKey::translate(&query.source, &query.target, &query.text);
    if let Some(translated) = reply.lookup::<String>(state.cache.as_ref(), &key).await {
        return Ok(HttpResponse::Ok().json(TranslateResponse {
            translated,
            cached: true,
        }));
    }

    let translated = state.provider.translate(query).await?;
    proxy::store(state.cache.as_ref(), &key, &translated).await;

    Ok(HttpResponse::Ok().json(TranslateResponse {
        translated,
        cached: false,
    }))
}
