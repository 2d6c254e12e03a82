//! Supported-languages endpoint.

use actix_web::{HttpResponse, web};

use lingo_core::domain::{CacheKey, Language, LanguagesQuery};
use lingo_shared::dto::{LanguageInfo, LanguagesParams, LanguagesResponse};

use super::proxy::{self, ProxyReply};
use crate::middleware::client_key::ClientKey;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/languages?target=<code>
pub async fn languages(
    state: web::Data<AppState>,
    client: ClientKey,
    params: web::Query<LanguagesParams>,
) -> AppResult<HttpResponse> {
    let query = LanguagesQuery::parse(params.into_inner().target);

    let mut reply = ProxyReply::check(&state, &client).await;
    let outcome = languages_cached(&state, &mut reply, &query).await;
    Ok(reply.finish(outcome))
}

async fn languages_cached(
    state: &AppState,
    reply: &mut ProxyReply,
    query: &LanguagesQuery,
) -> AppResult<HttpResponse> {
    reply.ensure_allowed()?;

    let key = CacheKey::languages(&query.target);
    if let Some(languages) = reply.lookup::<Vec<Language>>(state.cache.as_ref(), &key).await {
        return Ok(HttpResponse::Ok().json(respond(languages, true)));
    }

    let languages = state.provider.languages(query).await?;
    proxy::store(state.cache.as_ref(), &key, &languages).await;

    Ok(HttpResponse::Ok().json(respond(languages, false)))
}

fn respond(languages: Vec<Language>, cached: bool) -> LanguagesResponse {
    LanguagesResponse {
        languages: languages
            .into_iter()
            .map(|l| LanguageInfo {
                language: l.language,
                name: l.name,
            })
            .collect(),
        cached,
    }
}
