//! Romanization endpoint. Local computation only: no quota, no cache.

use actix_web::{HttpResponse, web};

use lingo_core::DomainError;
use lingo_shared::dto::{TransliterateRequest, TransliterateResponse};
use lingo_shared::transliterate::transliterate as romanize;

use crate::middleware::error::AppResult;

/// POST /api/transliterate
pub async fn transliterate(body: web::Json<TransliterateRequest>) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let (text, lang) = match (req.text, req.lang) {
        (Some(text), Some(lang)) if !text.is_empty() && !lang.is_empty() => (text, lang),
        _ => return Err(DomainError::MissingFields("text,lang").into()),
    };

    Ok(HttpResponse::Ok().json(TransliterateResponse {
        transliterated: romanize(&text, &lang),
    }))
}
