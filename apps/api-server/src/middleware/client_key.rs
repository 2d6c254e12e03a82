//! Client identification for rate limiting.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::fmt;
use std::future::{Ready, ready};

use crate::state::AppState;

/// Key used when the client address cannot be determined.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// The rate-limit identity of the caller: its IP address.
///
/// By default this is the socket peer. Behind a reverse proxy, enable
/// `TRUST_PROXY` so `Forwarded` / `X-Forwarded-For` are honoured instead;
/// without a proxy those headers are client-controlled and must be ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKey(String);

impl ClientKey {
    pub fn resolve(req: &HttpRequest, trust_proxy: bool) -> Self {
        let key = if trust_proxy {
            req.connection_info()
                .realip_remote_addr()
                .map(str::to_string)
        } else {
            req.peer_addr().map(|addr| addr.ip().to_string())
        };

        Self(key.unwrap_or_else(|| UNKNOWN_CLIENT.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromRequest for ClientKey {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let trust_proxy = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.trust_proxy)
            .unwrap_or(false);

        ready(Ok(ClientKey::resolve(req, trust_proxy)))
    }
}
