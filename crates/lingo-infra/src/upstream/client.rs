//! HTTP client for the RapidAPI-hosted translation provider.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde_json::{Value, json};

use lingo_core::domain::{
    DetectQuery, Detection, Language, LanguagesQuery, Operation, TranslateQuery,
};
use lingo_core::ports::{TranslationProvider, UpstreamError};

use super::shapes::{self, DETECTION_SHAPES, LANGUAGE_LIST_SHAPES, TRANSLATION_SHAPES, Shape};

/// Upstream provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// RapidAPI key. Without it every call fails with `MissingCredential`.
    pub api_key: Option<String>,
    /// Provider host. A bare host name is reached over HTTPS; a value that
    /// already carries a scheme is used as the base URL as-is.
    pub host: String,
    pub translate_path: String,
    pub detect_path: String,
    pub languages_path: String,
    /// Upper bound for one call, request and body read included.
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            host: "google-translator9.p.rapidapi.com".to_string(),
            translate_path: "/v2".to_string(),
            detect_path: "/v2/detect".to_string(),
            languages_path: "/v2/languages".to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl ProviderConfig {
    fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            self.host.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", self.host)
        }
    }

    /// Host name as sent in `X-RapidAPI-Host`.
    fn host_header(&self) -> &str {
        self.host
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.host)
            .trim_end_matches('/')
    }

    fn path(&self, operation: Operation) -> &str {
        match operation {
            Operation::Translate => &self.translate_path,
            Operation::Detect => &self.detect_path,
            Operation::Languages => &self.languages_path,
        }
    }
}

/// Translation provider backed by reqwest.
///
/// One attempt per call, no retries. A call that outlives the configured
/// timeout is dropped, which aborts only that request.
pub struct HttpTranslationProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl HttpTranslationProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("lingo-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn request(
        &self,
        operation: Operation,
        method: Method,
    ) -> Result<RequestBuilder, UpstreamError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredential)?;

        let url = format!("{}{}", self.config.base_url(), self.config.path(operation));
        Ok(self
            .client
            .request(method, url)
            .header("Content-Type", "application/json")
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", self.config.host_header()))
    }

    /// Send the request and read its JSON body under one deadline.
    async fn call(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<Value, UpstreamError> {
        let timeout = self.config.timeout;
        tracing::debug!(operation = %operation, "Calling upstream provider");

        let payload = with_deadline(timeout, async {
            let response = request.send().await.map_err(|e| transport_error(e, timeout))?;

            let status = response.status();
            if !status.is_success() {
                return Err(UpstreamError::Status(status.as_u16()));
            }

            // An unreadable body is treated as an empty object and left to
            // shape probing to reject.
            Ok(response
                .json::<Value>()
                .await
                .unwrap_or_else(|_| Value::Object(Default::default())))
        })
        .await;

        if let Err(e) = &payload {
            tracing::warn!(operation = %operation, error = %e, "Upstream call failed");
        }
        payload
    }

    async fn call_and_probe<T>(
        &self,
        operation: Operation,
        request: RequestBuilder,
        shapes: &[Shape<T>],
    ) -> Result<T, UpstreamError> {
        let payload = self.call(operation, request).await?;
        shapes::probe(&payload, shapes).ok_or_else(|| {
            tracing::warn!(operation = %operation, "Upstream payload matched no known shape");
            UpstreamError::UnexpectedShape
        })
    }
}

async fn with_deadline<F>(timeout: Duration, call: F) -> Result<Value, UpstreamError>
where
    F: Future<Output = Result<Value, UpstreamError>>,
{
    tokio::time::timeout(timeout, call)
        .await
        .unwrap_or(Err(UpstreamError::Timeout(timeout)))
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout(timeout)
    } else {
        UpstreamError::Transport(err.to_string())
    }
}

#[async_trait]
impl TranslationProvider for HttpTranslationProvider {
    async fn translate(&self, query: &TranslateQuery) -> Result<String, UpstreamError> {
        let request = self.request(Operation::Translate, Method::POST)?.json(&json!({
            "q": query.text,
            "target": query.target,
            "source": query.source,
            "format": "text",
        }));
        self.call_and_probe(Operation::Translate, request, TRANSLATION_SHAPES)
            .await
    }

    async fn detect(&self, query: &DetectQuery) -> Result<Detection, UpstreamError> {
        let request = self
            .request(Operation::Detect, Method::POST)?
            .json(&json!({ "q": query.text }));
        self.call_and_probe(Operation::Detect, request, DETECTION_SHAPES)
            .await
    }

    async fn languages(&self, query: &LanguagesQuery) -> Result<Vec<Language>, UpstreamError> {
        let request = self
            .request(Operation::Languages, Method::GET)?
            .query(&[("target", query.target.as_str())]);
        self.call_and_probe(Operation::Languages, request, LANGUAGE_LIST_SHAPES)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Read one HTTP request (headers plus `Content-Length` body).
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serve a single canned response and hand back the raw request.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });
        (format!("http://{addr}"), handle)
    }

    fn provider(host: String, timeout: Duration) -> HttpTranslationProvider {
        HttpTranslationProvider::new(ProviderConfig {
            api_key: Some("test-key".to_string()),
            host,
            timeout,
            ..ProviderConfig::default()
        })
        .unwrap()
    }

    fn hello_to_spanish() -> TranslateQuery {
        TranslateQuery::parse(Some("hello".into()), Some("es".into()), None).unwrap()
    }

    #[test]
    fn test_base_url_and_host_header() {
        let config = ProviderConfig::default();
        assert_eq!(config.base_url(), "https://google-translator9.p.rapidapi.com");
        assert_eq!(config.host_header(), "google-translator9.p.rapidapi.com");

        let config = ProviderConfig {
            host: "http://127.0.0.1:9000/".to_string(),
            ..ProviderConfig::default()
        };
        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.host_header(), "127.0.0.1:9000");
    }

    #[tokio::test]
    async fn test_missing_credential_fails_without_network() {
        // Nothing listens on port 9; a network attempt would be a transport error.
        let provider = HttpTranslationProvider::new(ProviderConfig {
            host: "http://127.0.0.1:9".to_string(),
            ..ProviderConfig::default()
        })
        .unwrap();

        assert!(!provider.has_credential());
        assert_eq!(
            provider.translate(&hello_to_spanish()).await,
            Err(UpstreamError::MissingCredential)
        );
    }

    #[tokio::test]
    async fn test_translate_sends_documented_request() {
        let (host, server) = serve_once(
            "200 OK",
            r#"{"data":{"translations":[{"translatedText":"hola"}]}}"#,
        )
        .await;
        let provider = provider(host, Duration::from_secs(5));

        let translated = provider.translate(&hello_to_spanish()).await.unwrap();
        assert_eq!(translated, "hola");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v2 HTTP/1.1"));
        let lower = request.to_lowercase();
        assert!(lower.contains("x-rapidapi-key: test-key"));
        assert!(lower.contains("x-rapidapi-host: 127.0.0.1:"));
        assert!(request.contains(r#""q":"hello""#));
        assert!(request.contains(r#""source":"en""#));
        assert!(request.contains(r#""format":"text""#));
    }

    #[tokio::test]
    async fn test_languages_uses_get_with_target_query() {
        let (host, server) = serve_once(
            "200 OK",
            r#"{"data":{"languages":[{"language":"de","name":"Deutsch"}]}}"#,
        )
        .await;
        let provider = provider(host, Duration::from_secs(5));

        let languages = provider
            .languages(&LanguagesQuery::parse(Some("de".into())))
            .await
            .unwrap();
        assert_eq!(languages, vec![Language::named("de", "Deutsch")]);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /v2/languages?target=de HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let (host, _server) = serve_once("429 Too Many Requests", "{}").await;
        let provider = provider(host, Duration::from_secs(5));

        let err = provider.translate(&hello_to_spanish()).await.unwrap_err();
        assert_eq!(err, UpstreamError::Status(429));
        assert_eq!(err.status_code(), Some(429));
    }

    #[tokio::test]
    async fn test_unknown_payload_is_unexpected_shape() {
        let (host, _server) = serve_once("200 OK", r#"{"weird":true}"#).await;
        let provider = provider(host, Duration::from_secs(5));

        let err = provider
            .detect(&DetectQuery::parse(Some("hola".into())).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err, UpstreamError::UnexpectedShape);
    }

    #[tokio::test]
    async fn test_unreadable_body_is_unexpected_shape() {
        let (host, _server) = serve_once("200 OK", "not json").await;
        let provider = provider(host, Duration::from_secs(5));

        let err = provider.translate(&hello_to_spanish()).await.unwrap_err();
        assert_eq!(err, UpstreamError::UnexpectedShape);
    }

    #[tokio::test]
    async fn test_silent_upstream_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let timeout = Duration::from_millis(200);
        let provider = provider(format!("http://{addr}"), timeout);

        let err = provider.translate(&hello_to_spanish()).await.unwrap_err();
        assert_eq!(err, UpstreamError::Timeout(timeout));
    }
}
