//! Google Translate public endpoint provider
//!
//! Calls the keyless `translate_a/single` endpoint used by Google's own web
//! clients. The request is a plain `GET` with everything in the query string:
//!
//! ```text
//! GET {base_url}/translate_a/single?client=gtx&sl=en&tl=fr&dt=t&q=Hello
//! ```
//!
//! The response is an untyped nested array. Its first element holds one entry
//! per translated sentence, and the first entry of each of those is the
//! translated text:
//!
//! ```text
//! [[["Bonjour","Hello",null,null,10]],null,"en",...]
//! ```

use crate::language::LanguageCode;
use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{MachineTranslator, backend_error_message, require_translation};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Default host of the public endpoint
pub const DEFAULT_GOOGLE_URL: &str = "https://translate.googleapis.com";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Google Translate public endpoint provider
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    /// Full URL of the `translate_a/single` endpoint
    endpoint: String,
    /// HTTP client for async requests
    client: reqwest::Client,
}

impl GoogleTranslateProvider {
    /// Create a provider for the endpoint hosted at `base_url`
    ///
    /// Pass [`DEFAULT_GOOGLE_URL`] for the real service; tests point this at a
    /// local stub.
    ///
    /// # Returns
    ///
    /// * `Err(MtError::Config)` - If the URL is empty or invalid, or the HTTP
    ///   client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> MtResult<Self> {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(MtError::Config(
                "Google Translate URL cannot be empty".to_string(),
            ));
        }
        reqwest::Url::parse(base_url).map_err(|e| {
            MtError::Config(format!("Invalid Google Translate URL '{}': {}", base_url, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MtError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: format!("{}/translate_a/single", base_url.trim_end_matches('/')),
            client,
        })
    }

    /// Build the request URL with the text and language pair percent-encoded
    fn request_url(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> MtResult<reqwest::Url> {
        reqwest::Url::parse_with_params(
            &self.endpoint,
            &[
                ("client", "gtx"),
                ("sl", source.as_str()),
                ("tl", target.as_str()),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| MtError::Config(format!("Failed to build request URL: {}", e)))
    }

    /// Extract the translation from the nested-array response body
    ///
    /// Sentence segments are concatenated in order. A body whose first element
    /// is `null` (nothing was translated) is an empty result; any other shape
    /// that is not the expected nesting is malformed.
    fn parse_response(raw: &str) -> MtResult<String> {
        let json: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
            MtError::MalformedResponse(format!("Failed to parse Google Translate response: {}", e))
        })?;

        let top = json.as_array().ok_or_else(|| {
            MtError::MalformedResponse("Invalid response: expected a top-level array".to_string())
        })?;

        let segments = match top.first() {
            None | Some(serde_json::Value::Null) => return Err(MtError::EmptyResult),
            Some(first) => first.as_array().ok_or_else(|| {
                MtError::MalformedResponse(
                    "Invalid response: first element is not an array of segments".to_string(),
                )
            })?,
        };

        let mut translated = String::new();
        for segment in segments {
            let part = segment.as_array().ok_or_else(|| {
                MtError::MalformedResponse("Invalid response: segment is not an array".to_string())
            })?;
            if let Some(text) = part.first().and_then(|t| t.as_str()) {
                translated.push_str(text);
            }
        }

        require_translation(Some(translated))
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> MtResult<String> {
        let url = self.request_url(text, source, target)?;

        debug!("GET {} ({} -> {})", self.endpoint, source, target);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(MtError::NonSuccessStatus {
                status: status.as_u16(),
                message: backend_error_message(&error_text),
            });
        }

        let raw = response.text().await?;
        Self::parse_response(&raw)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mt::test_support::{spawn_stub, unused_local_url};
    use axum::{Router, extract::Query, http::StatusCode, routing::get};
    use std::collections::HashMap;

    fn provider(base_url: &str) -> GoogleTranslateProvider {
        GoogleTranslateProvider::new(base_url, Duration::from_secs(5)).unwrap()
    }

    // ========== Initialization Tests ==========

    #[test]
    fn test_new_with_default_url() {
        let provider = provider(DEFAULT_GOOGLE_URL);
        assert_eq!(
            provider.endpoint,
            "https://translate.googleapis.com/translate_a/single"
        );
        assert_eq!(provider.provider_name(), "Google Translate");
    }

    #[test]
    fn test_new_with_empty_url() {
        match GoogleTranslateProvider::new("", Duration::from_secs(30)) {
            Err(MtError::Config(msg)) => assert!(msg.contains("empty")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_request_url_encodes_text() {
        let url = provider(DEFAULT_GOOGLE_URL)
            .request_url("Hello & goodbye", LanguageCode::En, LanguageCode::Ar)
            .unwrap();
        let pairs: HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["client"], "gtx");
        assert_eq!(pairs["sl"], "en");
        assert_eq!(pairs["tl"], "ar");
        assert_eq!(pairs["dt"], "t");
        assert_eq!(pairs["q"], "Hello & goodbye");
    }

    // ========== Parsing Tests ==========

    #[test]
    fn test_parse_single_segment() {
        let raw = r#"[[["Bonjour","Hello",null,null,10]],null,"en"]"#;
        assert_eq!(
            GoogleTranslateProvider::parse_response(raw),
            Ok("Bonjour".to_string())
        );
    }

    #[test]
    fn test_parse_joins_segments() {
        let raw = r#"[[["Bonjour. ","Hello. ",null,null,10],["Au revoir.","Goodbye.",null,null,10]],null,"en"]"#;
        assert_eq!(
            GoogleTranslateProvider::parse_response(raw),
            Ok("Bonjour. Au revoir.".to_string())
        );
    }

    #[test]
    fn test_parse_null_first_element_is_empty() {
        assert_eq!(
            GoogleTranslateProvider::parse_response(r#"[null,null,"en"]"#),
            Err(MtError::EmptyResult)
        );
        assert_eq!(
            GoogleTranslateProvider::parse_response("[]"),
            Err(MtError::EmptyResult)
        );
    }

    #[test]
    fn test_parse_empty_string_is_empty() {
        assert_eq!(
            GoogleTranslateProvider::parse_response(r#"[[["","Hello"]]]"#),
            Err(MtError::EmptyResult)
        );
    }

    #[test]
    fn test_parse_wrong_shapes_are_malformed() {
        for raw in [
            "not json",
            r#"{"sentences": []}"#,
            r#"["Bonjour"]"#,
            r#"[["Bonjour"]]"#,
        ] {
            assert!(
                matches!(
                    GoogleTranslateProvider::parse_response(raw),
                    Err(MtError::MalformedResponse(_))
                ),
                "expected malformed for {}",
                raw
            );
        }
    }

    // ========== Stub Server Tests ==========

    #[tokio::test]
    async fn test_translate_against_stub() {
        let app = Router::new().route(
            "/translate_a/single",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params["sl"], "en");
                assert_eq!(params["tl"], "fr");
                assert_eq!(params["q"], "Hello");
                r#"[[["Bonjour","Hello",null,null,10]],null,"en"]"#
            }),
        );
        let base = spawn_stub(app).await;

        let result = provider(&base)
            .translate("Hello", LanguageCode::En, LanguageCode::Fr)
            .await;
        assert_eq!(result, Ok("Bonjour".to_string()));
    }

    #[tokio::test]
    async fn test_rate_limited_status() {
        let app = Router::new().route(
            "/translate_a/single",
            get(|| async { (StatusCode::TOO_MANY_REQUESTS, "<html>Too Many Requests</html>") }),
        );
        let base = spawn_stub(app).await;

        let result = provider(&base)
            .translate("Hello", LanguageCode::En, LanguageCode::Fr)
            .await;
        assert_eq!(
            result,
            Err(MtError::NonSuccessStatus {
                status: 429,
                message: None,
            })
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_unreachable() {
        let base = unused_local_url().await;

        let result = provider(&base)
            .translate("Hello", LanguageCode::En, LanguageCode::Fr)
            .await;
        assert!(matches!(result, Err(MtError::Unreachable(_))));
    }

    // ========== Integration Tests (require network access) ==========

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_endpoint_translation() {
        let provider = provider(DEFAULT_GOOGLE_URL);
        let result = provider
            .translate("Hello", LanguageCode::En, LanguageCode::Fr)
            .await
            .unwrap();
        println!("Translation: {} → {}", "Hello", result);
        assert!(!result.is_empty());
    }
}
