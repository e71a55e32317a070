//! LibreTranslate provider for self-hosted machine translation
//!
//! Sends `POST {base_url}/translate` with a JSON body
//! `{"q", "source", "target", "format": "text"}` and expects
//! `{"translatedText": "..."}` back. Instances that require a key get it as
//! `api_key` in the same body.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use tarjama::language::LanguageCode;
//! use tarjama::mt::{LibreTranslateProvider, MachineTranslator};
//!
//! let provider = LibreTranslateProvider::new("http://localhost:5000", None, Duration::from_secs(30))?;
//! let result = provider.translate("Hello", LanguageCode::En, LanguageCode::Ar).await?;
//! ```

use crate::language::LanguageCode;
use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{MachineTranslator, backend_error_message, require_translation};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

#[derive(Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Client for a LibreTranslate instance
#[derive(Clone)]
pub struct LibreTranslateProvider {
    /// Full URL of the `/translate` endpoint
    endpoint: String,
    /// Optional API key for instances that require one
    api_key: Option<String>,
    /// HTTP client for async requests
    client: reqwest::Client,
}

impl LibreTranslateProvider {
    /// Create a provider talking to the instance at `base_url`
    ///
    /// # Returns
    ///
    /// * `Err(MtError::Config)` - If the URL is empty or invalid, or the HTTP
    ///   client cannot be built
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> MtResult<Self> {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(MtError::Config(
                "LibreTranslate URL cannot be empty".to_string(),
            ));
        }
        reqwest::Url::parse(base_url).map_err(|e| {
            MtError::Config(format!("Invalid LibreTranslate URL '{}': {}", base_url, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MtError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: format!("{}/translate", base_url.trim_end_matches('/')),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client,
        })
    }
}

impl std::fmt::Debug for LibreTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibreTranslateProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for LibreTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> MtResult<String> {
        let mut body = json!({
            "q": text,
            "source": source.as_str(),
            "target": target.as_str(),
            "format": "text"
        });
        if let Some(api_key) = &self.api_key {
            body["api_key"] = serde_json::Value::String(api_key.clone());
        }

        debug!("POST {} ({} -> {})", self.endpoint, source, target);
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(MtError::NonSuccessStatus {
                status: status.as_u16(),
                message: backend_error_message(&error_text),
            });
        }

        let raw = response.text().await?;
        let parsed: LibreTranslateResponse = serde_json::from_str(&raw).map_err(|e| {
            MtError::MalformedResponse(format!("Failed to parse LibreTranslate response: {}", e))
        })?;

        require_translation(parsed.translated_text)
    }

    fn provider_name(&self) -> &str {
        "LibreTranslate"
    }
}
