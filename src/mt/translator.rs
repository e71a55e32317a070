//! Machine Translation trait and utilities
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! so the HTTP layer can dispatch to any backend (LibreTranslate, the public
//! Google endpoint, the in-process mock) without knowing which one is wired in.
//!
//! # Example
//!
//! ```ignore
//! use tarjama::language::LanguageCode;
//! use tarjama::mt::{LibreTranslateProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = LibreTranslateProvider::new("http://localhost:5000", None, 30)?;
//!     let result = provider
//!         .translate("Hello, world!", LanguageCode::En, LanguageCode::Fr)
//!         .await?;
//!     println!("{}", result); // "Bonjour, le monde !"
//!     Ok(())
//! }
//! ```

use crate::language::LanguageCode;
use crate::mt::error::{MtError, MtResult};
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// Implementations perform a single attempt per call and report failures
/// through the [`MtError`] variants, never retrying on their own.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate `text` from `source` to `target`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text, never empty
    /// * `Err(MtError::Unreachable)` - Network failure or timeout
    /// * `Err(MtError::NonSuccessStatus)` - Backend answered with an error status
    /// * `Err(MtError::EmptyResult)` - Backend answered without a translation
    /// * `Err(MtError::MalformedResponse)` - Backend body could not be parsed
    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> MtResult<String>;

    /// Get the name of this translation provider
    ///
    /// Used for logging and the health route to identify the active backend.
    fn provider_name(&self) -> &str;
}

/// Turn an optional translation into a non-empty one
///
/// Backends that answer successfully with a missing or empty translation are
/// reported as [`MtError::EmptyResult`].
pub fn require_translation(translated: Option<String>) -> MtResult<String> {
    match translated {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(MtError::EmptyResult),
    }
}

/// Pull a human readable error message out of a backend error body
///
/// Understands `{"error": "..."}` and `{"error": {"message": "..."}}`. Bodies
/// that are not JSON (HTML error pages, plain text) yield `None` so that
/// backend internals are never echoed to callers.
pub fn backend_error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = json.get("error")?;
    let message = error
        .as_str()
        .or_else(|| error.get("message").and_then(|m| m.as_str()))?
        .trim();

    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}
