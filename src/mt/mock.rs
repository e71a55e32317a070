//! Mock Machine Translator
//!
//! A deterministic, in-process translator that needs no API keys or network
//! access. It backs the `mock` backend for local development and lets tests
//! simulate every backend outcome.
//!
//! # Example
//!
//! ```ignore
//! use tarjama::language::LanguageCode;
//! use tarjama::mt::{MachineTranslator, MockMode, MockTranslator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", LanguageCode::En, LanguageCode::Fr).await.unwrap();
//!     assert_eq!(result, "hello_fr");
//! }
//! ```

use crate::language::LanguageCode;
use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{MachineTranslator, require_translation};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target suffix: "hello" → "hello_fr"
    Suffix,

    /// Use predefined mappings for realistic translations
    /// (text, target) → translation, falling back to `Suffix`
    Mappings(HashMap<(String, LanguageCode), String>),

    /// Always answer with this exact text, including an empty one
    Fixed(String),

    /// Fail every call with this error
    Fail(MtError),

    /// No-op: return input unchanged
    NoOp,
}

/// Mock translator that simulates various translation scenarios
///
/// Clones share the same call counter, so a test can hand one clone to the
/// code under test and inspect [`MockTranslator::call_count`] on another.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            delay_ms: 0,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a MockTranslator with simulated network delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::new(mode)
        }
    }

    /// A small built-in phrasebook covering common greetings in every
    /// supported language, with `Suffix` behaviour for anything else
    pub fn phrasebook() -> Self {
        let entries = [
            ("Hello", LanguageCode::Fr, "Bonjour"),
            ("Hello", LanguageCode::Ar, "مرحبا"),
            ("Bonjour", LanguageCode::En, "Hello"),
            ("Bonjour", LanguageCode::Ar, "مرحبا"),
            ("مرحبا", LanguageCode::En, "Hello"),
            ("مرحبا", LanguageCode::Fr, "Bonjour"),
            ("Thank you", LanguageCode::Fr, "Merci"),
            ("Thank you", LanguageCode::Ar, "شكرا"),
            ("Merci", LanguageCode::En, "Thank you"),
            ("Merci", LanguageCode::Ar, "شكرا"),
            ("شكرا", LanguageCode::En, "Thank you"),
            ("شكرا", LanguageCode::Fr, "Merci"),
        ];
        let map = entries
            .into_iter()
            .map(|(text, target, translation)| {
                ((text.to_string(), target), translation.to_string())
            })
            .collect();
        Self::new(MockMode::Mappings(map))
    }

    /// Number of times `translate` has been called on this mock or its clones
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Internal helper to apply the simulated delay
    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    /// Apply translation logic based on the mode
    fn apply_translation(&self, text: &str, target: LanguageCode) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => Ok(map
                .get(&(text.to_string(), target))
                .cloned()
                .unwrap_or_else(|| format!("{}_{}", text, target))),
            MockMode::Fixed(answer) => require_translation(Some(answer.clone())),
            MockMode::Fail(err) => Err(err.clone()),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: LanguageCode,
        target: LanguageCode,
    ) -> MtResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;
        self.apply_translation(text, target)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
