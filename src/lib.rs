//! Translation backends and text metrics for the tarjama service
//!
//! # Workflow Example
//!
//! ```ignore
//! use tarjama::config::{BackendConfig, BackendKind};
//! use tarjama::language::LanguageCode;
//! use tarjama::metrics::TextMetrics;
//! use tarjama::mt::build_translator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Validate the language pair
//!     let source: LanguageCode = "en".parse()?;
//!     let target: LanguageCode = "ar".parse()?;
//!
//!     // 2. Pick a backend
//!     let config = BackendConfig { kind: BackendKind::Mock, ..BackendConfig::default() };
//!     let translator = build_translator(&config)?;
//!
//!     // 3. Translate and count
//!     let translated = translator.translate("Hello", source, target).await?;
//!     let metrics = TextMetrics::of("Hello");
//!     println!("{} ({} words)", translated, metrics.word_count);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod language;
pub mod metrics;
pub mod mt;

// Re-export main types for convenient access
pub use config::{BackendConfig, BackendKind};
pub use language::{LanguageCode, UnknownLanguage};
pub use metrics::{TextMetrics, char_count, word_count};
pub use mt::{MachineTranslator, MtError, MtResult, build_translator};
