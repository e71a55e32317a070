//! Machine Translation Module
//!
//! Everything needed to hand a piece of text to a translation backend and get
//! a translation, or a classified failure, back.
//!
//! # Overview
//!
//! 1. **MT Trait** - [`MachineTranslator`], the single capability every backend offers
//! 2. **Providers** - LibreTranslate, the public Google endpoint and an in-process mock
//! 3. **Factory** - [`build_translator`] picks a provider from [`crate::config::BackendConfig`]
//! 4. **Errors** - [`MtError`] distinguishes unreachable, rejected, empty and malformed outcomes
//!
//! # Example
//!
//! ```ignore
//! use tarjama::config::BackendConfig;
//! use tarjama::language::LanguageCode;
//! use tarjama::mt::build_translator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let translator = build_translator(&BackendConfig::default())?;
//!     let translated = translator
//!         .translate("Hello", LanguageCode::En, LanguageCode::Fr)
//!         .await?;
//!     println!("{}", translated);
//!     Ok(())
//! }
//! ```
pub mod error;
pub mod factory;
pub mod google_translate;
pub mod libretranslate;
pub mod mock;
pub mod translator;

pub use error::{MtError, MtResult};
pub use factory::build_translator;
pub use google_translate::GoogleTranslateProvider;
pub use libretranslate::LibreTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use translator::MachineTranslator;
