//! Translation backend configuration
//!
//! [`BackendConfig`] is shared by the CLI and the web server: both flatten it
//! into their clap parsers, so every setting can come from a flag or from the
//! environment variable named next to it.

use clap::{Args, ValueEnum};

use crate::mt::google_translate::DEFAULT_GOOGLE_URL;

pub const DEFAULT_LIBRETRANSLATE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which translation backend to dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// In-process phrasebook translator, no network access
    Mock,
    /// Self-hosted LibreTranslate instance
    #[value(name = "libretranslate")]
    LibreTranslate,
    /// Google's public translate endpoint
    Google,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct BackendConfig {
    /// Translation backend to use
    #[arg(long = "backend", env = "TARJAMA_BACKEND", value_enum, default_value = "google")]
    pub kind: BackendKind,

    /// Base URL of the LibreTranslate instance
    #[arg(long, env = "LIBRETRANSLATE_URL", default_value = DEFAULT_LIBRETRANSLATE_URL)]
    pub libretranslate_url: String,

    /// API key for the LibreTranslate instance, if it requires one
    #[arg(long, env = "LIBRETRANSLATE_API_KEY")]
    pub libretranslate_api_key: Option<String>,

    /// Base URL of the Google public translate endpoint
    #[arg(long, env = "GOOGLE_TRANSLATE_URL", default_value = DEFAULT_GOOGLE_URL)]
    pub google_url: String,

    /// Timeout in seconds for a single backend request
    #[arg(long, env = "TARJAMA_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::Google,
            libretranslate_url: DEFAULT_LIBRETRANSLATE_URL.to_string(),
            libretranslate_api_key: None,
            google_url: DEFAULT_GOOGLE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
