use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::{BackendConfig, BackendKind};
use crate::mt::error::{MtError, MtResult};
use crate::mt::google_translate::GoogleTranslateProvider;
use crate::mt::libretranslate::LibreTranslateProvider;
use crate::mt::mock::MockTranslator;
use crate::mt::translator::MachineTranslator;

/// Create the translation backend selected by `config`
///
/// Called once at startup; the returned handle is shared by every request.
///
/// # Returns
///
/// * `Err(MtError::Config)` - If the selected backend's settings are unusable
pub fn build_translator(config: &BackendConfig) -> MtResult<Arc<dyn MachineTranslator>> {
    if config.timeout_secs == 0 {
        return Err(MtError::Config(
            "Backend timeout must be at least one second".to_string(),
        ));
    }
    let timeout = Duration::from_secs(config.timeout_secs);

    let translator: Arc<dyn MachineTranslator> = match config.kind {
        BackendKind::Mock => Arc::new(MockTranslator::phrasebook()),
        BackendKind::LibreTranslate => Arc::new(LibreTranslateProvider::new(
            &config.libretranslate_url,
            config.libretranslate_api_key.clone(),
            timeout,
        )?),
        BackendKind::Google => Arc::new(GoogleTranslateProvider::new(&config.google_url, timeout)?),
    };

    info!(
        "Initialized translation backend: {} (timeout {}s)",
        translator.provider_name(),
        config.timeout_secs
    );
    Ok(translator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(kind: BackendKind) -> BackendConfig {
        BackendConfig {
            kind,
            ..BackendConfig::default()
        }
    }

    #[test]
    fn test_builds_each_backend() {
        let cases = [
            (BackendKind::Mock, "Mock Translator"),
            (BackendKind::LibreTranslate, "LibreTranslate"),
            (BackendKind::Google, "Google Translate"),
        ];
        for (kind, name) in cases {
            let translator = build_translator(&config(kind)).unwrap();
            assert_eq!(translator.provider_name(), name);
        }
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = BackendConfig {
            timeout_secs: 0,
            ..config(BackendKind::Mock)
        };
        assert!(matches!(build_translator(&config), Err(MtError::Config(_))));
    }

    #[test]
    fn test_bad_url_only_matters_for_selected_backend() {
        let mut config = config(BackendKind::Google);
        config.libretranslate_url = String::new();
        assert!(build_translator(&config).is_ok());

        config.kind = BackendKind::LibreTranslate;
        assert!(matches!(build_translator(&config), Err(MtError::Config(_))));
    }
}
