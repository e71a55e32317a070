//! Supported language codes
//!
//! The service translates between a fixed, closed set of languages. Codes
//! arrive as free-form strings on the wire and are validated into
//! [`LanguageCode`] before anything else happens with them.
//!
//! # Example
//!
//! ```
//! use tarjama::language::LanguageCode;
//!
//! let code: LanguageCode = "fr".parse().unwrap();
//! assert_eq!(code, LanguageCode::Fr);
//! assert_eq!(code.display_name(), "French");
//! assert!("de".parse::<LanguageCode>().is_err());
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A language the service can translate from or to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Fr,
    Ar,
}

impl LanguageCode {
    /// Every supported language, in catalogue order
    pub const ALL: [LanguageCode; 3] = [LanguageCode::En, LanguageCode::Fr, LanguageCode::Ar];

    /// The ISO 639-1 code used on the wire and by translation backends
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Fr => "fr",
            LanguageCode::Ar => "ar",
        }
    }

    /// English name of the language, as shown to end users
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Fr => "French",
            LanguageCode::Ar => "Arabic",
        }
    }

    /// Comma separated list of the accepted codes, e.g. `"en, fr, ar"`
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(|code| code.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the supported codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code '{0}', must be one of: {allowed}", allowed = LanguageCode::allowed_list())]
pub struct UnknownLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    /// Parse a code exactly as given. Matching is case-sensitive, so `"EN"` is
    /// rejected just like any other unknown value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(LanguageCode::En),
            "fr" => Ok(LanguageCode::Fr),
            "ar" => Ok(LanguageCode::Ar),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_codes() {
        assert_eq!("en".parse::<LanguageCode>(), Ok(LanguageCode::En));
        assert_eq!("fr".parse::<LanguageCode>(), Ok(LanguageCode::Fr));
        assert_eq!("ar".parse::<LanguageCode>(), Ok(LanguageCode::Ar));
    }

    #[test]
    fn test_parse_rejects_unknown_and_uppercase() {
        assert!("de".parse::<LanguageCode>().is_err());
        assert!("EN".parse::<LanguageCode>().is_err());
        assert!("".parse::<LanguageCode>().is_err());
        assert!("en-US".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn test_unknown_language_message_names_allowed_set() {
        let err = "xx".parse::<LanguageCode>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported language code 'xx', must be one of: en, fr, ar"
        );
    }

    #[test]
    fn test_allowed_list() {
        assert_eq!(LanguageCode::allowed_list(), "en, fr, ar");
    }

    #[test]
    fn test_display_and_serde_use_wire_code() {
        assert_eq!(LanguageCode::Ar.to_string(), "ar");
        assert_eq!(serde_json::to_string(&LanguageCode::Fr).unwrap(), "\"fr\"");
    }

    #[test]
    fn test_display_names() {
        let names: Vec<_> = LanguageCode::ALL.iter().map(|c| c.display_name()).collect();
        assert_eq!(names, vec!["English", "French", "Arabic"]);
    }
}
