//! Display language for verdicts, risk levels and profile names
//!
//! Vietnamese is the default since the recommendation labels it produces are
//! part of what downstream report views show verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display languages
///
/// # Examples
///
/// ```
/// use hawkeye_core::Language;
///
/// let lang = Language::from_code("vi");
/// assert_eq!(lang, Language::Vietnamese);
/// assert_eq!(lang.code(), "vi");
///
/// let other = Language::from_code("ja");
/// assert_eq!(other, Language::Other("ja".to_string()));
/// assert!(!other.is_known());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// Vietnamese
    #[default]
    Vietnamese,
    /// English
    English,
    /// Other languages (ISO 639-1 code); rendered with Vietnamese labels
    Other(String),
}

impl Language {
    /// Get ISO 639-1 language code
    pub fn code(&self) -> &str {
        match self {
            Language::Vietnamese => "vi",
            Language::English => "en",
            Language::Other(code) => code,
        }
    }

    /// Get language name for display
    pub fn name(&self) -> &str {
        match self {
            Language::Vietnamese => "Vietnamese",
            Language::English => "English",
            Language::Other(code) => code,
        }
    }

    /// Parse from ISO 639-1 code or common name
    pub fn from_code(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "vi" | "vn" | "vi-vn" | "vietnamese" | "tiếng việt" => Language::Vietnamese,
            "en" | "en-us" | "en-gb" | "english" => Language::English,
            other => Language::Other(other.to_string()),
        }
    }

    /// Check if this is a known language (not Other)
    pub fn is_known(&self) -> bool {
        !matches!(self, Language::Other(_))
    }

    /// Pick between an English and a Vietnamese rendering of the same label.
    pub fn pick<'a>(&self, english: &'a str, vietnamese: &'a str) -> &'a str {
        match self {
            Language::English => english,
            Language::Vietnamese | Language::Other(_) => vietnamese,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Language::from_code(s)
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Language::from_code(&s)
    }
}
