// regenchoice-core/src/domain/question/language.rs

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::domain::error::DomainError;

#[allow(clippy::expect_used)]
static LANGUAGE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,10}$").expect("static language code regex"));

/// Languages offered by default when adding a translation.
pub const COMMON_LANGUAGES: [(&str, &str); 11] = [
    ("en", "English"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("es", "Español"),
    ("it", "Italiano"),
    ("nl", "Nederlands"),
    ("pt", "Português"),
    ("ru", "Русский"),
    ("zh", "中文"),
    ("ja", "日本語"),
    ("ar", "العربية"),
];

/// A language code: 2 to 10 lowercase ASCII letters (e.g. `en`, `sv`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Trims and lower-cases the input before checking it.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let code = raw.trim().to_lowercase();
        if LANGUAGE_CODE.is_match(&code) {
            Ok(Self(code))
        } else {
            Err(DomainError::InvalidLanguageCode(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn display_name(&self) -> Option<&'static str> {
        COMMON_LANGUAGES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }
}

pub fn is_valid_language_code(raw: &str) -> bool {
    LANGUAGE_CODE.is_match(raw)
}

impl TryFrom<String> for LanguageCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        // Stored codes must already be canonical
        if LANGUAGE_CODE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidLanguageCode(value))
        }
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
