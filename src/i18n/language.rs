//! Language type: a code that has been checked against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};
use anyhow::{bail, Result};

/// A validated, enabled language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "tr")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const TURKISH: Language = Language { code: "tr" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err` if the code is unknown or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The canonical language all other string tables are validated against.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry entry for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for values built through `from_code`, `canonical` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Resolved UI strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }

    /// The language the toggle button switches to: the next enabled
    /// language in registry order, wrapping around to the first.
    pub fn toggle(&self) -> Language {
        let enabled = LanguageRegistry::get().list_enabled();
        let next = enabled
            .iter()
            .position(|lang| lang.code == self.code)
            .map(|idx| enabled[(idx + 1) % enabled.len()])
            .or_else(|| enabled.first().copied());

        match next {
            Some(config) => Language { code: config.code },
            None => *self,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_turkish_constant() {
        let turkish = Language::TURKISH;
        assert_eq!(turkish.code(), "tr");
        assert_eq!(turkish.native_name(), "Türkçe");
        assert!(!turkish.is_canonical());
    }

    #[test]
    fn test_from_code_valid() {
        assert_eq!(Language::from_code("tr").unwrap(), Language::TURKISH);
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("de");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    #[test]
    fn test_strings_follow_language() {
        assert_eq!(
            Language::TURKISH.strings().signup_next_button,
            crate::i18n::strings::TURKISH_STRINGS.signup_next_button
        );
        assert_ne!(
            Language::ENGLISH.strings().signup_next_button,
            Language::TURKISH.strings().signup_next_button
        );
    }

    #[test]
    fn test_toggle_cycles_through_enabled_languages() {
        assert_eq!(Language::ENGLISH.toggle(), Language::TURKISH);
        assert_eq!(Language::TURKISH.toggle(), Language::ENGLISH);
    }

    #[test]
    fn test_toggle_twice_returns_original() {
        let lang = Language::TURKISH;
        assert_eq!(lang.toggle().toggle(), lang);
    }
}
