//! Language registry: single source of truth for the languages the UI can
//! be displayed in.
//!
//! The registry is initialized once behind a `OnceLock` and is immutable
//! afterwards. Registry order is also the order the language toggle cycles
//! through.

use crate::i18n::strings::{ENGLISH_STRINGS, TURKISH_STRINGS};
use crate::i18n::LanguageStrings;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "tr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Turkish")
    pub name: &'static str,

    /// Native name of the language, shown on the toggle (e.g., "Türkçe")
    pub native_name: &'static str,

    /// Whether this is the canonical language other tables are checked against
    pub is_canonical: bool,

    /// Whether this language can be selected
    pub enabled: bool,

    /// Resolved UI strings for this language
    pub strings: &'static LanguageStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a registered language, enabled or not.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Languages the toggle can switch to, in toggle order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.enabled().collect()
    }

    /// Every registered language; string tables are validated for all of them.
    pub fn list_all(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// The language other string tables are validated against.
    ///
    /// # Panics
    /// Panics unless exactly one language is marked canonical, which is a
    /// mistake in `default_languages`.
    pub fn canonical(&self) -> &LanguageConfig {
        let mut marked = self.languages.iter().filter(|lang| lang.is_canonical);
        match (marked.next(), marked.next()) {
            (Some(lang), None) => lang,
            (None, _) => panic!("No canonical language found in registry"),
            (Some(_), Some(_)) => panic!("Multiple canonical languages found in registry"),
        }
    }

    fn enabled(&self) -> impl Iterator<Item = &LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled)
    }
}

/// English (canonical) and Turkish.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
            strings: &ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "tr",
            name: "Turkish",
            native_name: "Türkçe",
            is_canonical: false,
            enabled: true,
            strings: &TURKISH_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English is registered");

        assert_eq!(config.name, "English");
        assert!(config.is_canonical);
        assert!(config.enabled);
        assert_eq!(config.strings.intro_title, ENGLISH_STRINGS.intro_title);
    }

    #[test]
    fn test_get_by_code_turkish() {
        let config = LanguageRegistry::get()
            .get_by_code("tr")
            .expect("Turkish is registered");

        assert_eq!(config.name, "Turkish");
        assert_eq!(config.native_name, "Türkçe");
        assert!(!config.is_canonical);
        assert_eq!(config.strings.intro_title, TURKISH_STRINGS.intro_title);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_enabled_preserves_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_enabled()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["en", "tr"]);
    }

    #[test]
    fn test_list_all_matches_enabled() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.list_all().len(), registry.list_enabled().len());
    }

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(LanguageRegistry::get().canonical().code, "en");
    }

    #[test]
    fn test_exactly_one_canonical_language() {
        let canonical: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .filter(|lang| lang.is_canonical)
            .map(|lang| lang.code)
            .collect();
        assert_eq!(canonical, vec!["en"]);
    }
}
