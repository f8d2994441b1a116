//! Completeness checks for the locale string tables.
//!
//! The compiler already guarantees every table has every key. This module
//! catches what the type system cannot: blank messages and translations
//! whose `{placeholders}` drifted from the canonical table.

use crate::i18n::{LanguageRegistry, LanguageStrings};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a string table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a message unusable
    pub errors: Vec<String>,

    /// Problems that make a message render incorrectly
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for locale string tables.
pub struct StringsValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl StringsValidator {
    /// Compare `candidate` against the canonical table.
    ///
    /// * empty messages are errors
    /// * placeholder sets that differ from the canonical message are warnings
    pub fn validate(canonical: &LanguageStrings, candidate: &LanguageStrings) -> ValidationReport {
        let mut report = ValidationReport::new();

        for ((key, reference), (_, text)) in canonical.entries().into_iter().zip(candidate.entries())
        {
            if text.trim().is_empty() {
                report.errors.push(format!("Message '{}' is empty", key));
                continue;
            }

            let expected = Self::extract_placeholders(reference);
            let actual = Self::extract_placeholders(text);
            if expected != actual {
                report.warnings.push(format!(
                    "Placeholder mismatch in '{}': expected {:?}, found {:?}",
                    key, expected, actual
                ));
            }
        }

        report
    }

    /// Validate every registered language against the canonical one.
    pub fn validate_registry() -> Vec<(&'static str, ValidationReport)> {
        let registry = LanguageRegistry::get();
        let canonical = registry.canonical().strings;

        registry
            .list_all()
            .into_iter()
            .map(|lang| (lang.code, Self::validate(canonical, lang.strings)))
            .collect()
    }

    /// Extract the set of `{name}` placeholders from a message
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder regex is valid"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
