//! Internationalization (i18n) module.
//!
//! UI text is looked up through a typed table per locale rather than by
//! nested string paths. Screens never branch on the language; they only read
//! resolved strings.
//!
//! # Architecture
//!
//! - `registry`: supported languages and their metadata
//! - `language`: validated `Language` type, including the toggle order
//! - `strings`: one `LanguageStrings` table per locale
//! - `validator`: completeness checks across locales
//!
//! # Example
//!
//! ```rust
//! use attendance_signup::i18n::{format_message, Language};
//!
//! let turkish = Language::from_code("tr").unwrap();
//! let label = format_message(
//!     turkish.strings().signup_progress,
//!     &[("current", "1"), ("total", "6")],
//! );
//! assert_eq!(label, "Adım 1 / 6");
//! ```

mod language;
mod registry;
pub(crate) mod strings;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{format_message, LanguageStrings};
pub use validator::{StringsValidator, ValidationReport};
