//! Per-step readiness predicates and the hints shown when a step is blocked.
//!
//! Each predicate only looks at the fields its own step collects, so editing
//! a later step never invalidates an earlier one.

use super::draft::{SignupDraft, VERIFICATION_CODE_LEN};
use super::step::Step;
use crate::i18n::{format_message, LanguageStrings};
use crate::security::secrets_match;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// Domain suffixes accepted as educational. Matched against the end of the
/// lower-cased domain, so any subdomain of an accepted suffix passes.
pub const EDUCATIONAL_SUFFIXES: [&str; 20] = [
    ".edu", ".edu.tr", ".ac.uk", ".edu.au", ".ac.jp", ".edu.cn", ".ac.in", ".edu.in", ".ac.kr",
    ".edu.sg", ".ac.nz", ".edu.br", ".edu.mx", ".ac.za", ".edu.pl", ".ac.at", ".edu.hk",
    ".edu.my", ".ac.il", ".edu.pk",
];

/// Whether the user may leave `step` with the given draft.
pub fn can_proceed(step: Step, draft: &SignupDraft) -> bool {
    match step {
        Step::Intro => true,
        Step::University => !draft.university.is_empty(),
        Step::Email => is_educational_email(&draft.email),
        Step::Name => !draft.first_name.is_empty() && !draft.last_name.is_empty(),
        Step::Password => {
            password_long_enough(&draft.password)
                && secrets_match(&draft.password, &draft.confirm_password)
        }
        Step::Verification => draft.verification_code.chars().count() == VERIFICATION_CODE_LEN,
    }
}

/// True iff the address has an `@` and the part after the last `@` ends
/// with an educational suffix (case-insensitive).
pub fn is_educational_email(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };

    let domain = domain.to_lowercase();
    EDUCATIONAL_SUFFIXES
        .iter()
        .any(|suffix| domain.ends_with(suffix))
}

fn password_long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// True when the confirmation has been typed and differs from the password.
/// An untouched confirmation field never counts as a mismatch.
pub fn password_mismatch(draft: &SignupDraft) -> bool {
    !draft.confirm_password.is_empty()
        && !secrets_match(&draft.password, &draft.confirm_password)
}

/// Why a step is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepHint {
    UniversityRequired,
    EmailNotEducational,
    NameRequired,
    PasswordTooShort,
    PasswordMismatch,
    ConfirmationRequired,
    CodeIncomplete,
}

impl StepHint {
    /// Localized hint text.
    pub fn message(self, strings: &LanguageStrings) -> String {
        match self {
            StepHint::UniversityRequired => strings.hint_university_required.to_string(),
            StepHint::EmailNotEducational => strings.hint_email_not_educational.to_string(),
            StepHint::NameRequired => strings.hint_name_required.to_string(),
            StepHint::PasswordTooShort => format_message(
                strings.hint_password_too_short,
                &[("min", &MIN_PASSWORD_LEN.to_string())],
            ),
            StepHint::PasswordMismatch => strings.hint_password_mismatch.to_string(),
            StepHint::ConfirmationRequired => strings.hint_confirmation_required.to_string(),
            StepHint::CodeIncomplete => strings.hint_code_incomplete.to_string(),
        }
    }
}

/// The reason proceeding from `step` is blocked, or `None` if it is not.
///
/// Used when the user presses proceed anyway, so empty fields are reported.
pub fn blocking_reason(step: Step, draft: &SignupDraft) -> Option<StepHint> {
    if can_proceed(step, draft) {
        return None;
    }

    match step {
        Step::Intro => None,
        Step::University => Some(StepHint::UniversityRequired),
        Step::Email => Some(StepHint::EmailNotEducational),
        Step::Name => Some(StepHint::NameRequired),
        Step::Password if !password_long_enough(&draft.password) => {
            Some(StepHint::PasswordTooShort)
        }
        Step::Password if draft.confirm_password.is_empty() => {
            Some(StepHint::ConfirmationRequired)
        }
        Step::Password => Some(StepHint::PasswordMismatch),
        Step::Verification => Some(StepHint::CodeIncomplete),
    }
}

/// Live indicator shown while the user types.
///
/// Unlike `blocking_reason`, a field the user has not started typing into
/// produces no hint.
pub fn inline_hint(step: Step, draft: &SignupDraft) -> Option<StepHint> {
    match step {
        Step::Email if !draft.email.is_empty() && !is_educational_email(&draft.email) => {
            Some(StepHint::EmailNotEducational)
        }
        Step::Name if draft.first_name.is_empty() != draft.last_name.is_empty() => {
            Some(StepHint::NameRequired)
        }
        Step::Password if !draft.password.is_empty() && !password_long_enough(&draft.password) => {
            Some(StepHint::PasswordTooShort)
        }
        Step::Password if password_mismatch(draft) => Some(StepHint::PasswordMismatch),
        _ => None,
    }
}
