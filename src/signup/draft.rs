use std::fmt;

/// Length of the emailed verification code
pub const VERIFICATION_CODE_LEN: usize = 6;

/// Form data collected across the wizard steps.
///
/// Treated as a value: the reducer replaces the whole draft on each update.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub email: String,
    pub university: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
    pub verification_code: String,
}

// Secrets stay out of logs.
impl fmt::Debug for SignupDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupDraft")
            .field("email", &self.email)
            .field("university", &self.university)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &redacted(&self.password))
            .field("confirm_password", &redacted(&self.confirm_password))
            .field("verification_code", &redacted(&self.verification_code))
            .finish()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

/// Normalize raw code input: keep ASCII digits only, at most six of them.
pub fn sanitize_verification_code(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(VERIFICATION_CODE_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_strips_separators_and_caps_length() {
        assert_eq!(sanitize_verification_code("12-34-56-78"), "123456");
    }

    #[test]
    fn test_sanitize_short_input() {
        assert_eq!(sanitize_verification_code("4 2"), "42");
    }

    #[test]
    fn test_sanitize_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not part of the code alphabet
        assert_eq!(sanitize_verification_code("١٢٣"), "");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_verification_code(""), "");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let draft = SignupDraft {
            email: "ada@uni.edu".to_string(),
            password: "hunter2hunter2".to_string(),
            confirm_password: "hunter2hunter2".to_string(),
            verification_code: "123456".to_string(),
            ..Default::default()
        };

        let debug = format!("{:?}", draft);
        assert!(debug.contains("ada@uni.edu"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("123456"));
    }

    #[test]
    fn test_default_draft_is_empty() {
        let draft = SignupDraft::default();
        assert!(draft.email.is_empty());
        assert!(draft.verification_code.is_empty());
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(input in ".*") {
            let once = sanitize_verification_code(&input);
            prop_assert_eq!(sanitize_verification_code(&once), once.clone());
        }

        #[test]
        fn sanitize_output_is_short_and_numeric(input in ".*") {
            let code = sanitize_verification_code(&input);
            prop_assert!(code.chars().count() <= VERIFICATION_CODE_LEN);
            prop_assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
