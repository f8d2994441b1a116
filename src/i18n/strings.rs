/// All localized user-facing strings for a language
///
/// Every message key is a field, so a table missing a key does not compile.
/// Placeholders use `{name}` syntax and are filled in with `format_message`.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Signup Wizard ====================
    /// Progress label above the wizard
    /// Placeholders: {current}, {total}
    pub signup_progress: &'static str,

    pub intro_title: &'static str,
    pub intro_description: &'static str,

    pub university_title: &'static str,
    pub university_placeholder: &'static str,

    pub email_title: &'static str,
    pub email_description: &'static str,
    pub email_placeholder: &'static str,

    pub name_title: &'static str,
    pub first_name_placeholder: &'static str,
    pub last_name_placeholder: &'static str,

    pub password_title: &'static str,
    pub password_placeholder: &'static str,
    pub confirm_password_placeholder: &'static str,

    pub verification_title: &'static str,
    /// Placeholders: {email}
    pub verification_description: &'static str,
    pub verification_placeholder: &'static str,

    // ==================== Wizard Buttons ====================
    pub signup_start_button: &'static str,
    pub signup_next_button: &'static str,
    pub signup_back_button: &'static str,
    pub signup_submit_button: &'static str,

    // ==================== Step Hints ====================
    pub hint_university_required: &'static str,
    pub hint_email_not_educational: &'static str,
    pub hint_name_required: &'static str,
    /// Placeholders: {min}
    pub hint_password_too_short: &'static str,
    pub hint_password_mismatch: &'static str,
    pub hint_confirmation_required: &'static str,
    pub hint_code_incomplete: &'static str,

    // ==================== Submission ====================
    pub signup_success: &'static str,
    /// Placeholders: {error}
    pub signup_failed: &'static str,
    /// Placeholders: {email}
    pub verification_code_failed: &'static str,

    // ==================== Sidebar ====================
    pub menu_dashboard: &'static str,
    pub menu_courses: &'static str,
    pub menu_attendance: &'static str,
    pub menu_reports: &'static str,
    pub menu_settings: &'static str,
    pub menu_logout: &'static str,

    // ==================== Logout Dialog ====================
    pub logout_title: &'static str,
    pub logout_message: &'static str,
    pub logout_confirm: &'static str,
    pub logout_cancel: &'static str,

    // ==================== Language Toggle ====================
    /// Placeholders: {language}
    pub language_toggle_label: &'static str,
}

impl LanguageStrings {
    /// Every message as a `(key, text)` pair, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("signup_progress", self.signup_progress),
            ("intro_title", self.intro_title),
            ("intro_description", self.intro_description),
            ("university_title", self.university_title),
            ("university_placeholder", self.university_placeholder),
            ("email_title", self.email_title),
            ("email_description", self.email_description),
            ("email_placeholder", self.email_placeholder),
            ("name_title", self.name_title),
            ("first_name_placeholder", self.first_name_placeholder),
            ("last_name_placeholder", self.last_name_placeholder),
            ("password_title", self.password_title),
            ("password_placeholder", self.password_placeholder),
            ("confirm_password_placeholder", self.confirm_password_placeholder),
            ("verification_title", self.verification_title),
            ("verification_description", self.verification_description),
            ("verification_placeholder", self.verification_placeholder),
            ("signup_start_button", self.signup_start_button),
            ("signup_next_button", self.signup_next_button),
            ("signup_back_button", self.signup_back_button),
            ("signup_submit_button", self.signup_submit_button),
            ("hint_university_required", self.hint_university_required),
            ("hint_email_not_educational", self.hint_email_not_educational),
            ("hint_name_required", self.hint_name_required),
            ("hint_password_too_short", self.hint_password_too_short),
            ("hint_password_mismatch", self.hint_password_mismatch),
            ("hint_confirmation_required", self.hint_confirmation_required),
            ("hint_code_incomplete", self.hint_code_incomplete),
            ("signup_success", self.signup_success),
            ("signup_failed", self.signup_failed),
            ("verification_code_failed", self.verification_code_failed),
            ("menu_dashboard", self.menu_dashboard),
            ("menu_courses", self.menu_courses),
            ("menu_attendance", self.menu_attendance),
            ("menu_reports", self.menu_reports),
            ("menu_settings", self.menu_settings),
            ("menu_logout", self.menu_logout),
            ("logout_title", self.logout_title),
            ("logout_message", self.logout_message),
            ("logout_confirm", self.logout_confirm),
            ("logout_cancel", self.logout_cancel),
            ("language_toggle_label", self.language_toggle_label),
        ]
    }
}

/// Substitute `{key}` placeholders in a template.
///
/// Unknown placeholders are left untouched so a missing argument is visible
/// in the rendered text rather than silently dropped.
pub fn format_message(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{}}}", key), value)
    })
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    // Wizard
    signup_progress: "Step {current} of {total}",
    intro_title: "Welcome to Attendance",
    intro_description: "Track class attendance in seconds. Create your account with your university email to get started.",
    university_title: "Which university are you at?",
    university_placeholder: "University name",
    email_title: "What's your university email?",
    email_description: "We only accept educational email addresses such as .edu or .edu.tr.",
    email_placeholder: "name@university.edu",
    name_title: "What's your name?",
    first_name_placeholder: "First name",
    last_name_placeholder: "Last name",
    password_title: "Create a password",
    password_placeholder: "Password",
    confirm_password_placeholder: "Confirm password",
    verification_title: "Verify your email",
    verification_description: "Enter the 6-digit code we sent to {email}.",
    verification_placeholder: "000000",

    // Buttons
    signup_start_button: "Get started",
    signup_next_button: "Continue",
    signup_back_button: "Back",
    signup_submit_button: "Create account",

    // Hints
    hint_university_required: "Please enter your university.",
    hint_email_not_educational: "Please use an educational email address.",
    hint_name_required: "Please enter your first and last name.",
    hint_password_too_short: "Password must be at least {min} characters.",
    hint_password_mismatch: "Passwords do not match.",
    hint_confirmation_required: "Please confirm your password.",
    hint_code_incomplete: "The code must be 6 digits.",

    // Submission
    signup_success: "Your account has been created.",
    signup_failed: "We couldn't create your account: {error}. Please try again.",
    verification_code_failed: "We couldn't send a code to {email}. Please try again.",

    // Sidebar
    menu_dashboard: "Dashboard",
    menu_courses: "Courses",
    menu_attendance: "Attendance",
    menu_reports: "Reports",
    menu_settings: "Settings",
    menu_logout: "Log out",

    // Logout dialog
    logout_title: "Log out",
    logout_message: "Are you sure you want to log out?",
    logout_confirm: "Log out",
    logout_cancel: "Cancel",

    // Language toggle
    language_toggle_label: "Language: {language}",
};

// ==================== Turkish Strings ====================

/// Turkish language strings
pub const TURKISH_STRINGS: LanguageStrings = LanguageStrings {
    // Wizard
    signup_progress: "Adım {current} / {total}",
    intro_title: "Yoklama'ya Hoş Geldiniz",
    intro_description: "Ders yoklamasını saniyeler içinde alın. Başlamak için üniversite e-postanızla hesap oluşturun.",
    university_title: "Hangi üniversitedesiniz?",
    university_placeholder: "Üniversite adı",
    email_title: "Üniversite e-posta adresiniz nedir?",
    email_description: "Yalnızca .edu veya .edu.tr gibi eğitim kurumu e-posta adreslerini kabul ediyoruz.",
    email_placeholder: "ad@universite.edu.tr",
    name_title: "Adınız nedir?",
    first_name_placeholder: "Ad",
    last_name_placeholder: "Soyad",
    password_title: "Bir şifre oluşturun",
    password_placeholder: "Şifre",
    confirm_password_placeholder: "Şifreyi onaylayın",
    verification_title: "E-postanızı doğrulayın",
    verification_description: "{email} adresine gönderdiğimiz 6 haneli kodu girin.",
    verification_placeholder: "000000",

    // Buttons
    signup_start_button: "Başlayın",
    signup_next_button: "Devam",
    signup_back_button: "Geri",
    signup_submit_button: "Hesap oluştur",

    // Hints
    hint_university_required: "Lütfen üniversitenizi girin.",
    hint_email_not_educational: "Lütfen bir eğitim kurumu e-posta adresi kullanın.",
    hint_name_required: "Lütfen adınızı ve soyadınızı girin.",
    hint_password_too_short: "Şifre en az {min} karakter olmalıdır.",
    hint_password_mismatch: "Şifreler eşleşmiyor.",
    hint_confirmation_required: "Lütfen şifrenizi tekrar girin.",
    hint_code_incomplete: "Kod 6 haneli olmalıdır.",

    // Submission
    signup_success: "Hesabınız oluşturuldu.",
    signup_failed: "Hesabınız oluşturulamadı: {error}. Lütfen tekrar deneyin.",
    verification_code_failed: "{email} adresine kod gönderilemedi. Lütfen tekrar deneyin.",

    // Sidebar
    menu_dashboard: "Panel",
    menu_courses: "Dersler",
    menu_attendance: "Yoklama",
    menu_reports: "Raporlar",
    menu_settings: "Ayarlar",
    menu_logout: "Çıkış yap",

    // Logout dialog
    logout_title: "Çıkış yap",
    logout_message: "Çıkış yapmak istediğinizden emin misiniz?",
    logout_confirm: "Çıkış yap",
    logout_cancel: "İptal",

    // Language toggle
    language_toggle_label: "Dil: {language}",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_same_keys() {
        let english: Vec<_> = ENGLISH_STRINGS.entries().iter().map(|(k, _)| *k).collect();
        let turkish: Vec<_> = TURKISH_STRINGS.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(english, turkish);
    }

    #[test]
    fn test_entry_keys_are_unique() {
        let mut keys: Vec<_> = ENGLISH_STRINGS.entries().iter().map(|(k, _)| *k).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_english_progress_placeholders() {
        assert!(ENGLISH_STRINGS.signup_progress.contains("{current}"));
        assert!(ENGLISH_STRINGS.signup_progress.contains("{total}"));
    }

    #[test]
    fn test_turkish_verification_mentions_email() {
        assert!(TURKISH_STRINGS.verification_description.contains("{email}"));
    }

    #[test]
    fn test_format_message_replaces_placeholders() {
        let text = format_message(
            ENGLISH_STRINGS.signup_progress,
            &[("current", "2"), ("total", "6")],
        );
        assert_eq!(text, "Step 2 of 6");
    }

    #[test]
    fn test_format_message_leaves_unknown_placeholders() {
        let text = format_message("Hello {name}", &[("other", "x")]);
        assert_eq!(text, "Hello {name}");
    }

    #[test]
    fn test_format_message_repeated_placeholder() {
        let text = format_message("{a} and {a}", &[("a", "x")]);
        assert_eq!(text, "x and x");
    }
}
