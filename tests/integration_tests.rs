//! Integration tests for the signup wizard
//!
//! These tests drive the public API end to end: the flow controller talks to
//! the HTTP account service backed by a mock server, and the localized
//! strings are resolved the way a screen would resolve them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use attendance_signup::{
    account::{AccountError, HttpAccountService},
    config::Config,
    i18n::{format_message, Language, StringsValidator},
    navigation::{active_item, LogoutDialog, MenuItem, Navigator},
    retry::RetryConfig,
    signup::{FunnelMetrics, SignupAction, SignupError, SignupFlow, Step, StepHint},
};

// ==================== Test Helpers ====================

fn create_test_config(url: &str) -> Config {
    Config {
        account_service_url: url.to_string(),
        account_service_api_key: Some("integration-key".to_string()),
        account_request_timeout: Duration::from_secs(5),
        default_language: "tr".to_string(),
    }
}

fn create_service(server: &MockServer) -> HttpAccountService {
    HttpAccountService::new(&create_test_config(&server.uri()))
        .expect("client builds")
        .with_retry_config(RetryConfig::new(2, Duration::from_millis(5)))
}

fn new_flow() -> SignupFlow {
    SignupFlow::with_metrics(Box::leak(Box::new(FunnelMetrics::new())))
}

#[derive(Default)]
struct CountingNavigator {
    left: AtomicUsize,
}

impl Navigator for CountingNavigator {
    fn leave_signup(&self) {
        self.left.fetch_add(1, Ordering::SeqCst);
    }
}

/// Fill and leave every step up to verification, as a user would.
fn walk_to_verification(flow: &mut SignupFlow) {
    assert!(flow.dispatch(SignupAction::Proceed));

    flow.dispatch(SignupAction::SetUniversity("Boğaziçi University".to_string()));
    assert!(flow.dispatch(SignupAction::Proceed));

    flow.dispatch(SignupAction::SetEmail("Deniz@Boun.EDU.TR".to_string()));
    assert!(flow.dispatch(SignupAction::Proceed));

    flow.dispatch(SignupAction::SetFirstName("Deniz".to_string()));
    flow.dispatch(SignupAction::SetLastName("Yılmaz".to_string()));
    assert!(flow.dispatch(SignupAction::Proceed));

    flow.dispatch(SignupAction::SetPassword("kampus2024!".to_string()));
    flow.dispatch(SignupAction::SetConfirmPassword("kampus2024!".to_string()));
    assert!(flow.dispatch(SignupAction::Proceed));

    assert_eq!(flow.step(), Step::Verification);
}

// ==================== End-to-End Signup ====================

#[tokio::test]
async fn test_full_signup_creates_account_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/verification-codes"))
        .and(body_partial_json(
            serde_json::json!({"email": "Deniz@Boun.EDU.TR"}),
        ))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .and(body_partial_json(serde_json::json!({
            "email": "Deniz@Boun.EDU.TR",
            "university": "Boğaziçi University",
            "first_name": "Deniz",
            "last_name": "Yılmaz",
            "password": "kampus2024!",
            "verification_code": "482913"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let service = create_service(&server);
    let navigator = CountingNavigator::default();
    let mut flow = new_flow();

    walk_to_verification(&mut flow);
    flow.request_verification_code(&service)
        .await
        .expect("code requested");

    flow.dispatch(SignupAction::SetVerificationCode("482 913".to_string()));
    flow.submit(&service, &navigator).await.expect("signup");

    assert!(flow.is_completed());
    assert_eq!(navigator.left.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rejected_signup_can_be_corrected_and_resubmitted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .and(body_partial_json(
            serde_json::json!({"verification_code": "000000"}),
        ))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(serde_json::json!({"error": "invalid code"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .and(body_partial_json(
            serde_json::json!({"verification_code": "482913"}),
        ))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let service = create_service(&server);
    let navigator = CountingNavigator::default();
    let mut flow = new_flow();
    walk_to_verification(&mut flow);

    flow.dispatch(SignupAction::SetVerificationCode("000000".to_string()));
    let err = flow.submit(&service, &navigator).await.unwrap_err();
    match err {
        SignupError::AccountCreation(AccountError::Rejected { message, .. }) => {
            assert_eq!(message, "invalid code");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(navigator.left.load(Ordering::SeqCst), 0);

    flow.dispatch(SignupAction::SetVerificationCode("482913".to_string()));
    flow.submit(&service, &navigator).await.expect("second attempt");
    assert_eq!(navigator.left.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_going_back_keeps_entered_values() {
    let mut flow = new_flow();
    walk_to_verification(&mut flow);

    for _ in 0..Step::COUNT {
        flow.dispatch(SignupAction::Back);
    }

    assert_eq!(flow.step(), Step::Intro);
    assert_eq!(flow.draft().first_name, "Deniz");

    // Earlier answers still satisfy their steps on the way forward again
    for _ in 0..5 {
        assert!(flow.dispatch(SignupAction::Proceed));
    }
    assert_eq!(flow.step(), Step::Verification);
}

// ==================== Localization ====================

#[test]
fn test_every_locale_is_complete() {
    for (code, report) in StringsValidator::validate_registry() {
        assert!(report.is_clean(), "locale {} has issues: {:?}", code, report);
    }
}

#[test]
fn test_blocked_step_hint_in_turkish() {
    let mut flow = new_flow();
    flow.dispatch(SignupAction::Proceed);
    flow.dispatch(SignupAction::SetUniversity("ODTÜ".to_string()));
    flow.dispatch(SignupAction::Proceed);
    flow.dispatch(SignupAction::SetEmail("deniz@gmail.com".to_string()));

    assert!(!flow.dispatch(SignupAction::Proceed));
    let hint = flow.blocking_reason().expect("email step is blocked");
    assert_eq!(hint, StepHint::EmailNotEducational);

    let language = Language::from_code(&create_test_config("http://unused").default_language)
        .expect("configured language is registered");
    assert_eq!(
        hint.message(language.strings()),
        "Lütfen bir eğitim kurumu e-posta adresi kullanın."
    );
}

#[test]
fn test_progress_label_per_language() {
    let step = Step::Password;
    let args = [
        ("current", step.position().to_string()),
        ("total", Step::COUNT.to_string()),
    ];
    let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();

    assert_eq!(
        format_message(Language::ENGLISH.strings().signup_progress, &args),
        "Step 5 of 6"
    );
    assert_eq!(
        format_message(Language::TURKISH.strings().signup_progress, &args),
        "Adım 5 / 6"
    );
}

#[test]
fn test_language_toggle_relabels_sidebar() {
    let language = Language::canonical();
    let item = active_item("/attendance/today").expect("attendance is active");
    assert_eq!(item, MenuItem::Attendance);

    assert_eq!(item.label(language.strings()), "Attendance");
    assert_eq!(item.label(language.toggle().strings()), "Yoklama");
}

#[test]
fn test_logout_flow_with_localized_dialog() {
    let strings = Language::TURKISH.strings();
    let mut dialog = LogoutDialog::default();

    dialog.open();
    assert!(dialog.is_open());
    assert_eq!(strings.logout_cancel, "İptal");

    dialog.cancel();
    assert!(!dialog.confirm());

    dialog.open();
    assert!(dialog.confirm());
}
