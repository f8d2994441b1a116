//! Terminal signup wizard.
//!
//! Walks the signup steps on stdin/stdout and creates the account through
//! the account service.
//!
//! Required environment variables:
//! - ACCOUNT_SERVICE_URL
//!
//! Optional:
//! - ACCOUNT_SERVICE_API_KEY
//! - ACCOUNT_REQUEST_TIMEOUT_SECS (defaults to 10)
//! - DEFAULT_LANGUAGE (defaults to en)
//!
//! At any prompt, `:back` returns to the previous step and `:lang` switches
//! the display language.

use anyhow::{bail, Result};
use attendance_signup::account::HttpAccountService;
use attendance_signup::config::Config;
use attendance_signup::i18n::{format_message, Language};
use attendance_signup::navigation::{MenuItem, Navigator};
use attendance_signup::signup::{FunnelMetrics, SignupAction, SignupError, SignupFlow, Step};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info, warn};

type Input = Lines<BufReader<Stdin>>;

/// A prompt label and the action its answer turns into
type Field = (&'static str, fn(String) -> SignupAction);

fn field(label: &'static str, action: fn(String) -> SignupAction) -> Field {
    (label, action)
}

/// What the user typed at a prompt
enum Reply {
    Text(String),
    Back,
    ToggleLanguage,
}

struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn leave_signup(&self) {
        info!("Leaving signup, redirecting to {}", MenuItem::Dashboard.route());
    }
}

async fn prompt(input: &mut Input, label: &str) -> Result<Reply> {
    println!("{}:", label);
    let Some(line) = input.next_line().await? else {
        bail!("Input closed before signup finished");
    };

    Ok(match line.trim() {
        ":back" => Reply::Back,
        ":lang" => Reply::ToggleLanguage,
        _ => Reply::Text(line),
    })
}

/// Prompt for each field of the current step in turn.
///
/// Returns `None` when the user navigated instead of answering.
async fn collect(
    input: &mut Input,
    flow: &mut SignupFlow,
    language: &mut Language,
    fields: &[Field],
) -> Result<Option<()>> {
    for (label, action) in fields {
        match prompt(input, label).await? {
            Reply::Text(value) => {
                flow.dispatch(action(value));
            }
            Reply::Back => {
                flow.dispatch(SignupAction::Back);
                return Ok(None);
            }
            Reply::ToggleLanguage => {
                *language = language.toggle();
                info!("Language switched to {}", language.name());
                return Ok(None);
            }
        }
    }
    Ok(Some(()))
}

fn print_header(flow: &SignupFlow, language: Language) {
    let strings = language.strings();
    let title = match flow.step() {
        Step::Intro => strings.intro_title,
        Step::University => strings.university_title,
        Step::Email => strings.email_title,
        Step::Name => strings.name_title,
        Step::Password => strings.password_title,
        Step::Verification => strings.verification_title,
    };

    println!();
    println!(
        "[{}] {}",
        format_message(
            strings.signup_progress,
            &[
                ("current", &flow.step().position().to_string()),
                ("total", &Step::COUNT.to_string()),
            ],
        ),
        format_message(strings.language_toggle_label, &[("language", language.native_name())]),
    );
    println!("== {} ==", title);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so prompts stay readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("attendance_signup=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let mut language = Language::from_code(&config.default_language).unwrap_or_else(|e| {
        warn!("{}; falling back to the canonical language", e);
        Language::canonical()
    });

    let service = HttpAccountService::new(&config)?;
    let navigator = TerminalNavigator;
    let mut flow = SignupFlow::new();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    info!("Starting signup in {}", language.name());

    while !flow.is_completed() {
        print_header(&flow, language);
        let strings = language.strings();
        let step = flow.step();

        if step == Step::Intro {
            println!("{}", strings.intro_description);
            match prompt(&mut input, strings.signup_start_button).await? {
                Reply::ToggleLanguage => language = language.toggle(),
                Reply::Text(_) | Reply::Back => {
                    flow.dispatch(SignupAction::Proceed);
                }
            }
            continue;
        }

        let fields: Vec<Field> = match step {
            Step::Intro => Vec::new(),
            Step::University => vec![field(
                strings.university_placeholder,
                SignupAction::SetUniversity,
            )],
            Step::Email => {
                println!("{}", strings.email_description);
                vec![field(strings.email_placeholder, SignupAction::SetEmail)]
            }
            Step::Name => vec![
                field(strings.first_name_placeholder, SignupAction::SetFirstName),
                field(strings.last_name_placeholder, SignupAction::SetLastName),
            ],
            Step::Password => vec![
                field(strings.password_placeholder, SignupAction::SetPassword),
                field(
                    strings.confirm_password_placeholder,
                    SignupAction::SetConfirmPassword,
                ),
            ],
            Step::Verification => {
                println!(
                    "{}",
                    format_message(
                        strings.verification_description,
                        &[("email", &flow.draft().email)],
                    )
                );
                vec![field(
                    strings.verification_placeholder,
                    SignupAction::SetVerificationCode,
                )]
            }
        };

        if collect(&mut input, &mut flow, &mut language, &fields)
            .await?
            .is_none()
        {
            continue;
        }

        if step == Step::Verification {
            match flow.submit(&service, &navigator).await {
                Ok(()) => println!("{}", strings.signup_success),
                Err(SignupError::ValidationFailure(_)) => {
                    if let Some(hint) = flow.blocking_reason() {
                        println!("! {}", hint.message(strings));
                    }
                }
                Err(e) => {
                    println!(
                        "! {}",
                        format_message(strings.signup_failed, &[("error", &e.to_string())])
                    );
                }
            }
            continue;
        }

        if !flow.dispatch(SignupAction::Proceed) {
            if let Some(hint) = flow.blocking_reason() {
                println!("! {}", hint.message(strings));
            }
            continue;
        }

        if flow.step() == Step::Verification {
            if let Err(e) = flow.request_verification_code(&service).await {
                warn!("Verification code request failed: {}", e);
                println!(
                    "! {}",
                    format_message(
                        strings.verification_code_failed,
                        &[("email", &flow.draft().email)],
                    )
                );
            }
        }
    }

    debug!(
        "Signup funnel: {}",
        serde_json::to_string(&FunnelMetrics::global().report())?
    );
    Ok(())
}
