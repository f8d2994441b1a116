//! Account service: creates accounts and sends verification codes.
//!
//! The signup flow only depends on the `AccountService` trait. The HTTP
//! client here is the production implementation.

use crate::config::Config;
use crate::retry::{with_retry_if, RetryConfig};
use crate::signup::SignupDraft;
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Errors returned by the account service.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// The service refused the request (4xx other than 429)
    #[error("account service rejected the request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    /// The service is overloaded or failing (429, 5xx)
    #[error("account service unavailable ({status}): {message}")]
    Unavailable { status: StatusCode, message: String },

    /// The request never got a response
    #[error("could not reach account service: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AccountError {
    /// Whether repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, AccountError::Rejected { .. })
    }

    fn from_status(status: StatusCode, body: String) -> Self {
        let message = extract_error_message(&body);
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            AccountError::Unavailable { status, message }
        } else {
            AccountError::Rejected { status, message }
        }
    }
}

/// External collaborator that owns accounts and verification codes.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create the account described by a completed draft.
    async fn create_account(&self, draft: &SignupDraft) -> Result<(), AccountError>;

    /// Email a fresh verification code to `email`.
    async fn send_verification_code(&self, email: &str) -> Result<(), AccountError>;
}

#[derive(Debug, Serialize)]
struct CreateAccountRequest<'a> {
    email: &'a str,
    university: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    password: &'a str,
    verification_code: &'a str,
    submitted_at: DateTime<Utc>,
}

impl<'a> CreateAccountRequest<'a> {
    fn from_draft(draft: &'a SignupDraft) -> Self {
        Self {
            email: &draft.email,
            university: &draft.university,
            first_name: &draft.first_name,
            last_name: &draft.last_name,
            password: &draft.password,
            verification_code: &draft.verification_code,
            submitted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
struct VerificationCodeRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    error: String,
}

/// Prefer the `error`/`message` field of a JSON error body, fall back to the raw text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// `AccountService` backed by the account HTTP API.
pub struct HttpAccountService {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    create_retry: RetryConfig,
    code_retry: RetryConfig,
}

impl HttpAccountService {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.account_request_timeout)
            .build()
            .context("Failed to build account service HTTP client")?;

        Ok(Self {
            client,
            base_url: config.account_service_url.clone(),
            api_key: config.account_service_api_key.clone(),
            create_retry: RetryConfig::account_creation(),
            code_retry: RetryConfig::verification_code(),
        })
    }

    /// Use the same retry settings for every call.
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.create_retry = retry.clone();
        self.code_retry = retry;
        self
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(), AccountError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            debug!("POST {} -> {}", path, status);
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        Err(AccountError::from_status(status, body))
    }
}

#[async_trait]
impl AccountService for HttpAccountService {
    async fn create_account(&self, draft: &SignupDraft) -> Result<(), AccountError> {
        let request = &CreateAccountRequest::from_draft(draft);

        with_retry_if(
            &self.create_retry,
            "Create account",
            move || self.post_json("/accounts", request),
            AccountError::is_retryable,
        )
        .await?;

        info!("Account created for {}", draft.email);
        Ok(())
    }

    async fn send_verification_code(&self, email: &str) -> Result<(), AccountError> {
        let request = &VerificationCodeRequest { email };

        with_retry_if(
            &self.code_retry,
            "Send verification code",
            move || self.post_json("/verification-codes", request),
            AccountError::is_retryable,
        )
        .await?;

        info!("Verification code sent to {}", email);
        Ok(())
    }
}
