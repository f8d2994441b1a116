use anyhow::{Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Account service
    pub account_service_url: String,
    pub account_service_api_key: Option<String>,
    pub account_request_timeout: Duration,

    // Localization
    pub default_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Account service - base URL without trailing slash
            account_service_url: std::env::var("ACCOUNT_SERVICE_URL")
                .context("ACCOUNT_SERVICE_URL not set")?
                .trim_end_matches('/')
                .to_string(),
            account_service_api_key: std::env::var("ACCOUNT_SERVICE_API_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
            account_request_timeout: Duration::from_secs(
                std::env::var("ACCOUNT_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),

            // Localization
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
        })
    }
}
