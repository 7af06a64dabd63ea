//! Bot configuration
//!
//! Defines the credentials and tunables of the bot: the review API token,
//! the Telegram bot token and destination chat, the polling period and the
//! endpoints of both services.

use homework_core::PollError;
use std::time::Duration;

/// Variables that must be present and non-empty for the bot to start
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Bot configuration
///
/// Built once at startup and passed to the components that need it.
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat receiving the notifications
    pub telegram_chat_id: String,

    /// How long to sleep between poll cycles
    pub retry_period: Duration,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Base URL of the Telegram Bot API
    pub telegram_api_url: String,

    /// Timeout applied to every outbound request; none when unset
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - PRACTICUM_ENDPOINT (optional, default: the public review API)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - REQUEST_TIMEOUT (optional, seconds, default: no timeout)
    pub fn from_env() -> Result<Self, PollError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Fails with [`PollError::Configuration`] naming every required
    /// variable that is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PollError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|key| required(**key).is_none())
            .map(|key| key.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(PollError::Configuration { missing });
        }

        let seconds = |key: &str| {
            lookup(key)
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
        };

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: required("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: required("TELEGRAM_CHAT_ID").unwrap_or_default(),
            retry_period: seconds("RETRY_PERIOD").unwrap_or(DEFAULT_RETRY_PERIOD),
            endpoint: lookup("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| homework_client::DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| homework_client::DEFAULT_TELEGRAM_API_URL.to_string()),
            request_timeout: seconds("REQUEST_TIMEOUT"),
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.retry_period.is_zero() {
            anyhow::bail!("retry_period must be greater than 0");
        }

        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.request_timeout.is_some_and(|t| t.is_zero()) {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("retry_period", &self.retry_period)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}
