//! Error types for the homework bot

use thiserror::Error;

/// Result type alias for poll cycle operations
pub type Result<T> = std::result::Result<T, PollError>;

/// Boxed cause carried by transport-level failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while configuring or running the poll loop
#[derive(Debug, Error)]
pub enum PollError {
    /// Required secrets are absent or empty; fatal at startup
    #[error("missing required environment variables: {}", missing.join(", "))]
    Configuration {
        /// Names of the missing variables, in declaration order
        missing: Vec<String>,
    },

    /// The review API could not be reached, answered with a non-200 status,
    /// or returned a body that is not JSON
    #[error("failed to fetch homework statuses: {0}")]
    Fetch(#[source] BoxError),

    /// The response or a submission record has an unexpected shape
    #[error("unexpected response shape: {0}")]
    Schema(String),

    /// The submission carries a status missing from the verdict table
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    /// The messenger refused or failed to deliver a notification
    #[error("failed to deliver notification: {0}")]
    Delivery(#[source] BoxError),
}

impl PollError {
    /// Create a fetch error from any transport or parse failure
    pub fn fetch(cause: impl Into<BoxError>) -> Self {
        Self::Fetch(cause.into())
    }

    /// Create a delivery error from any messenger failure
    pub fn delivery(cause: impl Into<BoxError>) -> Self {
        Self::Delivery(cause.into())
    }

    /// Create a schema error
    pub fn schema(detail: impl Into<String>) -> Self {
        Self::Schema(detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_lists_missing() {
        let err = PollError::Configuration {
            missing: vec!["PRACTICUM_TOKEN".to_string(), "TELEGRAM_CHAT_ID".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }

    #[test]
    fn test_fetch_keeps_cause() {
        let err = PollError::fetch("connection refused");
        assert!(err.to_string().contains("connection refused"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
