//! Homework HTTP Clients
//!
//! Thin, typed HTTP clients for the two services the homework bot talks to:
//! - [`PracticumClient`]: the homework review API, queried for submission statuses
//! - [`TelegramClient`]: the Telegram Bot API, used to deliver notifications
//!
//! Both clients share the same error type and accept a preconfigured
//! `reqwest::Client` so callers can set timeouts or proxies.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::{PracticumClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let practicum = PracticumClient::new(homework_client::DEFAULT_ENDPOINT, "practicum-token");
//!     let telegram = TelegramClient::new(homework_client::DEFAULT_TELEGRAM_API_URL, "bot-token");
//!
//!     let statuses = practicum.homework_statuses(0).await?;
//!     telegram.send_message("123456", &statuses.to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

#[cfg(test)]
mod stub;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

/// Review API endpoint returning homework statuses
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Base URL of the Telegram Bot API
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Reads a response body, falling back to a placeholder when it is unreadable
async fn body_text(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string())
}
