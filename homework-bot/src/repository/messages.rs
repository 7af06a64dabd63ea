//! Messages repository
//!
//! Delivers notification text to the destination chat.

use async_trait::async_trait;
use homework_client::TelegramClient;
use homework_core::{PollError, Result};
use tracing::error;

/// Repository trait for sending chat messages
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends `text` to the configured chat
    ///
    /// Failures surface as [`PollError::Delivery`].
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram implementation of Messenger
pub struct TelegramMessenger {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramMessenger {
    /// Creates a new Telegram messenger
    ///
    /// # Arguments
    /// * `client` - Bot API client authenticated with the bot token
    /// * `chat_id` - Chat every message is sent to
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, text: &str) -> Result<()> {
        self.client
            .send_message(&self.chat_id, text)
            .await
            .map_err(|e| {
                if e.is_unauthorized() {
                    error!("Telegram rejected TELEGRAM_TOKEN");
                }
                PollError::delivery(e)
            })
    }
}
