//! Telegram Bot API
//!
//! Only `sendMessage` is needed: the bot never reads updates.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{ClientError, Result};

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token issued by BotFather
    token: String,
    /// HTTP client instance
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new Telegram client
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the Bot API
    /// * `token` - Bot token
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(api_url, token, Client::new())
    }

    /// Create a new Telegram client with a custom HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the Bot API
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// Send a plain text message to a chat
    ///
    /// Fails when the request cannot be made, when the API answers with a
    /// non-success status, or when it reports `ok: false`.
    ///
    /// # Arguments
    /// * `chat_id` - Destination chat identifier
    /// * `text` - Message text
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        debug!("Sending message to chat {}", chat_id);

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let status = response.status();
        let body = crate::body_text(response).await;

        match serde_json::from_str::<BotApiResponse>(&body) {
            Ok(reply) if status.is_success() && reply.ok => Ok(()),
            Ok(reply) => Err(ClientError::api_error(
                status.as_u16(),
                reply.description.unwrap_or(body),
            )),
            Err(_) if !status.is_success() => Err(ClientError::api_error(status.as_u16(), body)),
            Err(e) => Err(ClientError::ParseError(format!(
                "Failed to parse Bot API response: {}",
                e
            ))),
        }
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TelegramClient::new("https://api.telegram.org/", "123:abc");
        assert_eq!(client.api_url(), "https://api.telegram.org");
    }

    #[test]
    fn test_method_url() {
        let client = TelegramClient::new(crate::DEFAULT_TELEGRAM_API_URL, "123:abc");
        assert_eq!(
            client.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let client = TelegramClient::new(crate::DEFAULT_TELEGRAM_API_URL, "123:abc");
        assert!(!format!("{:?}", client).contains("123:abc"));
    }

    #[test]
    fn test_bot_api_response_parsing() {
        let body = r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;
        let reply: BotApiResponse = serde_json::from_str(body).unwrap();
        assert!(!reply.ok);
        assert_eq!(reply.description.as_deref(), Some("Bad Request: chat not found"));

        let reply: BotApiResponse =
            serde_json::from_str(r#"{"ok":true,"result":{"message_id":1}}"#).unwrap();
        assert!(reply.ok);
        assert!(reply.description.is_none());
    }

    #[tokio::test]
    async fn test_send_message_posts_chat_and_text() {
        let (url, request) = stub::serve_once(200, r#"{"ok":true,"result":{"message_id":1}}"#).await;
        let client = TelegramClient::new(url, "123:abc");

        client.send_message("42", "hello").await.unwrap();

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /bot123:abc/sendMessage "));
        assert!(request.ends_with(r#"{"chat_id":"42","text":"hello"}"#));
    }

    #[tokio::test]
    async fn test_send_message_reports_rejection() {
        let body = r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;
        let (url, _request) = stub::serve_once(400, body).await;
        let client = TelegramClient::new(url, "123:abc");

        let err = client.send_message("42", "hello").await.unwrap_err();

        assert!(matches!(
            err,
            ClientError::ApiError { status: 400, ref message } if message == "Bad Request: chat not found"
        ));
    }

    #[tokio::test]
    async fn test_send_message_ok_false_with_200() {
        let (url, _request) =
            stub::serve_once(200, r#"{"ok":false,"description":"Forbidden: bot was blocked"}"#).await;
        let client = TelegramClient::new(url, "123:abc");

        let err = client.send_message("42", "hello").await.unwrap_err();

        assert!(matches!(err, ClientError::ApiError { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_send_message_non_json_error_page() {
        let (url, _request) = stub::serve_once(502, "Bad Gateway").await;
        let client = TelegramClient::new(url, "123:abc");

        let err = client.send_message("42", "hello").await.unwrap_err();

        assert!(err.is_server_error());
    }

    #[tokio::test]
    async fn test_send_message_network_failure_hides_token() {
        let client = TelegramClient::new(stub::unreachable_url().await, "123:abc");

        let err = client.send_message("42", "hello").await.unwrap_err();

        assert!(matches!(err, ClientError::RequestFailed(_)));
        assert!(!err.to_string().contains("123:abc"));
    }
}
