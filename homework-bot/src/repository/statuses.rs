//! Statuses repository
//!
//! Fetches raw homework status payloads from the review API.

use async_trait::async_trait;
use homework_client::PracticumClient;
use homework_core::{PollError, Result};
use serde_json::Value;
use tracing::{error, warn};

/// Repository trait for reading homework statuses
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches the statuses changed since `cursor`
    ///
    /// Transport failures, unexpected status codes and non-JSON bodies all
    /// surface as [`PollError::Fetch`]. The payload shape is not checked here.
    ///
    /// # Arguments
    /// * `cursor` - UNIX timestamp marking the start of the query window
    async fn fetch_status(&self, cursor: i64) -> Result<Value>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: PracticumClient,
}

impl HttpStatusRepository {
    /// Creates a new HTTP statuses repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch_status(&self, cursor: i64) -> Result<Value> {
        self.client
            .homework_statuses(cursor)
            .await
            .map_err(|e| {
                if e.is_unauthorized() {
                    error!("Review API rejected PRACTICUM_TOKEN");
                } else if e.is_server_error() {
                    warn!("Review API is unavailable, will retry next period");
                }
                PollError::fetch(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn unreachable_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/statuses/", addr)
    }

    #[tokio::test]
    async fn test_network_failure_becomes_fetch_error() {
        let client = PracticumClient::new(unreachable_url().await, "secret");
        let repository = HttpStatusRepository::new(client);

        let err = repository.fetch_status(1690000000).await.unwrap_err();

        assert!(matches!(err, PollError::Fetch(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
