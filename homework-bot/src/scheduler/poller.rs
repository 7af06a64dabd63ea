//! Homework poller
//!
//! Polls the review API on a fixed period and forwards the newest
//! submission's verdict to the chat. Each cycle runs
//! fetch → validate → notify (when there is a submission) → advance cursor,
//! and the loop sleeps for the same period whether the cycle succeeded or not.

use homework_core::domain::{current_date, describe_submission, validate_response};
use homework_core::{PollError, Result};
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use crate::repository::{Messenger, StatusRepository};

/// Prefix of the notification sent when a cycle fails
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Poller that tracks one cursor and reports status changes
pub struct HomeworkPoller {
    retry_period: Duration,
    statuses: Arc<dyn StatusRepository>,
    messenger: Arc<dyn Messenger>,
    cursor: i64,
}

impl HomeworkPoller {
    /// Creates a new poller whose cursor starts at the current time
    pub fn new(
        retry_period: Duration,
        statuses: Arc<dyn StatusRepository>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            retry_period,
            statuses,
            messenger,
            cursor: now(),
        }
    }

    /// Starts the query window at `cursor` instead of the current time
    #[cfg(test)]
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    /// Lower bound of the next query window
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Starts the polling loop
    ///
    /// Never returns; the caller ends it by dropping the future.
    pub async fn run(&mut self) {
        info!("Starting homework poller (interval: {:?})", self.retry_period);

        loop {
            self.run_cycle().await;

            debug!("Sleeping for {:?}", self.retry_period);
            time::sleep(self.retry_period).await;
        }
    }

    /// Runs one cycle and absorbs its failure
    ///
    /// A failed cycle is logged and reported to the chat on a best-effort
    /// basis; the cursor is left where it was.
    pub async fn run_cycle(&mut self) {
        match self.poll_once().await {
            Ok(Some(_)) => info!("Notification cycle complete, cursor={}", self.cursor()),
            Ok(None) => debug!("No status changes, cursor={}", self.cursor()),
            Err(e) => {
                match &e {
                    PollError::Fetch(_) => error!("Review API request failed: {:#}", e),
                    PollError::Schema(_) => error!("Review API returned bad data: {}", e),
                    PollError::UnknownStatus(_) => error!("Cannot describe submission: {}", e),
                    PollError::Delivery(_) | PollError::Configuration { .. } => {
                        error!("Poll cycle failed: {}", e)
                    }
                }
                self.notify(&format!("{}: {}", FAILURE_PREFIX, e)).await;
            }
        }
    }

    /// Performs a single poll cycle
    ///
    /// Returns the notification text when the newest submission was reported.
    pub async fn poll_once(&mut self) -> Result<Option<String>> {
        debug!("Polling homework statuses from_date={}", self.cursor);

        let response = self.statuses.fetch_status(self.cursor).await?;
        let homeworks = validate_response(&response)?;

        let sent = match homeworks.first() {
            Some(newest) => {
                let text = describe_submission(newest)?;
                self.notify(&text).await;
                Some(text)
            }
            None => None,
        };

        self.cursor = current_date(&response).unwrap_or_else(|| {
            warn!("Falling back to local time for the next cursor");
            now()
        });

        Ok(sent)
    }

    /// Sends a message, logging delivery failures instead of returning them
    pub async fn notify(&self, text: &str) {
        match self.messenger.send(text).await {
            Ok(()) => debug!("Message sent: {}", text),
            Err(e) => error!("{}", e),
        }
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
