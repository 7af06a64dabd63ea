//! Homework domain types

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{PollError, Result};

/// Review status of a submission
///
/// Each variant maps to a fixed verdict text; together they form the verdict table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Status code as sent by the review API
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = PollError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(PollError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One homework entry returned by the review API
///
/// Both fields are optional so that a missing field surfaces as a schema
/// error instead of a deserialization failure. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionRecord {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub homework_name: Option<String>,
}

/// Builds the notification text for a single submission record
///
/// Fails with [`PollError::Schema`] when the record is not an object or
/// lacks a non-empty `status` or `homework_name`, and with
/// [`PollError::UnknownStatus`] when the status has no verdict.
pub fn describe_submission(record: &serde_json::Value) -> Result<String> {
    // Derived Deserialize would also take a positional array
    if !record.is_object() {
        return Err(PollError::schema("submission record is not an object"));
    }

    let record: SubmissionRecord = serde_json::from_value(record.clone())
        .map_err(|e| PollError::schema(format!("submission record is malformed: {}", e)))?;

    let status = non_empty(record.status.as_deref())
        .ok_or_else(|| PollError::schema("submission record has no \"status\""))?;
    let homework_name = non_empty(record.homework_name.as_deref())
        .ok_or_else(|| PollError::schema("submission record has no \"homework_name\""))?;

    let status: HomeworkStatus = status.parse()?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name,
        status.verdict()
    ))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
