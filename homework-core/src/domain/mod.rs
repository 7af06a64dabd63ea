//! Core domain types
//!
//! This module contains the structures the bot reasons about: the status a
//! reviewer assigned to a submission, the submission record itself, and the
//! payload returned by the review API.

pub mod homework;
pub mod response;

pub use homework::{HomeworkStatus, SubmissionRecord, describe_submission};
pub use response::{current_date, validate_response};
