//! Homework Core
//!
//! Core types and rules for the homework status bot.
//!
//! This crate contains:
//! - Domain types: homework statuses, the verdict table and submission records
//! - Response validation: shape checks for the review API payload
//! - Errors: the tagged error every poll cycle reports through

pub mod domain;
pub mod error;

pub use error::{PollError, Result};
