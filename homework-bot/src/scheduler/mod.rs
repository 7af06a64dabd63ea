//! Scheduler layer for the bot
//!
//! This layer owns the polling loop: it keeps the query cursor, runs one
//! cycle per period and absorbs every failure a cycle can produce.

pub mod poller;

pub use poller::HomeworkPoller;
