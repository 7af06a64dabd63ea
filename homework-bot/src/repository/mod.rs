//! Repository layer
//!
//! Repositories are thin adapters over the HTTP clients. They give the poll
//! loop the two capabilities it needs, reading statuses and sending
//! messages, and translate client failures into [`homework_core::PollError`].
//!
//! Both repositories are trait-based so the loop can run against fakes.

mod messages;
mod statuses;

// Re-export traits
pub use messages::Messenger;
pub use statuses::StatusRepository;

// Re-export implementations
pub use messages::TelegramMessenger;
pub use statuses::HttpStatusRepository;
