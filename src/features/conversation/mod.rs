//! # Conversation Feature
//!
//! Entities for debate conversations: messages, topics, and the
//! append-only alternating message log.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with Message, DebateTopic and Conversation

pub mod conversation;
pub mod message;
pub mod topic;

pub use conversation::Conversation;
pub use message::{Message, Role};
pub use topic::{DebateTopic, Stance};
