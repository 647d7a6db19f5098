//! # Topics Feature
//!
//! Topic selection policy: greeting detection, AI-backed topic generation
//! and the predefined conspiracy fallback set.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with greeting classifier and fallback topics

pub mod greeting;
pub mod predefined;
pub mod selector;

pub use greeting::is_casual_greeting;
pub use predefined::{conspiracy_topics, fallback_topic_with_intro, FALLBACK_INTROS};
pub use selector::TopicSelector;
