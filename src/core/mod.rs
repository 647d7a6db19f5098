//! # Core Module
//!
//! Configuration and shared error types for the debate chatbot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial creation with config and error modules

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::Config;
pub use error::DebateError;
