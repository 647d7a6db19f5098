//! # Debate Feature
//!
//! Orchestrates a stubborn one-on-one debate: the bot picks a topic from the
//! user's opening message, takes a contrarian stance and never concedes.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with start/continue orchestration

pub mod orchestrator;

pub use orchestrator::DebateOrchestrator;
