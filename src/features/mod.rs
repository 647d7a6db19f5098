//! # Features
//!
//! Feature modules for the debate bot. Each feature owns its domain types
//! and policy and is wired together by the debate orchestrator.

pub mod conversation;
pub mod debate;
pub mod responses;
pub mod topics;

pub use conversation::{Conversation, DebateTopic, Message, Role, Stance};
pub use debate::DebateOrchestrator;
pub use responses::ResponseGenerator;
