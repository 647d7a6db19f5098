// Core layer - shared types and configuration
pub mod core;

// Features layer - all feature modules
pub mod features;

// LLM layer - AI collaborator trait and implementations
pub mod llm;

// Storage layer - conversation persistence
pub mod storage;

// Re-export core items
pub use crate::core::{Config, DebateError};

// Re-export feature items
pub use features::{
    // Conversation
    Conversation, DebateTopic, Message, Role, Stance,
    // Debate
    DebateOrchestrator,
    // Responses
    ResponseGenerator,
};

// Re-export LLM items
pub use llm::{LlmBackend, LlmError, LlmService};

// Re-export storage items
pub use storage::{
    ConversationRepository, MemoryConversationRepository, SqliteConversationRepository,
    StorageError,
};
