//! Error taxonomy for the debate chatbot
//!
//! Splits failures into the two classes the transport boundary cares about:
//! validation errors (the caller's fault, 4xx-equivalent) and storage errors
//! (our fault, 5xx-equivalent). LLM failures never appear here - they are
//! recovered inside the topic/response policies and only logged.

use thiserror::Error;
use uuid::Uuid;

use crate::features::conversation::Role;
use crate::storage::StorageError;

/// Errors surfaced by the orchestration layer.
#[derive(Debug, Error)]
pub enum DebateError {
    /// User submitted an empty or whitespace-only message
    #[error("message cannot be empty")]
    EmptyMessage,

    /// User submitted a message over the transport limit
    #[error("message cannot exceed {max} characters")]
    MessageTooLong { max: usize },

    /// Conversation id is not a well-formed UUID
    #[error("invalid conversation id format: '{0}'")]
    InvalidConversationId(String),

    /// No conversation with this id exists in the repository
    #[error("conversation {0} not found")]
    ConversationNotFound(Uuid),

    /// Appending this message would break the user/bot alternation rule
    #[error("cannot add consecutive {role} messages")]
    ConsecutiveMessages { role: Role },

    /// Topic title was empty or whitespace-only
    #[error("topic title cannot be empty")]
    EmptyTitle,

    /// Topic description was empty or whitespace-only
    #[error("topic description cannot be empty")]
    EmptyDescription,

    /// Topic had no key arguments to debate with
    #[error("topic must have at least one key argument")]
    NoKeyArguments,

    /// The repository collaborator failed; fatal for the current call
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl DebateError {
    /// Whether this error maps to a client error (4xx) at the transport
    /// boundary. Everything except storage failures is the caller's fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DebateError::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_client_errors() {
        assert!(DebateError::EmptyMessage.is_client_error());
        assert!(DebateError::InvalidConversationId("nope".into()).is_client_error());
        assert!(DebateError::ConversationNotFound(Uuid::new_v4()).is_client_error());
        assert!(DebateError::ConsecutiveMessages { role: Role::User }.is_client_error());
    }

    #[test]
    fn test_storage_errors_are_server_errors() {
        let err = DebateError::Storage(StorageError::Backend("disk on fire".into()));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        assert_eq!(DebateError::EmptyMessage.to_string(), "message cannot be empty");
        let err = DebateError::ConsecutiveMessages { role: Role::Bot };
        assert!(err.to_string().contains("consecutive bot messages"));
        let err = DebateError::InvalidConversationId("abc".into());
        assert!(err.to_string().contains("invalid conversation id format"));
    }
}
