//! # LLM Collaborator
//!
//! Optional AI backend for topic and reply generation. The core works with
//! it absent: the backend is a tagged variant chosen once at startup, never
//! inferred by poking at the service's internals.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.0.0: Initial release with OpenAI service and network-free mock

pub mod mock;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use thiserror::Error;

use crate::core::Config;
use crate::features::conversation::DebateTopic;

pub use mock::MockLlmService;
pub use openai::OpenAiLlmService;

/// Errors from the LLM collaborator. These never reach the orchestration
/// caller; the policies recover by falling through to the next strategy.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("llm request failed: {0}")]
    Request(String),

    #[error("llm request timed out")]
    Timeout,

    #[error("invalid response format from llm: {0}")]
    InvalidResponse(String),
}

/// Contract for AI-powered topic and reply generation.
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Analyze a user message and generate a controversial debate topic the
    /// bot will argue FOR, with at least one key argument.
    async fn generate_debate_topic(&self, user_message: &str) -> Result<DebateTopic, LlmError>;

    /// Generate a short free-form reply for the given prompt.
    async fn generate_reply(&self, prompt: &str) -> Result<String, LlmError>;

    /// Whether the service is reachable and responding.
    async fn health_check(&self) -> bool;
}

/// Which LLM collaborator the response policies are working with.
///
/// `Real` gets full AI replies, `Stub` gets heuristic replies backed by the
/// mock's canned topics, `Disabled` gets template replies only.
#[derive(Clone)]
pub enum LlmBackend {
    Real(Arc<dyn LlmService>),
    Stub(Arc<dyn LlmService>),
    Disabled,
}

impl LlmBackend {
    /// Wire up the backend from configuration, mirroring the precedence the
    /// operator expects: explicit off switch, then mock flag or missing key,
    /// then the real provider.
    pub fn from_config(config: &Config) -> Self {
        if config.disable_ai {
            info!("AI disabled by configuration - template replies only");
            return LlmBackend::Disabled;
        }
        if config.use_mock_openai || !config.has_openai_key() {
            info!("Using mock LLM service (no API key or mock requested)");
            return LlmBackend::Stub(Arc::new(MockLlmService::new()));
        }
        info!("Using OpenAI LLM service with model '{}'", config.openai_model);
        LlmBackend::Real(Arc::new(OpenAiLlmService::new(&config.openai_model)))
    }

    /// The underlying service, if any is configured.
    pub fn service(&self) -> Option<&Arc<dyn LlmService>> {
        match self {
            LlmBackend::Real(service) | LlmBackend::Stub(service) => Some(service),
            LlmBackend::Disabled => None,
        }
    }
}

impl std::fmt::Debug for LlmBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmBackend::Real(_) => write!(f, "LlmBackend::Real"),
            LlmBackend::Stub(_) => write!(f, "LlmBackend::Stub"),
            LlmBackend::Disabled => write!(f, "LlmBackend::Disabled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_config_precedence() {
        let mut config = Config {
            openai_api_key: Some("sk-test".to_string()),
            ..Config::default()
        };
        assert!(matches!(LlmBackend::from_config(&config), LlmBackend::Real(_)));

        config.use_mock_openai = true;
        assert!(matches!(LlmBackend::from_config(&config), LlmBackend::Stub(_)));

        config.disable_ai = true;
        assert!(matches!(LlmBackend::from_config(&config), LlmBackend::Disabled));
    }

    #[test]
    fn test_missing_key_falls_back_to_stub() {
        let config = Config::default();
        assert!(matches!(LlmBackend::from_config(&config), LlmBackend::Stub(_)));
    }

    #[test]
    fn test_service_accessor() {
        assert!(LlmBackend::Disabled.service().is_none());
        let backend = LlmBackend::Stub(Arc::new(MockLlmService::new()));
        assert!(backend.service().is_some());
    }
}
