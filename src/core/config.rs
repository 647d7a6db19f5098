//! Application configuration loaded from environment variables
//!
//! All knobs come from the environment (optionally via a `.env` file loaded
//! by the binary). Construct once at startup and pass by reference - there
//! are no cached global singletons.

use anyhow::Result;

/// Placeholder value shipped in `.env.example`; treated the same as no key.
const PLACEHOLDER_KEY: &str = "your_openai_api_key_here";

/// Runtime configuration for the chatbot.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key, if configured
    pub openai_api_key: Option<String>,
    /// OpenAI model to use for topic and reply generation
    pub openai_model: String,
    /// Force the network-free mock LLM service even when a key is present
    pub use_mock_openai: bool,
    /// Disable the LLM collaborator entirely (template replies only)
    pub disable_ai: bool,
    /// Path to the sqlite conversation store; in-memory storage when unset
    pub database_path: Option<String>,
    /// Default log filter for env_logger
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            use_mock_openai: env_flag("USE_MOCK_OPENAI"),
            disable_ai: env_flag("DISABLE_AI"),
            database_path: std::env::var("DATABASE_PATH").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Whether a usable OpenAI API key is configured.
    pub fn has_openai_key(&self) -> bool {
        self.openai_api_key
            .as_deref()
            .map(|key| !key.trim().is_empty() && key != PLACEHOLDER_KEY)
            .unwrap_or(false)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: None,
            openai_model: "gpt-3.5-turbo".to_string(),
            use_mock_openai: false,
            disable_ai: false,
            database_path: None,
            log_level: "info".to_string(),
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
}
