//! Network-free stand-in LLM service
//!
//! Cycles through the predefined topic set instead of calling OpenAI. Used
//! in development and tests, and whenever no API key is configured.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::features::conversation::DebateTopic;
use crate::features::topics::predefined::conspiracy_topics;

use super::{LlmError, LlmService};

/// Mock LLM service that serves canned topics round-robin.
pub struct MockLlmService {
    topics: Vec<DebateTopic>,
    next_index: AtomicUsize,
}

impl MockLlmService {
    pub fn new() -> Self {
        MockLlmService {
            topics: conspiracy_topics(),
            next_index: AtomicUsize::new(0),
        }
    }
}

impl Default for MockLlmService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmService for MockLlmService {
    async fn generate_debate_topic(&self, _user_message: &str) -> Result<DebateTopic, LlmError> {
        let index = self.next_index.fetch_add(1, Ordering::Relaxed) % self.topics.len();
        // Fresh entity with its own id, like a newly generated topic
        let base = &self.topics[index];
        DebateTopic::new(
            &base.title,
            &base.description,
            base.stance,
            base.key_arguments.clone(),
        )
        .map_err(|e| LlmError::InvalidResponse(e.to_string()))
    }

    async fn generate_reply(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok("Interesting point, but I'm not convinced. What makes you so sure?".to_string())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::conversation::Stance;

    #[tokio::test]
    async fn test_mock_cycles_through_topics() {
        let service = MockLlmService::new();
        let mut titles = Vec::new();
        for _ in 0..6 {
            let topic = service.generate_debate_topic("anything").await.unwrap();
            assert_eq!(topic.stance, Stance::For);
            assert!(!topic.key_arguments.is_empty());
            titles.push(topic.title);
        }
        // Five distinct topics, then the cycle wraps
        assert_eq!(titles[0], titles[5]);
        assert_ne!(titles[0], titles[1]);
    }

    #[tokio::test]
    async fn test_mock_topics_are_fresh_entities() {
        let service = MockLlmService::new();
        let a = service.generate_debate_topic("x").await.unwrap();
        let b = service.generate_debate_topic("x").await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_mock_health_check_and_reply() {
        let service = MockLlmService::new();
        assert!(service.health_check().await);
        let reply = service.generate_reply("prompt").await.unwrap();
        assert!(reply.contains('?'));
    }
}
