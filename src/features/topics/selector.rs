//! Topic selection policy
//!
//! Decides, for a raw user message, whether a debate topic should be
//! introduced this turn at all, and where it comes from: the AI generator
//! when one is configured, otherwise the predefined fallback set.

use log::{debug, warn};

use crate::features::conversation::DebateTopic;
use crate::llm::LlmBackend;

use super::greeting::is_casual_greeting;
use super::predefined::fallback_topic_with_intro;

/// Selects debate topics for incoming user messages.
pub struct TopicSelector {
    backend: LlmBackend,
}

impl TopicSelector {
    pub fn new(backend: LlmBackend) -> Self {
        TopicSelector { backend }
    }

    /// Pick a topic for this message, or `None` when the message is a casual
    /// greeting and the bot should ask for a real opinion instead.
    ///
    /// AI failures are swallowed here: one failed generation call falls
    /// straight through to the predefined fallback, never a retry of the
    /// same strategy, and never an error to the caller.
    pub async fn select(&self, user_message: &str) -> Option<DebateTopic> {
        if is_casual_greeting(user_message) {
            debug!("Message classified as casual greeting, no topic assigned");
            return None;
        }

        if let Some(service) = self.backend.service() {
            match service.generate_debate_topic(user_message).await {
                Ok(topic) => {
                    debug!("Generated topic '{}'", topic.title);
                    return Some(topic);
                }
                Err(e) => {
                    warn!("Topic generation failed, using predefined fallback: {e}");
                }
            }
        }

        Some(fallback_topic_with_intro(&mut rand::rng()))
    }
}
