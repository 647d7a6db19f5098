//! # Responses Feature
//!
//! Response generation policy: decides what the bot says next. With no
//! topic assigned it either redirects a greeting or introduces a freshly
//! selected stance; with a topic assigned it produces a rebuttal through
//! the first applicable strategy (AI, heuristic, template).
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with the three-strategy rebuttal chain

pub mod heuristic;
pub mod prompt;
pub mod template;

use log::{debug, warn};

use crate::features::conversation::{Conversation, DebateTopic, Stance};
use crate::features::topics::TopicSelector;
use crate::llm::LlmBackend;

pub use heuristic::heuristic_reply;
pub use prompt::build_rebuttal_prompt;
pub use template::template_reply;

/// Fixed redirect when the user opens with small talk instead of an opinion.
pub const REDIRECT_MESSAGE: &str = "Hello there! I'm a debate bot and I live for a good \
argument. Tell me something you have an opinion on - any topic at all - and I promise to \
take the other side!";

/// Produces the bot's next message for a conversation.
pub struct ResponseGenerator {
    backend: LlmBackend,
    selector: TopicSelector,
}

impl ResponseGenerator {
    pub fn new(backend: LlmBackend) -> Self {
        ResponseGenerator {
            selector: TopicSelector::new(backend.clone()),
            backend,
        }
    }

    /// Produce the bot's reply to the newest user message, assigning a topic
    /// to the conversation as a side effect when one is selected.
    ///
    /// Never fails: every strategy in the chain has an infallible fallback.
    pub async fn next_reply(&self, conversation: &mut Conversation, user_message: &str) -> String {
        match conversation.topic().cloned() {
            None => match self.selector.select(user_message).await {
                None => {
                    debug!("No topic assigned, redirecting the user");
                    REDIRECT_MESSAGE.to_string()
                }
                Some(topic) => {
                    let introduction = introduction(&topic);
                    conversation.set_topic(topic);
                    introduction
                }
            },
            Some(topic) => self.rebuttal(&topic, conversation, user_message).await,
        }
    }

    async fn rebuttal(
        &self,
        topic: &DebateTopic,
        conversation: &Conversation,
        user_message: &str,
    ) -> String {
        // Messages on the log before this turn's user message
        let prior_messages = conversation.len().saturating_sub(1);

        match &self.backend {
            LlmBackend::Real(service) => {
                let prompt = build_rebuttal_prompt(topic, conversation, user_message);
                match service.generate_reply(&prompt).await {
                    Ok(reply) => reply.trim().to_string(),
                    Err(e) => {
                        warn!("AI reply failed, falling back to heuristic: {e}");
                        heuristic_reply(topic, prior_messages, user_message, &mut rand::rng())
                    }
                }
            }
            LlmBackend::Stub(_) => {
                heuristic_reply(topic, prior_messages, user_message, &mut rand::rng())
            }
            LlmBackend::Disabled => template_reply(topic, &mut rand::rng()),
        }
    }
}

/// The bot's first on-topic utterance: states the stance, cites the topic's
/// first key argument verbatim and ends with an engaging question.
pub fn introduction(topic: &DebateTopic) -> String {
    let stance_word = match topic.stance {
        Stance::For => "support",
        Stance::Against => "oppose",
    };
    let first_argument = topic
        .key_arguments
        .first()
        .map(String::as_str)
        .unwrap_or_default();

    format!(
        "{}! I firmly {} this position. Here's the thing: {}. What do you think about that?",
        topic.title, stance_word, first_argument
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::conversation::{Message, Role};
    use crate::llm::{LlmError, LlmService};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct ScriptedLlm {
        reply: Result<&'static str, ()>,
    }

    #[async_trait]
    impl LlmService for ScriptedLlm {
        async fn generate_debate_topic(&self, _msg: &str) -> Result<DebateTopic, LlmError> {
            Ok(DebateTopic::new(
                "Coffee is overrated",
                "Tea does everything better",
                Stance::For,
                vec![
                    "Caffeine crashes hurt productivity".to_string(),
                    "Tea has done it for millennia".to_string(),
                ],
            )
            .unwrap())
        }

        async fn generate_reply(&self, _prompt: &str) -> Result<String, LlmError> {
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(LlmError::Request("scripted failure".to_string())),
            }
        }

        async fn health_check(&self) -> bool {
            true
        }
    }

    fn conversation_with_topic() -> Conversation {
        let mut conversation = Conversation::new();
        conversation.set_topic(
            DebateTopic::new(
                "Coffee is overrated",
                "Tea does everything better",
                Stance::For,
                vec!["Caffeine crashes hurt productivity".to_string()],
            )
            .unwrap(),
        );
        conversation
            .push(Message::new("I love coffee", Role::User).unwrap())
            .unwrap();
        conversation
            .push(Message::new("bot intro", Role::Bot).unwrap())
            .unwrap();
        conversation
            .push(Message::new("coffee is great actually", Role::User).unwrap())
            .unwrap();
        conversation
    }

    #[tokio::test]
    async fn test_greeting_redirects_and_leaves_topic_unset() {
        let generator = ResponseGenerator::new(LlmBackend::Disabled);
        let mut conversation = Conversation::new();
        conversation
            .push(Message::new("hi", Role::User).unwrap())
            .unwrap();

        let reply = generator.next_reply(&mut conversation, "hi").await;
        assert_eq!(reply, REDIRECT_MESSAGE);
        assert!(conversation.topic().is_none());
    }

    #[tokio::test]
    async fn test_topic_assignment_produces_introduction() {
        let llm = Arc::new(ScriptedLlm { reply: Ok("unused") });
        let generator = ResponseGenerator::new(LlmBackend::Real(llm));
        let mut conversation = Conversation::new();
        conversation
            .push(Message::new("I drink coffee every day", Role::User).unwrap())
            .unwrap();

        let reply = generator
            .next_reply(&mut conversation, "I drink coffee every day")
            .await;

        let topic = conversation.topic().expect("topic should be assigned");
        assert_eq!(topic.title, "Coffee is overrated");
        // Introduction embeds the first key argument verbatim
        assert!(reply.contains("Caffeine crashes hurt productivity"));
        assert!(reply.contains("support"));
        assert!(reply.contains('?'));
    }

    #[tokio::test]
    async fn test_real_backend_uses_ai_reply() {
        let llm = Arc::new(ScriptedLlm {
            reply: Ok("An AI-generated rebuttal. Care to respond?"),
        });
        let generator = ResponseGenerator::new(LlmBackend::Real(llm));
        let mut conversation = conversation_with_topic();

        let reply = generator
            .next_reply(&mut conversation, "coffee is great actually")
            .await;
        assert_eq!(reply, "An AI-generated rebuttal. Care to respond?");
    }

    #[tokio::test]
    async fn test_ai_failure_falls_back_to_heuristic() {
        let llm = Arc::new(ScriptedLlm { reply: Err(()) });
        let generator = ResponseGenerator::new(LlmBackend::Real(llm));
        let mut conversation = conversation_with_topic();

        let reply = generator
            .next_reply(&mut conversation, "coffee is great actually")
            .await;
        // Heuristic output embeds a key argument and asks a question
        assert!(reply.contains("Caffeine crashes hurt productivity"));
        assert!(reply.contains('?'));
    }

    #[tokio::test]
    async fn test_disabled_backend_uses_templates() {
        let generator = ResponseGenerator::new(LlmBackend::Disabled);
        let mut conversation = conversation_with_topic();

        let reply = generator
            .next_reply(&mut conversation, "coffee is great actually")
            .await;
        assert!(reply.contains("Caffeine crashes hurt productivity"));
        assert!(reply.contains("Coffee is overrated"));
        assert!(reply.contains('?'));
    }

    #[test]
    fn test_introduction_for_against_stance() {
        let topic = DebateTopic::new(
            "Cats are liquid",
            "Observational physics",
            Stance::Against,
            vec!["They keep their volume".to_string()],
        )
        .unwrap();

        let intro = introduction(&topic);
        assert!(intro.contains("oppose"));
        assert!(intro.contains("They keep their volume"));
        assert!(intro.ends_with('?'));
    }
}
