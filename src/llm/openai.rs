//! OpenAI-backed LLM service
//!
//! Generates debate topics and rebuttals with the OpenAI chat API. The
//! topic prompt asks for a strict JSON object; anything that does not parse
//! into a valid topic becomes a typed [`LlmError`] so the caller can fall
//! back to the predefined set.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use tokio::time::timeout;

use crate::features::conversation::{DebateTopic, Stance};

use super::{LlmError, LlmService};

/// Cap on any single OpenAI round trip. A timeout is treated exactly like a
/// failed call: the policies fall through to the next strategy.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

/// System prompt for topic generation. The model must return a bare JSON
/// object so the response can be parsed into a DebateTopic.
const TOPIC_SYSTEM_PROMPT: &str = r#"You are a debate topic generator. Your job is to:

1. Analyze the user's message to identify the main topic they're discussing
2. Generate a controversial or contrarian stance on that topic
3. Provide 3-5 compelling arguments supporting that stance

Rules:
- The stance should be debatable but not offensive or harmful
- Arguments should be persuasive and based on real talking points (even if disputed)
- Keep the tone intellectual, not inflammatory
- Focus on topics where reasonable people can disagree

Return ONLY a JSON object with this exact structure:
{
    "title": "Your controversial stance as a clear statement",
    "description": "Brief explanation of what this stance means",
    "key_arguments": ["Argument 1", "Argument 2", "Argument 3", "Argument 4", "Argument 5"]
}"#;

/// System prompt for rebuttal generation.
const REPLY_SYSTEM_PROMPT: &str = "You are a stubborn debate chatbot. You never concede your \
assigned position. Stay respectful but contrarian, keep replies to 2-3 sentences, and always \
end with an engaging question.";

/// OpenAI implementation of the LLM service.
///
/// The openai crate reads the API key from the environment (OPENAI_KEY /
/// OPENAI_API_KEY); the binary sets it from config at startup.
pub struct OpenAiLlmService {
    model: String,
}

impl OpenAiLlmService {
    pub fn new(model: &str) -> Self {
        OpenAiLlmService {
            model: model.to_string(),
        }
    }

    async fn chat(&self, messages: Vec<ChatCompletionMessage>) -> Result<String, LlmError> {
        let completion = timeout(
            REQUEST_TIMEOUT,
            ChatCompletion::builder(&self.model, messages).create(),
        )
        .await
        .map_err(|_| LlmError::Timeout)?
        .map_err(|e| LlmError::Request(e.to_string()))?;

        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default()
            .trim()
            .to_string();

        if content.is_empty() {
            return Err(LlmError::InvalidResponse("empty completion".to_string()));
        }
        Ok(content)
    }
}

fn message(role: ChatCompletionMessageRole, content: &str) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Some(content.to_string()),
        name: None,
        function_call: None,
        tool_call_id: None,
        tool_calls: None,
    }
}

/// Parse the model's JSON answer into a DebateTopic. The bot always argues
/// FOR the generated controversial stance.
fn parse_topic_json(content: &str) -> Result<DebateTopic, LlmError> {
    // Models occasionally wrap the object in a markdown code fence
    let stripped = content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    let value: serde_json::Value = serde_json::from_str(stripped)
        .map_err(|e| LlmError::InvalidResponse(format!("not valid JSON: {e}")))?;

    for field in ["title", "description", "key_arguments"] {
        if value.get(field).is_none() {
            return Err(LlmError::InvalidResponse(format!(
                "missing required field: {field}"
            )));
        }
    }

    let title = value["title"]
        .as_str()
        .ok_or_else(|| LlmError::InvalidResponse("title is not a string".to_string()))?;
    let description = value["description"]
        .as_str()
        .ok_or_else(|| LlmError::InvalidResponse("description is not a string".to_string()))?;
    let key_arguments: Vec<String> = value["key_arguments"]
        .as_array()
        .ok_or_else(|| LlmError::InvalidResponse("key_arguments is not an array".to_string()))?
        .iter()
        .filter_map(|a| a.as_str().map(|s| s.to_string()))
        .collect();

    DebateTopic::new(title, description, Stance::For, key_arguments)
        .map_err(|e| LlmError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl LlmService for OpenAiLlmService {
    async fn generate_debate_topic(&self, user_message: &str) -> Result<DebateTopic, LlmError> {
        debug!(
            "Generating debate topic for message: {}",
            user_message.chars().take(100).collect::<String>()
        );

        let messages = vec![
            message(ChatCompletionMessageRole::System, TOPIC_SYSTEM_PROMPT),
            message(
                ChatCompletionMessageRole::User,
                &format!("Generate a controversial stance based on this message: {user_message}"),
            ),
        ];

        let content = self.chat(messages).await?;
        debug!("Topic generation response: {} chars", content.len());
        parse_topic_json(&content)
    }

    async fn generate_reply(&self, prompt: &str) -> Result<String, LlmError> {
        let messages = vec![
            message(ChatCompletionMessageRole::System, REPLY_SYSTEM_PROMPT),
            message(ChatCompletionMessageRole::User, prompt),
        ];

        let reply = self.chat(messages).await?;
        debug!("Reply generation response: {} chars", reply.len());
        Ok(reply)
    }

    async fn health_check(&self) -> bool {
        let messages = vec![message(ChatCompletionMessageRole::User, "Hello")];
        self.chat(messages).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_topic_json() {
        let content = r#"{
            "title": "Remote work is making us less productive",
            "description": "Offices exist for a reason",
            "key_arguments": ["Fewer spontaneous ideas", "Blurred work-life boundaries", "Meeting fatigue"]
        }"#;

        let topic = parse_topic_json(content).unwrap();
        assert_eq!(topic.title, "Remote work is making us less productive");
        assert_eq!(topic.stance, Stance::For);
        assert_eq!(topic.key_arguments.len(), 3);
    }

    #[test]
    fn test_parse_topic_json_with_code_fence() {
        let content = "```json\n{\"title\": \"T\", \"description\": \"D\", \"key_arguments\": [\"A\"]}\n```";
        let topic = parse_topic_json(content).unwrap();
        assert_eq!(topic.title, "T");
    }

    #[test]
    fn test_parse_topic_json_missing_field() {
        let content = r#"{"title": "T", "description": "D"}"#;
        let err = parse_topic_json(content).unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
        assert!(err.to_string().contains("key_arguments"));
    }

    #[test]
    fn test_parse_topic_json_not_json() {
        let err = parse_topic_json("Sure! Here's a topic for you...").unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_topic_json_empty_arguments() {
        let content = r#"{"title": "T", "description": "D", "key_arguments": []}"#;
        assert!(parse_topic_json(content).is_err());
    }
}
