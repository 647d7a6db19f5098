//! Rebuttal prompt construction for the AI strategy

use crate::features::conversation::{Conversation, DebateTopic, Role};

/// How many trailing messages of context go into the prompt (3 exchanges).
const HISTORY_WINDOW: usize = 6;

/// Build the prompt for an AI-generated rebuttal.
///
/// Includes the topic, the bot's stance, the full ordered argument list, a
/// rendered window of recent conversation history (excluding the newest user
/// message, which is quoted separately) and the newest user message.
pub fn build_rebuttal_prompt(
    topic: &DebateTopic,
    conversation: &Conversation,
    latest_user_message: &str,
) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!("You are debating the topic: \"{}\"\n", topic.title));
    prompt.push_str(&format!("{}\n\n", topic.stance_description()));

    prompt.push_str("Your key arguments:\n");
    for (i, argument) in topic.key_arguments.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, argument));
    }

    // Everything before the just-appended user message is history
    let messages = conversation.messages();
    let history = &messages[..messages.len().saturating_sub(1)];
    let window_start = history.len().saturating_sub(HISTORY_WINDOW);

    prompt.push_str("\nConversation history:\n");
    for message in &history[window_start..] {
        let speaker = match message.role {
            Role::User => "User",
            Role::Bot => "Bot",
        };
        prompt.push_str(&format!("{}: {}\n", speaker, message.content));
    }

    prompt.push_str(&format!("\nThe user just said: \"{latest_user_message}\"\n"));
    prompt.push_str(
        "Respond in 2-3 sentences. Stay firmly on your stance, be persuasive, \
         and end with an engaging question.",
    );

    prompt
}
