//! Template rebuttal strategy
//!
//! Last-resort replies used when no LLM collaborator is configured at all.
//! Each template embeds the topic title and a randomly chosen key argument
//! and always ends with a question.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::features::conversation::DebateTopic;

/// Number of distinct reply templates.
pub const TEMPLATE_COUNT: usize = 4;

/// Produce a templated rebuttal for the topic.
pub fn template_reply(topic: &DebateTopic, rng: &mut impl Rng) -> String {
    let argument = topic
        .key_arguments
        .choose(rng)
        .map(String::as_str)
        .unwrap_or_default();
    let title = &topic.title;

    let templates = [
        format!(
            "That's exactly what they want you to think! When it comes to {title}, \
             remember: {argument}. How can you ignore that?"
        ),
        format!(
            "I hear you, but consider this: {argument}. Doesn't that change how you \
             see {title}?"
        ),
        format!(
            "You can disagree all you want about {title}, but the facts remain: \
             {argument}. What's your answer to that?"
        ),
        format!(
            "Interesting, but you're overlooking something about {title}: {argument}. \
             Are you sure you've thought this through?"
        ),
    ];

    templates
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| format!("{argument}. What do you say to that?"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::conversation::Stance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn topic() -> DebateTopic {
        DebateTopic::new(
            "Social media is harmful",
            "Social media causes more harm than good",
            Stance::For,
            vec![
                "Addiction".to_string(),
                "Mental health issues".to_string(),
                "Privacy concerns".to_string(),
                "Misinformation".to_string(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_template_reply_structure() {
        let topic = topic();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let reply = template_reply(&topic, &mut rng);
            assert!(
                topic.key_arguments.iter().any(|a| reply.contains(a.as_str())),
                "reply '{reply}' should embed a key argument"
            );
            assert!(reply.contains("Social media is harmful"));
            assert!(reply.contains('?'));
            assert!(reply.len() > 20);
        }
    }

    #[test]
    fn test_template_replies_show_variety() {
        let topic = topic();
        let mut rng = StdRng::seed_from_u64(10);
        let replies: std::collections::HashSet<String> = (0..12)
            .map(|_| template_reply(&topic, &mut rng))
            .collect();
        assert!(replies.len() > 1, "template replies should vary");
    }
}
