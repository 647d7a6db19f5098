//! Heuristic rebuttal strategy
//!
//! Used when the configured LLM collaborator is the network-free stub, and
//! as the landing spot when a real AI call fails. Picks the key argument
//! most relevant to what the user just said and wraps it in a randomized
//! opener and closing question so consecutive turns don't repeat verbatim.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::features::conversation::DebateTopic;

/// Openers for early in a conversation (at most 2 messages before this turn).
pub const EARLY_OPENERS: [&str; 4] = [
    "But here's the thing:",
    "I hear you, but consider this:",
    "That's a popular belief, but the reality is different:",
    "Interesting take, but let's look at the facts:",
];

/// Openers once the debate has gone on for a while.
pub const DEEP_OPENERS: [&str; 4] = [
    "We keep going back and forth, but you're still missing the key point:",
    "After everything we've discussed, it still comes down to this:",
    "You haven't addressed the core issue:",
    "Let me put it another way, because this really matters:",
];

/// Closing questions to keep the user engaged.
pub const CLOSERS: [&str; 4] = [
    "Doesn't that make you reconsider?",
    "How do you explain that away?",
    "What's your answer to that?",
    "Can you really dismiss that so easily?",
];

/// Leading words of an argument considered when matching against the user's
/// message. Short filler words are skipped.
const LEADING_KEYWORDS: usize = 3;
const MIN_KEYWORD_LEN: usize = 4;

/// Produce a heuristic rebuttal for the topic.
///
/// `prior_messages` is the number of messages the conversation held before
/// this turn's user message; it controls whether an early or deep opener is
/// used.
pub fn heuristic_reply(
    topic: &DebateTopic,
    prior_messages: usize,
    user_message: &str,
    rng: &mut impl Rng,
) -> String {
    let argument = pick_argument(topic, user_message, rng);

    let opener = if prior_messages <= 2 {
        EARLY_OPENERS.choose(rng)
    } else {
        DEEP_OPENERS.choose(rng)
    }
    .copied()
    .unwrap_or("But here's the thing:");

    let closer = CLOSERS.choose(rng).copied().unwrap_or("What's your answer to that?");

    format!("{opener} {argument}. {closer}")
}

/// Select the key argument whose leading keywords best overlap the user's
/// lowercased message; uniformly random argument when nothing overlaps.
fn pick_argument<'a>(
    topic: &'a DebateTopic,
    user_message: &str,
    rng: &mut impl Rng,
) -> &'a str {
    let message = user_message.to_lowercase();

    let mut best: Option<(&str, usize)> = None;
    for argument in &topic.key_arguments {
        let score = argument
            .to_lowercase()
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|word| word.len() >= MIN_KEYWORD_LEN)
            .take(LEADING_KEYWORDS)
            .filter(|keyword| message.contains(keyword.as_str()))
            .count();
        if score > 0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((argument, score));
        }
    }

    match best {
        Some((argument, _)) => argument,
        None => topic
            .key_arguments
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::conversation::Stance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn climate_topic() -> DebateTopic {
        DebateTopic::new(
            "Climate change is natural",
            "Just natural cycles",
            Stance::For,
            vec![
                "Climate cycles have always existed".to_string(),
                "Solar radiation drives temperature shifts".to_string(),
                "Historical records show warmer periods".to_string(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_reply_contains_an_argument_and_a_question() {
        let topic = climate_topic();
        let mut rng = StdRng::seed_from_u64(1);
        for depth in [0, 1, 5, 9] {
            let reply = heuristic_reply(&topic, depth, "whatever you say", &mut rng);
            assert!(
                topic.key_arguments.iter().any(|a| reply.contains(a.as_str())),
                "reply '{reply}' should embed a key argument"
            );
            assert!(reply.contains('?'));
            assert!(reply.len() > 20);
        }
    }

    #[test]
    fn test_keyword_overlap_picks_relevant_argument() {
        let topic = climate_topic();
        let mut rng = StdRng::seed_from_u64(2);
        let reply = heuristic_reply(
            &topic,
            4,
            "but solar radiation data says otherwise",
            &mut rng,
        );
        assert!(reply.contains("Solar radiation drives temperature shifts"));
    }

    #[test]
    fn test_no_overlap_falls_back_to_random_argument() {
        let topic = climate_topic();
        let mut rng = StdRng::seed_from_u64(3);
        let reply = heuristic_reply(&topic, 0, "xyzzy", &mut rng);
        assert!(topic.key_arguments.iter().any(|a| reply.contains(a.as_str())));
    }

    #[test]
    fn test_opener_depends_on_conversation_depth() {
        let topic = climate_topic();
        let mut rng = StdRng::seed_from_u64(4);

        let early = heuristic_reply(&topic, 2, "zzz", &mut rng);
        assert!(
            EARLY_OPENERS.iter().any(|o| early.starts_with(o)),
            "'{early}' should use an early opener"
        );

        let deep = heuristic_reply(&topic, 3, "zzz", &mut rng);
        assert!(
            DEEP_OPENERS.iter().any(|o| deep.starts_with(o)),
            "'{deep}' should use a deep opener"
        );
    }

    #[test]
    fn test_replies_show_variety() {
        let topic = climate_topic();
        let mut rng = StdRng::seed_from_u64(5);
        let replies: std::collections::HashSet<String> = (0..10)
            .map(|_| heuristic_reply(&topic, 0, "zzz", &mut rng))
            .collect();
        assert!(replies.len() > 1);
    }
}
