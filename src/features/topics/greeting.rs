//! Casual greeting classifier
//!
//! Heuristic keyword/ratio classifier that decides whether a user message is
//! small talk (so the bot should ask for a real opinion) or substantial
//! enough to hang a debate topic on. The thresholds are deliberately ad hoc;
//! they are pinned by tests rather than tuned.

use std::sync::OnceLock;

use regex::Regex;

/// Fixed greeting phrases, matched after lowercasing and trimming.
const GREETING_PHRASES: [&str; 18] = [
    "hi",
    "hello",
    "hey",
    "yo",
    "sup",
    "howdy",
    "greetings",
    "hiya",
    "good morning",
    "good afternoon",
    "good evening",
    "what's up",
    "whats up",
    "how are you",
    "how's it going",
    "hows it going",
    "hi there",
    "hello there",
];

/// Words that mark a follow-up as substantial enough to debate, even when it
/// starts with a greeting.
const SUBSTANTIAL_WORDS: [&str; 8] = [
    "think",
    "believe",
    "love",
    "hate",
    "support",
    "oppose",
    "about",
    "regarding",
];

/// Word-boundary matchers, one per greeting phrase, compiled once.
fn phrase_matchers() -> &'static [Regex] {
    static MATCHERS: OnceLock<Vec<Regex>> = OnceLock::new();
    MATCHERS.get_or_init(|| {
        GREETING_PHRASES
            .iter()
            .map(|phrase| {
                Regex::new(&format!(r"\b{}\b", regex::escape(phrase)))
                    .expect("greeting phrase compiles to a valid regex")
            })
            .collect()
    })
}

/// Classify a raw user message as a casual greeting.
pub fn is_casual_greeting(message: &str) -> bool {
    let normalized = message.trim().to_lowercase();
    if normalized.is_empty() {
        return false;
    }
    let word_count = normalized.split_whitespace().count();

    // Exact match against the fixed phrase list
    if GREETING_PHRASES.contains(&normalized.as_str()) {
        return true;
    }

    // Contained phrase that accounts for more than half the message's words
    for phrase in GREETING_PHRASES {
        if normalized.contains(phrase) {
            let phrase_words = phrase.split_whitespace().count();
            if phrase_words * 2 > word_count {
                return true;
            }
        }
    }

    // Greeting at the start of a short message
    for phrase in GREETING_PHRASES {
        if let Some(rest) = normalized.strip_prefix(phrase) {
            // Require a word boundary so "high taxes" is not a "hi" greeting
            if rest.chars().next().is_some_and(|c| c.is_alphanumeric()) {
                continue;
            }
            if word_count <= 4 {
                return true;
            }
            if word_count <= 6 && !contains_substantial_word(rest) {
                return true;
            }
        }
    }

    // Several distinct greetings crammed into a short message
    if word_count <= 8 {
        let distinct_matches = phrase_matchers()
            .iter()
            .filter(|matcher| matcher.is_match(&normalized))
            .count();
        if distinct_matches >= 2 {
            return true;
        }
    }

    false
}

fn contains_substantial_word(text: &str) -> bool {
    text.split_whitespace().any(|word| {
        let stripped = word.trim_matches(|c: char| !c.is_alphanumeric());
        SUBSTANTIAL_WORDS.contains(&stripped)
    })
}
