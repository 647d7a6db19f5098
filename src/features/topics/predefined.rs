//! Predefined fallback topics
//!
//! Static conspiracy-theory topics the bot argues for when AI generation is
//! unavailable or fails. Single source of truth for every component that
//! needs the canonical set (topic selection fallback, mock LLM service).

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::features::conversation::{DebateTopic, Stance};

/// Conversational intro phrases prepended to fallback topic titles so the
/// subject change feels organic.
pub const FALLBACK_INTROS: [&str; 6] = [
    "Speaking of that, I was just thinking about how",
    "You know what's fascinating? I recently read that",
    "That reminds me of something controversial -",
    "While we're talking, did you know that",
    "Here's something that might surprise you:",
    "I've been pondering this theory lately:",
];

/// The canonical predefined topics. Every topic takes the FOR stance.
pub fn conspiracy_topics() -> Vec<DebateTopic> {
    let data: [(&str, &str, &[&str]); 5] = [
        (
            "The Earth is actually flat, not round",
            "The Earth is not a sphere but a flat plane, and space agencies have been lying to us",
            &[
                "NASA photos are clearly doctored and fake",
                "Water is always flat - it would spill off a spinning ball Earth",
                "No one has ever felt the Earth spinning at 1000 mph",
                "The horizon always appears flat to the naked eye",
                "If Earth were spinning, planes couldn't land on runways moving at 1000 mph",
            ],
        ),
        (
            "The 1969 moon landing was staged in Hollywood",
            "The Apollo moon landing was a hoax filmed on a movie set to win the space race",
            &[
                "The American flag appears to wave in the wind, but there's no wind on the moon",
                "No stars are visible in any of the moon landing photos",
                "The lighting appears to come from multiple sources, like studio lights",
                "The technology didn't exist in 1969 to safely travel to the moon",
                "The deadly radiation around Earth would have killed anyone trying to leave orbit",
            ],
        ),
        (
            "World leaders are secretly reptilian aliens in disguise",
            "The global elite are shape-shifting reptilian beings from another dimension controlling humanity",
            &[
                "Many world leaders have been caught with pupils that change to vertical slits on camera",
                "Ancient civilizations worldwide depicted serpent gods ruling over humans",
                "The bloodlines of royal families trace back to these reptilian entities",
                "Their cold, calculating behavior is evidence of their reptilian nature",
                "Underground tunnel systems connect to their subterranean reptilian cities",
            ],
        ),
        (
            "Vaccines are more dangerous than helpful",
            "Vaccines cause more harm than the diseases they claim to prevent",
            &[
                "Natural immunity is always superior to artificial immunity",
                "Vaccine ingredients include dangerous chemicals and heavy metals",
                "Big Pharma profits billions while hiding dangerous side effects",
                "Healthy diet and lifestyle provide better protection than vaccines",
                "Many diseases were already declining before vaccines were introduced",
            ],
        ),
        (
            "Climate change is a hoax created by governments",
            "Global warming is a fabricated crisis designed to control people and economies",
            &[
                "Climate has always changed naturally throughout Earth's history",
                "Scientists manipulate data to support their funding and political agendas",
                "CO2 is plant food - more CO2 means better plant growth",
                "Climate models have consistently failed to make accurate predictions",
                "It's a scheme to impose carbon taxes and restrict individual freedoms",
            ],
        ),
    ];

    data.iter()
        .map(|(title, description, arguments)| {
            DebateTopic::new(
                title,
                description,
                Stance::For,
                arguments.iter().map(|a| a.to_string()).collect(),
            )
            .expect("predefined topic data is valid")
        })
        .collect()
}

/// Pick a uniformly random predefined topic.
pub fn random_topic(rng: &mut impl Rng) -> DebateTopic {
    conspiracy_topics()
        .choose(rng)
        .cloned()
        .expect("predefined topic set is non-empty")
}

/// Pick a random predefined topic and dress it with a random intro phrase.
pub fn fallback_topic_with_intro(rng: &mut impl Rng) -> DebateTopic {
    let base = random_topic(rng);
    let intro = FALLBACK_INTROS
        .choose(rng)
        .expect("intro phrase set is non-empty");
    base.with_fallback_intro(intro)
}
