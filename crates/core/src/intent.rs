use crate::models::Intent;

pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

struct KeywordRule {
    keywords: &'static [&'static str],
    intent: Intent,
}

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "greetings"];

/// Sub-intent rules applied when the message names a destination.
const DESTINATION_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["places", "visit", "attractions", "sights", "see"],
        intent: Intent::DestinationGuide,
    },
    KeywordRule {
        keywords: &["restaurant", "food", "eat", "dining", "cuisine"],
        intent: Intent::DestinationRestaurants,
    },
    KeywordRule {
        keywords: &["package", "tour", "deal"],
        intent: Intent::DestinationPackages,
    },
];

/// Rules applied when no destination was extracted.
const GENERAL_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["budget", "cheap", "affordable", "save", "money"],
        intent: Intent::BudgetTips,
    },
    KeywordRule {
        keywords: &["package", "tour", "deal", "offer"],
        intent: Intent::AllPackages,
    },
    KeywordRule {
        keywords: &["restaurant", "food", "eat", "dining"],
        intent: Intent::RestaurantPrompt,
    },
    KeywordRule {
        keywords: &["hotel", "accommodation", "stay", "lodge"],
        intent: Intent::HotelPrompt,
    },
    KeywordRule {
        keywords: &["book", "reservation", "reserve"],
        intent: Intent::BookingHelp,
    },
    KeywordRule {
        keywords: &["help", "assist", "support"],
        intent: Intent::HelpMenu,
    },
];

/// Ordered keyword rules, first match wins. Greetings short-circuit
/// everything, including a destination named in the same message. The
/// fall-through branches make classification total: a recognized
/// destination defaults to its guide, anything else to the menu.
pub fn classify_intent(message: &str, has_destination: bool) -> Intent {
    let lower = message.to_lowercase();

    if contains_any(&lower, GREETING_KEYWORDS) {
        return Intent::Greeting;
    }

    let (rules, fallback) = if has_destination {
        (DESTINATION_RULES, Intent::DestinationGuide)
    } else {
        (GENERAL_RULES, Intent::DefaultMenu)
    };

    rules
        .iter()
        .find(|rule| contains_any(&lower, rule.keywords))
        .map_or(fallback, |rule| rule.intent)
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
