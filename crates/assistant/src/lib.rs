use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument};
use wanderpeak_core::{classify_intent, normalize_text, respond, ChatInput, ChatOutcome, Intent, KnowledgeBase};
use wanderpeak_observability::AppMetrics;

/// Stateless chat orchestrator: normalize, extract destination, classify,
/// render. The knowledge base is read-only, so concurrent use needs no
/// coordination.
#[derive(Clone)]
pub struct TravelAssistant {
    knowledge: Arc<KnowledgeBase>,
    metrics: Arc<AppMetrics>,
}

impl TravelAssistant {
    pub fn new(knowledge: Arc<KnowledgeBase>, metrics: Arc<AppMetrics>) -> Self {
        Self { knowledge, metrics }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    #[instrument(skip(self, input))]
    pub fn handle_chat(&self, input: &ChatInput) -> ChatOutcome {
        let started = Instant::now();
        self.metrics.inc_chat_request();

        let normalized = normalize_text(&input.message);
        let destination = self.knowledge.extract_destination(&normalized);
        if destination.is_some() {
            self.metrics.inc_destination_hit();
        }

        let intent = classify_intent(&normalized, destination.is_some());
        if intent == Intent::DefaultMenu {
            self.metrics.inc_fallback();
        }

        let response = respond(&self.knowledge, intent, destination);
        let destination_key = destination.map(|dest| dest.key.clone());

        self.metrics.observe_latency(started.elapsed());
        info!(
            intent = ?intent,
            destination = destination_key.as_deref().unwrap_or("-"),
            history_turns = input.history.len(),
            "chat handled"
        );

        ChatOutcome {
            response,
            intent,
            destination: destination_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wanderpeak_core::{responder, ChatTurn};

    fn assistant() -> TravelAssistant {
        TravelAssistant::new(Arc::new(KnowledgeBase::builtin()), AppMetrics::shared())
    }

    fn chat(message: &str) -> ChatOutcome {
        assistant().handle_chat(&ChatInput {
            message: message.to_string(),
            history: Vec::new(),
        })
    }

    #[test]
    fn greeting_wins_even_with_destination_present() {
        let outcome = chat("hi there, tell me about japan");
        assert_eq!(outcome.intent, Intent::Greeting);
        assert_eq!(outcome.response, responder::greeting());
    }

    #[test]
    fn destination_query_returns_guide() {
        let outcome = chat("best places to visit in Japan");
        assert_eq!(outcome.intent, Intent::DestinationGuide);
        assert_eq!(outcome.destination.as_deref(), Some("japan"));
        assert!(outcome.response.contains("Mount Fuji"));
        assert!(outcome.response.contains("Nara Deer Park"));
    }

    #[test]
    fn destination_packages_are_filtered() {
        let outcome = chat("show me a tour package for paris");
        assert_eq!(outcome.intent, Intent::DestinationPackages);
        assert!(outcome.response.contains("Paris Romance Package"));
        assert!(!outcome.response.contains("Maldives Paradise"));
    }

    #[test]
    fn nonsense_yields_default_menu_and_counts_fallback() {
        let metrics = AppMetrics::shared();
        let assistant =
            TravelAssistant::new(Arc::new(KnowledgeBase::builtin()), metrics.clone());
        let outcome = assistant.handle_chat(&ChatInput {
            message: "xyzzy".to_string(),
            history: Vec::new(),
        });

        assert_eq!(outcome.intent, Intent::DefaultMenu);
        assert_eq!(outcome.response, responder::default_menu());
        assert_eq!(metrics.snapshot().fallback_total, 1);
    }

    #[test]
    fn history_is_accepted_but_does_not_change_the_reply() {
        let with_history = assistant().handle_chat(&ChatInput {
            message: "restaurants in dubai".to_string(),
            history: vec![ChatTurn {
                role: "user".to_string(),
                text: "tell me about paris".to_string(),
            }],
        });
        let without_history = chat("restaurants in dubai");

        assert_eq!(with_history.response, without_history.response);
        assert_eq!(with_history.intent, Intent::DestinationRestaurants);
    }
}
