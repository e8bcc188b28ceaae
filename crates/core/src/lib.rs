pub mod intent;
pub mod knowledge;
pub mod models;
pub mod responder;

pub use intent::{classify_intent, normalize_text};
pub use knowledge::KnowledgeBase;
pub use models::*;
pub use responder::{format_price, respond};
