use serde::{Deserialize, Serialize};

/// A single attraction entry. A price of 0 means free entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub description: String,
    pub price: u32,
}

/// Restaurant entries carry a pre-formatted price range string; it is
/// rendered as-is and never parsed back into a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub price_range: String,
}

/// A top-level travel location. `key` is the unique lowercase identifier
/// used for matching; table insertion order is meaningful and decides
/// ties when a message mentions more than one destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub key: String,
    pub name: String,
    pub famous_places: Vec<Place>,
    pub hidden_gems: Vec<Place>,
    pub restaurants: Vec<Restaurant>,
}

/// Tour package. `destination` holds the destination display name and is
/// matched by value; there is no foreign-key check against the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub destination: String,
    pub duration: String,
    pub price: u32,
    pub includes: Vec<String>,
}

/// The `GET /destinations` record shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationSummary {
    pub id: String,
    pub name: String,
    pub famous_count: usize,
    pub hidden_count: usize,
    pub restaurant_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub text: String,
}

/// Chat request as seen by the assistant. `history` is accepted for wire
/// compatibility and reserved for context-aware replies; no generator
/// reads it today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatInput {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    DestinationGuide,
    DestinationRestaurants,
    DestinationPackages,
    BudgetTips,
    AllPackages,
    RestaurantPrompt,
    HotelPrompt,
    BookingHelp,
    HelpMenu,
    DefaultMenu,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOutcome {
    pub response: String,
    pub intent: Intent,
    pub destination: Option<String>,
}
