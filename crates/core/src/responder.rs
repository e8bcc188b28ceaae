use std::fmt::Write as _;

use crate::knowledge::KnowledgeBase;
use crate::models::{Destination, Intent};

/// Renders a price as `₹` with digit grouping, or the literal `Free`
/// when the amount is exactly 0.
pub fn format_price(amount: u32) -> String {
    if amount == 0 {
        return "Free".to_string();
    }
    format!("₹{}", group_thousands(amount))
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Total dispatch from intent to rendered text. A destination intent
/// without a destination cannot happen through the classifier; it still
/// renders the default menu rather than failing.
pub fn respond(kb: &KnowledgeBase, intent: Intent, destination: Option<&Destination>) -> String {
    match (intent, destination) {
        (Intent::Greeting, _) => greeting().to_string(),
        (Intent::DestinationGuide, Some(dest)) => destination_guide(dest),
        (Intent::DestinationRestaurants, Some(dest)) => restaurants_info(dest),
        (Intent::DestinationPackages, Some(dest)) => packages_info(kb, Some(dest)),
        (Intent::BudgetTips, _) => budget_tips().to_string(),
        (Intent::AllPackages, _) => packages_info(kb, None),
        (Intent::RestaurantPrompt, _) => restaurant_prompt().to_string(),
        (Intent::HotelPrompt, _) => hotel_prompt().to_string(),
        (Intent::BookingHelp, _) => booking_help().to_string(),
        (Intent::HelpMenu, _) => help_menu().to_string(),
        _ => default_menu().to_string(),
    }
}

pub fn destination_guide(dest: &Destination) -> String {
    let mut response = format!("🌟 **{} Travel Guide**\n\n", dest.name);

    response.push_str("**Famous Places:**\n");
    for place in &dest.famous_places {
        let _ = writeln!(
            response,
            "• **{}** - {} ({})",
            place.name,
            place.description,
            format_price(place.price)
        );
    }

    response.push_str("\n**Hidden Gems:**\n");
    for place in &dest.hidden_gems {
        let _ = writeln!(
            response,
            "• **{}** - {} ({})",
            place.name,
            place.description,
            format_price(place.price)
        );
    }

    response.push_str("\n**Best Restaurants:**\n");
    for restaurant in &dest.restaurants {
        let _ = writeln!(
            response,
            "• **{}** - {} ({})",
            restaurant.name, restaurant.cuisine, restaurant.price_range
        );
    }

    response.push_str("\n💡 Would you like to know more about any specific place or need help booking?");
    response
}

pub fn restaurants_info(dest: &Destination) -> String {
    let mut response = format!("🍽️ **Best Restaurants in {}**\n\n", dest.name);

    for restaurant in &dest.restaurants {
        let _ = write!(
            response,
            "**{}**\nCuisine: {}\nPrice Range: {}\n\n",
            restaurant.name, restaurant.cuisine, restaurant.price_range
        );
    }

    response.push_str("Would you like reservations or more details about any restaurant?");
    response
}

pub fn packages_info(kb: &KnowledgeBase, destination: Option<&Destination>) -> String {
    let mut response = String::from("📦 **Available Travel Packages**\n\n");

    let packages = kb.packages_for(destination.map(|dest| dest.name.as_str()));
    for pkg in packages {
        let _ = write!(
            response,
            "**{}**\nDuration: {}\nPrice: ₹{} per person\nIncludes: {}\n\n",
            pkg.name,
            pkg.duration,
            group_thousands(pkg.price),
            pkg.includes.join(", ")
        );
    }

    response.push_str("💰 All packages include best price guarantee!\nInterested in booking?");
    response
}

pub fn greeting() -> &'static str {
    "Hello! 👋 I'm your WanderPeak travel assistant. I can help you discover amazing destinations, find the best restaurants, plan your itinerary, and book your dream vacation. What would you like to explore today?"
}

pub fn budget_tips() -> &'static str {
    "💰 **Smart Budget Travel Tips**\n\n\
**Booking Strategy:**\n\
• Book flights 2-3 months in advance\n\
• Travel during shoulder season (cheaper & less crowded)\n\
• Compare prices across multiple platforms\n\
• Sign up for price alerts\n\n\
**Accommodation:**\n\
• Consider guesthouses over hotels\n\
• Book directly with properties\n\
• Look for package deals\n\
• Stay slightly outside tourist areas\n\n\
**Transportation:**\n\
• Use local public transport\n\
• Walk when possible\n\
• Book airport transfers in advance\n\
• Consider city passes\n\n\
**Food & Dining:**\n\
• Eat at local restaurants\n\
• Try street food (where safe)\n\
• Have main meal at lunch (cheaper)\n\
• Stay at places with breakfast included\n\n\
**Activities:**\n\
• Free walking tours\n\
• Visit during free admission days\n\
• Book combo tickets\n\
• Use city discount cards\n\n\
💡 Our budget packages start from ₹30,000!\n\
Which destination interests you?"
}

pub fn restaurant_prompt() -> &'static str {
    "🍽️ **Restaurant Recommendations**\n\n\
I can help you find amazing dining experiences!\n\n\
Please tell me:\n\
• Which destination? (Japan, India, Dubai, Paris, Maldives)\n\
• Cuisine preference?\n\
• Budget range?\n\
• Special dietary requirements?\n\n\
I'll provide personalized recommendations with price comparisons!"
}

pub fn hotel_prompt() -> &'static str {
    "🏨 **Hotel & Accommodation Help**\n\n\
I'll help you find the perfect place to stay!\n\n\
Let me know:\n\
• Destination?\n\
• Check-in and check-out dates?\n\
• Number of guests?\n\
• Budget per night?\n\
• Preferred hotel type (luxury/boutique/budget)?\n\n\
I can also show price comparisons across Agoda, Booking.com, and Expedia!"
}

pub fn booking_help() -> &'static str {
    "📅 **Ready to Book Your Adventure?**\n\n\
Great choice! Here's how we can help:\n\n\
1. **Choose Your Destination** - Where do you want to go?\n\
2. **Select Dates** - When are you planning to travel?\n\
3. **Pick Your Package** - Or customize your own itinerary\n\
4. **Review & Confirm** - Get best price guarantee\n\n\
You can:\n\
• Use our search form on the homepage\n\
• Tell me your preferences here\n\
• Call us at +91 98765 43210\n\
• Email: hello@wanderpeak.com\n\n\
What destination interests you?"
}

pub fn help_menu() -> &'static str {
    "🌍 **How I Can Help You**\n\n\
I'm your personal travel assistant! I can:\n\n\
✈️ **Destinations**\n\
• Recommend places to visit\n\
• Share hidden gems\n\
• Provide local insights\n\n\
🍽️ **Dining**\n\
• Best restaurants\n\
• Local cuisine guides\n\
• Price ranges\n\n\
🏨 **Accommodation**\n\
• Hotel recommendations\n\
• Price comparisons\n\
• Booking assistance\n\n\
📦 **Packages**\n\
• Complete tour packages\n\
• Custom itineraries\n\
• Best deals\n\n\
💰 **Budget Tips**\n\
• Money-saving strategies\n\
• Best value options\n\
• Travel hacks\n\n\
What would you like to know?"
}

pub fn default_menu() -> &'static str {
    "I'm here to help you plan the perfect trip! 🌟\n\n\
I can assist with:\n\
• **Destinations** - Japan, India, Dubai, Paris, Maldives\n\
• **Famous Places** - Must-see attractions\n\
• **Hidden Gems** - Local favorites\n\
• **Restaurants** - Best dining spots\n\
• **Hotels** - Accommodation options\n\
• **Packages** - Complete tour deals\n\
• **Budget Tips** - Travel smart\n\n\
Try asking:\n\
• \"Best places in Japan\"\n\
• \"Budget travel tips\"\n\
• \"Show me Dubai restaurants\"\n\
• \"What packages do you have?\"\n\n\
What interests you?"
}
