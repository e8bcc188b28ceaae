use crate::models::{Destination, DestinationSummary, Package, Place, Restaurant};

/// Immutable knowledge store. Built once at startup and shared by
/// reference; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    destinations: Vec<Destination>,
    packages: Vec<Package>,
}

impl KnowledgeBase {
    pub fn new(destinations: Vec<Destination>, packages: Vec<Package>) -> Self {
        Self {
            destinations,
            packages,
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn find(&self, key: &str) -> Option<&Destination> {
        self.destinations.iter().find(|dest| dest.key == key)
    }

    /// First destination (table order) whose key or lowercased display
    /// name appears anywhere in the message. Substring match only, no
    /// word boundaries: "japanese" matches "japan".
    pub fn extract_destination(&self, message: &str) -> Option<&Destination> {
        let lower = message.to_lowercase();
        self.destinations
            .iter()
            .find(|dest| lower.contains(&dest.key) || lower.contains(&dest.name.to_lowercase()))
    }

    pub fn summaries(&self) -> Vec<DestinationSummary> {
        self.destinations
            .iter()
            .map(|dest| DestinationSummary {
                id: dest.key.clone(),
                name: dest.name.clone(),
                famous_count: dest.famous_places.len(),
                hidden_count: dest.hidden_gems.len(),
                restaurant_count: dest.restaurants.len(),
            })
            .collect()
    }

    /// All packages, or only those whose destination field equals the
    /// given display name. Matched by value, not by key.
    pub fn packages_for(&self, destination_name: Option<&str>) -> Vec<&Package> {
        self.packages
            .iter()
            .filter(|pkg| destination_name.map_or(true, |name| pkg.destination == name))
            .collect()
    }

    /// The built-in WanderPeak dataset: five destinations, five packages.
    pub fn builtin() -> Self {
        let destinations = vec![
            destination(
                "japan",
                "Japan",
                vec![
                    place("Mount Fuji", "Iconic volcano and UNESCO World Heritage site", 8500),
                    place("Tokyo Tower", "Communications tower with panoramic city views", 1200),
                    place("Senso-ji Temple", "Tokyo's oldest temple with vibrant atmosphere", 0),
                ],
                vec![
                    place("Shirakawa-go Village", "UNESCO village with traditional farmhouses", 3500),
                    place("Hakone Museum", "Open-air museum with mountain scenery", 1800),
                    place("Nara Deer Park", "Over 1,000 friendly deer roam freely", 0),
                ],
                vec![
                    restaurant("Ichiran Ramen", "Ramen", "₹800-₹1,500"),
                    restaurant("Sushi Dai", "Sushi", "₹3,000-₹5,000"),
                    restaurant("Dotonbori Street Food", "Street Food", "₹300-₹800"),
                ],
            ),
            destination(
                "india",
                "India",
                vec![
                    place("Taj Mahal", "Symbol of eternal love", 1050),
                    place("Jaipur City Palace", "Royal heritage and architecture", 700),
                    place("Kerala Backwaters", "Serene waterways and houseboat cruises", 5000),
                ],
                vec![
                    place("Hampi", "Ancient ruins and boulder landscapes", 500),
                    place("Spiti Valley", "Remote Himalayan paradise", 2000),
                    place("Gokarna", "Peaceful beaches and temples", 300),
                ],
                vec![
                    restaurant("Karim's", "Mughlai", "₹500-₹1,200"),
                    restaurant("MTR", "South Indian", "₹200-₹500"),
                    restaurant("Olive Bar & Kitchen", "Mediterranean", "₹1,500-₹3,000"),
                ],
            ),
            destination(
                "dubai",
                "Dubai",
                vec![
                    place("Burj Khalifa", "World's tallest building", 3500),
                    place("Dubai Mall", "Shopping and entertainment paradise", 0),
                    place("Palm Jumeirah", "Iconic man-made island", 2000),
                ],
                vec![
                    place("Al Fahidi Historic District", "Traditional architecture and culture", 200),
                    place("Dubai Marina Walk", "Waterfront promenade", 0),
                    place("Miracle Garden", "World's largest flower garden", 250),
                ],
                vec![
                    restaurant("At.mosphere", "Fine Dining", "₹8,000-₹15,000"),
                    restaurant("Pierchic", "Seafood", "₹6,000-₹12,000"),
                    restaurant("Al Hadheerah", "Arabic", "₹3,500-₹6,000"),
                ],
            ),
            destination(
                "paris",
                "Paris",
                vec![
                    place("Eiffel Tower", "Iconic iron lattice tower", 2500),
                    place("Louvre Museum", "World's largest art museum", 1700),
                    place("Notre-Dame Cathedral", "Gothic architectural masterpiece", 0),
                ],
                vec![
                    place("Montmartre", "Historic artist's quarter", 0),
                    place("Canal Saint-Martin", "Trendy waterfront area", 0),
                    place("Sainte-Chapelle", "Stunning stained glass chapel", 1100),
                ],
                vec![
                    restaurant("Le Jules Verne", "French Fine Dining", "₹15,000-₹25,000"),
                    restaurant("Café de Flore", "Café", "₹1,500-₹3,000"),
                    restaurant("Le Comptoir du Relais", "Bistro", "₹3,000-₹5,000"),
                ],
            ),
            destination(
                "maldives",
                "Maldives",
                vec![
                    place("Overwater Villas", "Luxury accommodations on water", 25000),
                    place("Maafushi Island", "Local island experience", 5000),
                    place("Banana Reef", "World-class diving spot", 7500),
                ],
                vec![
                    place("Thulusdhoo Island", "Surfing and local culture", 3000),
                    place("Fulhadhoo", "Pristine and untouched", 4000),
                    place("Hanifaru Bay", "Manta ray gathering spot", 6000),
                ],
                vec![
                    restaurant("Ithaa Undersea Restaurant", "European", "₹20,000-₹30,000"),
                    restaurant("Sea.Fire.Salt", "Seafood", "₹8,000-₹15,000"),
                    restaurant("Cafe del Mar", "International", "₹3,000-₹6,000"),
                ],
            ),
        ];

        let packages = vec![
            package(
                "Tokyo Complete Tour",
                "Japan",
                "7 Days / 6 Nights",
                95000,
                &["Flights", "Hotels", "Meals", "Guided Tours", "Local Transport"],
            ),
            package(
                "Golden Triangle India",
                "India",
                "6 Days / 5 Nights",
                55000,
                &["Flights", "Hotels", "Transport", "Guided Tours"],
            ),
            package(
                "Dubai Luxury Escape",
                "Dubai",
                "5 Days / 4 Nights",
                125000,
                &["Flights", "5-Star Hotel", "Desert Safari", "Burj Khalifa Tickets"],
            ),
            package(
                "Paris Romance Package",
                "Paris",
                "6 Days / 5 Nights",
                140000,
                &["Flights", "Boutique Hotel", "Seine Cruise", "Museum Passes"],
            ),
            package(
                "Maldives Paradise",
                "Maldives",
                "5 Days / 4 Nights",
                180000,
                &["Flights", "Water Villa", "All Meals", "Diving", "Spa"],
            ),
        ];

        Self::new(destinations, packages)
    }
}

fn destination(
    key: &str,
    name: &str,
    famous_places: Vec<Place>,
    hidden_gems: Vec<Place>,
    restaurants: Vec<Restaurant>,
) -> Destination {
    Destination {
        key: key.to_string(),
        name: name.to_string(),
        famous_places,
        hidden_gems,
        restaurants,
    }
}

fn place(name: &str, description: &str, price: u32) -> Place {
    Place {
        name: name.to_string(),
        description: description.to_string(),
        price,
    }
}

fn restaurant(name: &str, cuisine: &str, price_range: &str) -> Restaurant {
    Restaurant {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        price_range: price_range.to_string(),
    }
}

fn package(name: &str, dest: &str, duration: &str, price: u32, includes: &[&str]) -> Package {
    Package {
        name: name.to_string(),
        destination: dest.to_string(),
        duration: duration.to_string(),
        price,
        includes: includes.iter().map(ToString::to_string).collect(),
    }
}
