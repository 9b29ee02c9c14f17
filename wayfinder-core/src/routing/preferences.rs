use serde::{Deserialize, Serialize};

use crate::PoiCategory;

const RESTROOM_KEYWORDS: &[&str] = &["wc", "restroom", "bathroom", "toilet"];

/// Optional categories and the words that ask for them, in priority order
const OPTIONAL_KEYWORDS: &[(PoiCategory, &[&str])] = &[
    (PoiCategory::Cafe, &["cafe", "coffee", "drink"]),
    (PoiCategory::Shop, &["shop", "shopping", "buy"]),
    (PoiCategory::Restaurant, &["hungry", "eat", "food", "restaurant"]),
];

/// Stops requested through free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePreferences {
    /// Always routed through when reachable
    pub must_visit: Vec<PoiCategory>,
    /// Added while the stop count is below `max_stops`
    pub optional_visit: Vec<PoiCategory>,
    pub max_stops: usize,
    /// Advisory, detours are not checked against it
    pub max_detour_cost: f64,
}

impl Default for RoutePreferences {
    fn default() -> Self {
        Self {
            must_visit: Vec::new(),
            optional_visit: Vec::new(),
            max_stops: 2,
            max_detour_cost: 300.0,
        }
    }
}

impl RoutePreferences {
    pub fn is_empty(&self) -> bool {
        self.must_visit.is_empty() && self.optional_visit.is_empty()
    }
}

/// Case-insensitive substring scan of free text for stop keywords
pub fn parse_preferences(text: &str) -> RoutePreferences {
    let text = text.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|word| text.contains(word));

    let mut preferences = RoutePreferences::default();
    if mentions(RESTROOM_KEYWORDS) {
        preferences.must_visit.push(PoiCategory::Restroom);
    }
    preferences.optional_visit = OPTIONAL_KEYWORDS
        .iter()
        .filter(|(_, keywords)| mentions(keywords))
        .map(|&(category, _)| category)
        .collect();

    preferences
}
