//! POI recommendation engine
//!
//! Filters the catalog by budget, lounge access, opening hours and the time
//! the traveler can spare, then ranks what is left.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::estimates::{is_open, travel_time};
use crate::{AirportModel, Location, MAX_RECOMMENDATIONS, Minutes, Poi, PoiCategory, UserPreferences};

const DIETARY_MATCH_BONUS: f64 = 1000.0;
const MEAL_TYPE_MATCH_BONUS: f64 = 500.0;

/// A catalog POI together with the estimates computed for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedPoi<'a> {
    #[serde(flatten)]
    pub poi: &'a Poi,
    /// Walk from the traveler's location, in minutes
    pub travel_time: Minutes,
    /// Walk plus mean service time, in minutes
    pub total_time: f64,
    pub score: f64,
}

/// Ranked recommendations for a traveler standing at `location`.
///
/// With `available_minutes` set, POIs whose total time exceeds it are dropped.
/// Returns at most [`MAX_RECOMMENDATIONS`] entries, best first; equal scores
/// keep catalog order.
pub fn recommend_pois<'a>(
    model: &'a AirportModel,
    location: &Location,
    preferences: &UserPreferences,
    now: NaiveDateTime,
    available_minutes: Option<f64>,
) -> Vec<AnnotatedPoi<'a>> {
    let dietary: Vec<String> = preferences
        .dietary
        .iter()
        .map(|tag| tag.to_lowercase())
        .collect();
    let meal_tag = preferences.meal_type.map(|meal| meal.as_tag());

    let mut candidates: Vec<AnnotatedPoi<'a>> = model
        .pois
        .iter()
        .filter(|poi| poi.category != PoiCategory::Gate)
        .filter(|poi| {
            preferences
                .budget
                .is_none_or(|budget| poi.price_level <= budget)
        })
        .filter(|poi| {
            (preferences.lounge_access && poi.category == PoiCategory::Lounge)
                || is_open(poi, now)
        })
        .map(|poi| {
            let travel_time = travel_time(location, &poi.location(), preferences.mobility);
            AnnotatedPoi {
                poi,
                travel_time,
                total_time: f64::from(travel_time) + poi.service_time(),
                score: 0.0,
            }
        })
        .filter(|candidate| available_minutes.is_none_or(|limit| candidate.total_time <= limit))
        .map(|mut candidate| {
            candidate.score = score(&candidate, &dietary, meal_tag);
            candidate
        })
        .collect();

    // sort_by is stable, ties keep catalog order
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(MAX_RECOMMENDATIONS);
    candidates
}

fn score(candidate: &AnnotatedPoi<'_>, dietary: &[String], meal_tag: Option<&str>) -> f64 {
    let poi = candidate.poi;
    let mut score = 0.0;
    if dietary.iter().any(|tag| poi.has_tag(tag)) {
        score += DIETARY_MATCH_BONUS;
    }
    if meal_tag.is_some_and(|tag| poi.has_tag(tag)) {
        score += MEAL_TYPE_MATCH_BONUS;
    }
    score - candidate.total_time
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::MealType;

    fn poi(id: &str, category: &str, x: f64, hours: &str, price: u8, tags: &[&str]) -> serde_json::Value {
        json!({
            "id": id,
            "name": id,
            "category": category,
            "terminal": "T1",
            "zone": "t1-departures",
            "x": x,
            "y": 0.0,
            "openingHours": hours,
            "avgWaitTime": [2, 4],
            "priceLevel": price,
            "tags": tags
        })
    }

    fn model() -> AirportModel {
        let data = json!({
            "pois": [
                poi("near-cafe", "cafe", 10.0, "24/7", 1, &["coffee"]),
                poi("far-cafe", "cafe", 200.0, "24/7", 1, &["coffee", "vegan"]),
                poi("pricey", "restaurant", 20.0, "24/7", 3, &["quick-bite"]),
                poi("night-bar", "bar", 15.0, "18:00-23:00", 2, &[]),
                poi("lounge", "lounge", 30.0, "18:00-23:00", 3, &[]),
                poi("A1", "gate", 5.0, "24/7", 0, &[]),
            ],
            "zones": [],
            "navGraph": {"nodes": [], "edges": [], "poiLinks": []}
        });
        AirportModel::from_json_str(&data.to_string()).unwrap()
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn ids(recs: &[AnnotatedPoi<'_>]) -> Vec<String> {
        recs.iter().map(|r| r.poi.id.clone()).collect()
    }

    #[test]
    fn test_ranks_by_total_time_and_skips_closed() {
        let model = model();
        let here = Location::new(0.0, 0.0, "T1");
        let recs = recommend_pois(&model, &here, &UserPreferences::default(), noon(), None);

        assert_eq!(ids(&recs), ["near-cafe", "pricey", "far-cafe"]);
        assert_eq!(recs[0].travel_time, 1);
        assert!((recs[0].total_time - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_budget_and_lounge_access() {
        let model = model();
        let here = Location::new(0.0, 0.0, "T1");
        let prefs = UserPreferences {
            budget: Some(1),
            lounge_access: true,
            ..UserPreferences::default()
        };
        let recs = recommend_pois(&model, &here, &prefs, noon(), None);
        assert_eq!(ids(&recs), ["near-cafe", "far-cafe"]);

        let prefs = UserPreferences {
            lounge_access: true,
            ..UserPreferences::default()
        };
        let recs = recommend_pois(&model, &here, &prefs, noon(), None);
        assert!(ids(&recs).contains(&"lounge".to_string()));
    }

    #[test]
    fn test_dietary_and_meal_type_boost() {
        let model = model();
        let here = Location::new(0.0, 0.0, "T1");
        let prefs = UserPreferences {
            dietary: vec!["Vegan".to_string()],
            meal_type: Some(MealType::QuickBite),
            ..UserPreferences::default()
        };
        let recs = recommend_pois(&model, &here, &prefs, noon(), None);
        assert_eq!(ids(&recs), ["far-cafe", "pricey", "near-cafe"]);
        assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_time_budget_filters() {
        let model = model();
        let here = Location::new(0.0, 0.0, "T1");
        let recs = recommend_pois(&model, &here, &UserPreferences::default(), noon(), Some(5.0));
        assert!(recs.iter().all(|r| r.total_time <= 5.0));
        assert_eq!(ids(&recs), ["near-cafe", "pricey"]);
    }

    #[test]
    fn test_results_are_capped() {
        let pois: Vec<serde_json::Value> = (0..25)
            .map(|i| poi(&format!("cafe-{i}"), "cafe", f64::from(i) * 10.0, "24/7", 1, &[]))
            .collect();
        let data = json!({
            "pois": pois,
            "zones": [],
            "navGraph": {"nodes": [], "edges": [], "poiLinks": []}
        });
        let model = AirportModel::from_json_str(&data.to_string()).unwrap();
        let here = Location::new(0.0, 0.0, "T1");
        let recs = recommend_pois(&model, &here, &UserPreferences::default(), noon(), None);

        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert!(recs.windows(2).all(|w| w[0].total_time <= w[1].total_time));
        let expected: Vec<String> = (0..20).map(|i| format!("cafe-{i}")).collect();
        assert_eq!(ids(&recs), expected);
    }
}
