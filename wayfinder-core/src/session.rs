//! Trip planning entry point used once onboarding completes
//!
//! Bundles recommendation, POI auto-selection, timeline and route into one
//! call over explicit inputs, so hosts keep no planning state of their own.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::algo::recommend::{AnnotatedPoi, recommend_pois};
use crate::routing::{RoutingResult, compute_route};
use crate::timeline::{TimelineStep, build_timeline, minutes_until_boarding};
use crate::{AirportModel, Poi, TripDetails, UserPreferences};

/// Number of recommendations folded into the timeline automatically
pub const AUTO_SELECT_LIMIT: usize = 2;

/// Minutes kept free before departure when auto-selecting POIs
pub const DEPARTURE_RESERVE_MINUTES: i64 = 60;

/// Time assumed available when the traveler has no onward flight
pub const DEFAULT_AVAILABLE_MINUTES: i64 = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub trip: TripDetails,
    #[serde(default)]
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan<'a> {
    pub recommendations: Vec<AnnotatedPoi<'a>>,
    /// Ids of the recommendations placed on the timeline
    pub selected: Vec<String>,
    pub timeline: Vec<TimelineStep>,
    /// Present when both the arriving and the departure gate are known
    pub route: Option<RoutingResult>,
    pub minutes_until_boarding: Option<i64>,
}

/// Plans the trip as of `now`.
///
/// Recommendations are ranked from the terminal's arrivals zone. Only when
/// the traveler typed a free-text wish are up to two of them put on the
/// timeline, and only those whose walk plus total time fits in the minutes
/// left before departure minus a one hour reserve. The timeline starts at
/// `now`, regardless of the arrival time in the request.
pub fn plan_trip<'a>(
    model: &'a AirportModel,
    request: &PlanRequest,
    now: NaiveDateTime,
) -> TripPlan<'a> {
    let trip = &request.trip;
    let preferences = &request.preferences;
    let flight = trip.connecting_flight_time();

    let origin = model.arrival_location(&trip.terminal);
    let recommendations = recommend_pois(model, &origin, preferences, now, None);

    let minutes_to_flight =
        flight.map_or(DEFAULT_AVAILABLE_MINUTES, |departure| (departure - now).num_minutes());
    let budget = minutes_to_flight - DEPARTURE_RESERVE_MINUTES;

    #[allow(clippy::cast_precision_loss)]
    let selected: Vec<&Poi> = match preferences.preference_text() {
        Some(_) => recommendations
            .iter()
            .filter(|rec| f64::from(rec.travel_time) + rec.total_time < budget as f64)
            .take(AUTO_SELECT_LIMIT)
            .map(|rec| rec.poi)
            .collect(),
        None => Vec::new(),
    };

    let trip_from_now = TripDetails {
        arrival_time: now,
        ..trip.clone()
    };
    let timeline = build_timeline(model, &trip_from_now, preferences, &selected);

    let route = trip
        .arriving_gate
        .as_deref()
        .zip(trip.departure_gate.as_deref())
        .map(|(from, to)| {
            compute_route(
                model,
                from,
                to,
                preferences.preference_text().unwrap_or_default(),
            )
        });

    TripPlan {
        recommendations,
        selected: selected.iter().map(|poi| poi.id.clone()).collect(),
        timeline,
        route,
        minutes_until_boarding: flight.map(|departure| minutes_until_boarding(departure, now)),
    }
}
