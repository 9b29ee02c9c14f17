//! Per-traveler inputs: trip facts and preferences
//!
//! Both are built once when onboarding completes and replaced wholesale when
//! the traveler changes anything.

use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::{BOARDING_LEAD_MINUTES, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobilityMode {
    #[default]
    Normal,
    Reduced,
}

impl MobilityMode {
    /// Walking speed in meters per second
    pub fn walking_speed(self) -> f64 {
        match self {
            MobilityMode::Normal => 1.3,
            MobilityMode::Reduced => 0.8,
        }
    }
}

impl FromStr for MobilityMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(MobilityMode::Normal),
            "reduced" => Ok(MobilityMode::Reduced),
            other => Err(Error::InvalidData(format!("Unknown mobility mode: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealType {
    QuickBite,
    SitDown,
}

impl MealType {
    /// Catalog tag marking POIs that suit this meal type
    pub fn as_tag(self) -> &'static str {
        match self {
            MealType::QuickBite => "quick-bite",
            MealType::SitDown => "sit-down",
        }
    }
}

impl FromStr for MealType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick-bite" => Ok(MealType::QuickBite),
            "sit-down" => Ok(MealType::SitDown),
            other => Err(Error::InvalidData(format!("Unknown meal type: {other}"))),
        }
    }
}

/// Facts about the traveler's arrival and onward flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub arrival_time: NaiveDateTime,
    pub terminal: String,
    #[serde(default)]
    pub arriving_gate: Option<String>,
    pub is_domestic: bool,
    #[serde(default)]
    pub has_baggage: bool,
    #[serde(default)]
    pub next_flight_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub departure_gate: Option<String>,
    /// `Some(false)` means the traveler has no onward flight, whatever
    /// `next_flight_time` says
    #[serde(default)]
    pub is_connecting: Option<bool>,
}

impl TripDetails {
    /// Departure time of the onward flight, if there is one
    pub fn connecting_flight_time(&self) -> Option<NaiveDateTime> {
        match self.is_connecting {
            Some(false) => None,
            _ => self.next_flight_time,
        }
    }

    pub fn boarding_deadline(&self) -> Option<NaiveDateTime> {
        self.connecting_flight_time()
            .and_then(|departure| {
                departure.checked_sub_signed(TimeDelta::minutes(BOARDING_LEAD_MINUTES))
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Highest acceptable price level (1-3); no limit when absent
    #[serde(default)]
    pub budget: Option<u8>,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub mobility: MobilityMode,
    #[serde(default)]
    pub lounge_access: bool,
    /// Free-text wishes ("need a coffee and a restroom")
    #[serde(default)]
    pub free_text: Option<String>,
}

impl UserPreferences {
    /// Free-text preference, `None` when blank
    pub fn preference_text(&self) -> Option<&str> {
        self.free_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 31)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn trip() -> TripDetails {
        TripDetails {
            arrival_time: at(10, 0),
            terminal: "T1".to_string(),
            arriving_gate: None,
            is_domestic: true,
            has_baggage: false,
            next_flight_time: Some(at(14, 0)),
            departure_gate: None,
            is_connecting: None,
        }
    }

    #[test]
    fn test_boarding_deadline() {
        assert_eq!(trip().boarding_deadline(), Some(at(13, 30)));
    }

    #[test]
    fn test_boarding_deadline_before_calendar_start() {
        let trip = TripDetails {
            next_flight_time: Some(NaiveDateTime::MIN),
            ..trip()
        };
        assert_eq!(trip.boarding_deadline(), None);
    }

    #[test]
    fn test_not_connecting_drops_flight() {
        let trip = TripDetails {
            is_connecting: Some(false),
            ..trip()
        };
        assert_eq!(trip.connecting_flight_time(), None);
        assert_eq!(trip.boarding_deadline(), None);
    }

    #[test]
    fn test_trip_details_from_json() {
        let trip: TripDetails = serde_json::from_str(
            r#"{
                "arrivalTime": "2026-01-31T10:00:00",
                "terminal": "T1",
                "isDomestic": false,
                "hasBaggage": true,
                "nextFlightTime": "2026-01-31T14:00:00",
                "departureGate": "B10"
            }"#,
        )
        .unwrap();
        assert!(trip.has_baggage);
        assert_eq!(trip.departure_gate.as_deref(), Some("B10"));
        assert_eq!(trip.arriving_gate, None);
    }

    #[test]
    fn test_preferences_defaults() {
        let prefs: UserPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, UserPreferences::default());
        assert_eq!(prefs.mobility, MobilityMode::Normal);

        let prefs: UserPreferences =
            serde_json::from_str(r#"{"mealType": "quick-bite", "freeText": "   "}"#).unwrap();
        assert_eq!(prefs.meal_type, Some(MealType::QuickBite));
        assert_eq!(prefs.preference_text(), None);
    }
}
