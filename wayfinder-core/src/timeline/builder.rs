use chrono::NaiveDateTime;
use log::debug;

use super::status::annotate_risk;
use super::{StepKind, StepStatus, TimelineStep, minutes_delta};
use crate::algo::estimates::{Checkpoint, queue_time, travel_time};
use crate::model::terminal_zone_id;
use crate::{AirportModel, Location, Poi, TripDetails, UserPreferences};

/// Running clock and position of the forward sweep
struct Sweep<'a> {
    trip: &'a TripDetails,
    preferences: &'a UserPreferences,
    clock: NaiveDateTime,
    location: Location,
    steps: Vec<TimelineStep>,
}

impl Sweep<'_> {
    /// Walks to `target`, spends `duration` minutes there and records the step
    fn visit(&mut self, target: Location, duration: f64, step: PendingStep) {
        let travel_time = travel_time(&self.location, &target, self.preferences.mobility);
        let start_time = self.clock;
        let Some(end_time) =
            start_time.checked_add_signed(minutes_delta(f64::from(travel_time) + duration))
        else {
            debug!("{} would end past the calendar range, omitting it", step.name);
            return;
        };

        self.steps.push(TimelineStep {
            id: step.id,
            kind: step.kind,
            name: step.name,
            location: step.location,
            start_time,
            duration,
            travel_time,
            status: StepStatus::Safe,
            description: step.description,
        });

        self.clock = end_time;
        self.location = target;
    }

    /// Queue step at a terminal checkpoint zone; omitted when the zone is unknown
    fn checkpoint(&mut self, model: &AirportModel, checkpoint: Checkpoint) {
        // The step id doubles as the zone suffix
        let (id, name, blurb) = match checkpoint {
            Checkpoint::Baggage => ("baggage", "Baggage Claim", "Collect your luggage"),
            Checkpoint::Passport => ("passport", "Passport Control", "Immigration checkpoint"),
            Checkpoint::Security => ("security", "Security Checkpoint", "Security screening"),
        };

        let zone_id = terminal_zone_id(&self.trip.terminal, id);
        let Some(target) = model.zone_location(&zone_id) else {
            debug!("Zone {zone_id} not found, omitting {name} from the timeline");
            return;
        };

        let queue = queue_time(
            self.clock,
            &self.trip.terminal,
            checkpoint,
            self.trip.is_domestic,
        );
        self.visit(
            target,
            f64::from(queue),
            PendingStep {
                id: id.to_string(),
                kind: StepKind::Checkpoint,
                name: name.to_string(),
                location: zone_id,
                description: format!("{blurb}. Estimated wait: {queue} min"),
            },
        );
    }
}

struct PendingStep {
    id: String,
    kind: StepKind,
    name: String,
    location: String,
    description: String,
}

/// Builds the itinerary from arrival to the departure gate.
///
/// The sweep starts at the terminal's arrivals zone at `trip.arrival_time`:
/// baggage claim (with baggage), passport control (international trips), the
/// selected POIs in the given order, then security and the departure gate when
/// an onward flight exists. Steps whose zone or gate cannot be resolved are
/// left out. With an onward flight every step is then classified against the
/// boarding deadline; without one all steps stay [`StepStatus::Safe`].
pub fn build_timeline(
    model: &AirportModel,
    trip: &TripDetails,
    preferences: &UserPreferences,
    selected_pois: &[&Poi],
) -> Vec<TimelineStep> {
    let mut sweep = Sweep {
        trip,
        preferences,
        clock: trip.arrival_time,
        location: model.arrival_location(&trip.terminal),
        steps: Vec::new(),
    };

    if trip.has_baggage {
        sweep.checkpoint(model, Checkpoint::Baggage);
    }
    if !trip.is_domestic {
        sweep.checkpoint(model, Checkpoint::Passport);
    }

    for (index, poi) in selected_pois.iter().enumerate() {
        sweep.visit(
            poi.location(),
            poi.service_time(),
            PendingStep {
                id: format!("poi-{index}"),
                kind: StepKind::Poi,
                name: poi.name.clone(),
                location: poi.zone.clone(),
                description: poi.description.clone(),
            },
        );
    }

    if let Some(boarding) = trip.boarding_deadline() {
        sweep.checkpoint(model, Checkpoint::Security);

        if let Some(code) = trip.departure_gate.as_deref() {
            match model.gate_location(code) {
                Some(target) => sweep.visit(
                    target,
                    0.0,
                    PendingStep {
                        id: "gate".to_string(),
                        kind: StepKind::Gate,
                        name: format!("Gate {code}"),
                        location: code.to_string(),
                        description: format!(
                            "Arrive at gate. Boarding starts at {}",
                            boarding.format("%H:%M")
                        ),
                    },
                ),
                None => debug!("Gate {code} could not be resolved, omitting the gate step"),
            }
        }

        annotate_risk(&mut sweep.steps, boarding);
    }

    sweep.steps
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};
    use serde_json::json;

    use super::*;

    fn zone(id: &str, x: f64) -> serde_json::Value {
        json!({"id": id, "terminal": "T1", "name": id, "x": x, "y": 0.0})
    }

    fn model() -> AirportModel {
        let data = json!({
            "pois": [{
                "id": "cafe",
                "name": "Cafe",
                "category": "cafe",
                "terminal": "T1",
                "zone": "t1-departures",
                "x": 200.0,
                "y": 0.0,
                "openingHours": "24/7",
                "avgWaitTime": [4, 6],
                "priceLevel": 1,
                "description": "Coffee"
            }],
            "zones": [
                zone("t1-arrivals", 0.0),
                zone("t1-baggage", 40.0),
                zone("t1-passport", 80.0),
                zone("t1-security", 120.0),
                zone("t1-gates-a", 300.0)
            ],
            "navGraph": {"nodes": [], "edges": [], "poiLinks": []}
        });
        AirportModel::from_json_str(&data.to_string()).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 2)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn trip() -> TripDetails {
        TripDetails {
            arrival_time: at(12, 0),
            terminal: "T1".to_string(),
            arriving_gate: None,
            is_domestic: false,
            has_baggage: true,
            next_flight_time: Some(at(16, 0)),
            departure_gate: Some("A3".to_string()),
            is_connecting: Some(true),
        }
    }

    #[test]
    fn test_full_sequence() {
        let model = model();
        let cafe = model.poi("cafe").unwrap();
        let steps = build_timeline(&model, &trip(), &UserPreferences::default(), &[cafe]);

        let ids: Vec<&str> = steps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["baggage", "passport", "poi-0", "security", "gate"]);

        // arrivals -> baggage: 80 m, 2 min; off-peak baggage queue 15 min
        assert_eq!(steps[0].travel_time, 2);
        assert!((steps[0].duration - 15.0).abs() < f64::EPSILON);
        assert_eq!(steps[1].start_time, at(12, 17));
        assert_eq!(steps[2].location, "t1-departures");
        assert!((steps[2].duration - 5.0).abs() < f64::EPSILON);

        let gate = &steps[4];
        assert_eq!(gate.kind, StepKind::Gate);
        assert_eq!(gate.location, "A3");
        assert!(gate.duration.abs() < f64::EPSILON);
        assert_eq!(gate.description, "Arrive at gate. Boarding starts at 15:30");
        assert!(steps.iter().all(|s| s.status == StepStatus::Safe));
    }

    #[test]
    fn test_start_times_follow_previous_step() {
        let model = model();
        let cafe = model.poi("cafe").unwrap();
        let steps = build_timeline(&model, &trip(), &UserPreferences::default(), &[cafe]);
        for pair in steps.windows(2) {
            assert_eq!(pair[1].start_time, pair[0].end_time());
        }
    }

    #[test]
    fn test_domestic_without_baggage_or_flight() {
        let model = model();
        let trip = TripDetails {
            is_domestic: true,
            has_baggage: false,
            next_flight_time: None,
            ..trip()
        };
        assert!(build_timeline(&model, &trip, &UserPreferences::default(), &[]).is_empty());
    }

    #[test]
    fn test_missing_zone_omits_step() {
        let model = model();
        let trip = TripDetails {
            terminal: "T4".to_string(),
            departure_gate: Some("Q1".to_string()),
            ..trip()
        };
        assert!(build_timeline(&model, &trip, &UserPreferences::default(), &[]).is_empty());
    }

    #[test]
    fn test_tight_connection_flags_risk() {
        let model = model();
        let trip = TripDetails {
            next_flight_time: Some(at(13, 10)),
            ..trip()
        };
        let steps = build_timeline(&model, &trip, &UserPreferences::default(), &[]);
        assert!(
            steps
                .iter()
                .any(|s| matches!(s.status, StepStatus::Risky | StepStatus::Tight))
        );
        assert_eq!(steps.last().map(|s| s.status), Some(StepStatus::Risky));
    }

    #[test]
    fn test_steps_past_calendar_end_are_omitted() {
        let model = model();
        let cafe = model.poi("cafe").unwrap();
        let trip = TripDetails {
            arrival_time: NaiveDateTime::MAX - TimeDelta::minutes(1),
            next_flight_time: None,
            ..trip()
        };
        let steps = build_timeline(&model, &trip, &UserPreferences::default(), &[cafe]);
        assert!(steps.is_empty());
    }
}
