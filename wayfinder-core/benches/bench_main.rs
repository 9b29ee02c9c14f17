use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use wayfinder_core::prelude::*;

const AIRPORT_JSON: &str = include_str!("../data/airport.json");

fn bench_routing(c: &mut Criterion) {
    let model = AirportModel::from_json_str(AIRPORT_JSON).expect("bundled airport data is valid");

    c.bench_function("route_direct_cross_terminal", |b| {
        b.iter(|| compute_route(&model, black_box("A1"), black_box("D8"), ""));
    });

    c.bench_function("route_with_preference_stops", |b| {
        b.iter(|| {
            compute_route(
                &model,
                black_box("A1"),
                black_box("C20"),
                black_box("toilet, coffee and some shopping"),
            )
        });
    });
}

fn bench_planning(c: &mut Criterion) {
    let model = AirportModel::from_json_str(AIRPORT_JSON).expect("bundled airport data is valid");
    let day = NaiveDate::from_ymd_opt(2026, 6, 12).expect("valid date");
    let now = day.and_hms_opt(7, 45, 0).expect("valid time");

    let trip = TripDetails {
        arrival_time: now,
        terminal: "T2".to_string(),
        arriving_gate: Some("C3".to_string()),
        is_domestic: false,
        has_baggage: true,
        next_flight_time: day.and_hms_opt(11, 0, 0),
        departure_gate: Some("D2".to_string()),
        is_connecting: Some(true),
    };
    let preferences = UserPreferences {
        dietary: vec!["vegetarian".to_string()],
        free_text: Some("coffee please".to_string()),
        ..UserPreferences::default()
    };

    c.bench_function("recommend_pois", |b| {
        let here = model.arrival_location("T2");
        b.iter(|| recommend_pois(&model, &here, black_box(&preferences), now, Some(90.0)));
    });

    c.bench_function("build_timeline", |b| {
        let picks: Vec<&Poi> = ["t2-cafe-bean", "t2-pharmacy"]
            .iter()
            .filter_map(|id| model.poi(id))
            .collect();
        b.iter(|| build_timeline(&model, black_box(&trip), &preferences, &picks));
    });

    c.bench_function("plan_trip", |b| {
        let request = PlanRequest {
            trip: trip.clone(),
            preferences: preferences.clone(),
        };
        b.iter(|| plan_trip(&model, black_box(&request), now));
    });
}

criterion_group!(benches, bench_routing, bench_planning);
criterion_main!(benches);
