use approx::assert_relative_eq;
use wayfinder_core::prelude::*;

const AIRPORT_JSON: &str = include_str!("../data/airport.json");

fn model() -> AirportModel {
    AirportModel::from_json_str(AIRPORT_JSON).expect("bundled airport data is valid")
}

fn stop_names(route: &RoutingResult) -> Vec<String> {
    route
        .stops
        .iter()
        .map(|stop| stop.poi_id.clone().unwrap_or_else(|| stop.name.clone()))
        .collect()
}

fn assert_consistent(route: &RoutingResult) {
    assert_eq!(route.segments.len() + 1, route.stops.len());
    assert_eq!(route.polyline.len(), route.stops.len());

    let segment_sum: f64 = route.segments.iter().map(|segment| segment.distance).sum();
    assert_relative_eq!(segment_sum, route.total_distance, epsilon = 1e-9);

    for (segment, pair) in route.segments.iter().zip(route.polyline.windows(2)) {
        assert_eq!(segment.polyline, pair);
    }
    for pair in route.segments.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
    // Edge weights never undercut straight-line lengths
    assert!(route.total_cost + 1e-9 >= route.total_distance);
}

#[test]
fn test_direct_route_between_piers() {
    let model = model();
    let route = compute_route(&model, "A1", "B10", "");

    assert_eq!(
        stop_names(&route),
        ["A1", "Pier A walkway", "T1 airside plaza", "Pier B walkway", "B10"]
    );
    assert_relative_eq!(route.total_cost, 150.0);
    assert_eq!(route.stops[0].kind, StopKind::Gate);
    assert_eq!(route.stops[2].kind, StopKind::Corridor);
    assert!(route.preferences.visited.is_empty());
    assert_consistent(&route);
}

#[test]
fn test_route_through_restroom() {
    let model = model();
    let route = compute_route(&model, "A1", "B10", "Where is the nearest toilet?");

    assert_eq!(route.preferences.visited, ["t1-wc-hall"]);
    assert_relative_eq!(route.total_cost, 304.0);
    assert!(stop_names(&route).contains(&"t1-wc-hall".to_string()));
    assert_consistent(&route);
}

#[test]
fn test_optional_stops_are_capped() {
    let model = model();
    let route = compute_route(&model, "A1", "B10", "bathroom, coffee and something to eat");

    assert_eq!(route.preferences.visited, ["t1-wc-hall", "t1-cafe-nordic"]);
    assert_eq!(route.preferences.skipped, ["t1-rest-brasserie"]);
    assert_consistent(&route);
}

#[test]
fn test_cross_terminal_route() {
    let model = model();
    let route = compute_route(&model, "A1", "D8", "");

    assert_eq!(route.stops.first().and_then(|s| s.poi_id.as_deref()), Some("A1"));
    assert_eq!(route.stops.last().and_then(|s| s.poi_id.as_deref()), Some("D8"));
    assert!(stop_names(&route).contains(&"T1-T2 skybridge".to_string()));
    assert!(stop_names(&route).contains(&"T2-T3 skybridge".to_string()));
    assert_consistent(&route);
}

#[test]
fn test_same_gate_route() {
    let model = model();
    let route = compute_route(&model, "C3", "C3", "");
    assert_eq!(stop_names(&route), ["C3"]);
    assert!(route.segments.is_empty());
    assert_relative_eq!(route.total_cost, 0.0);
}

#[test]
fn test_unknown_gate_gives_empty_route() {
    let model = model();
    let route = compute_route(&model, "A1", "Z42", "coffee");
    assert!(route.is_empty());
    assert_relative_eq!(route.total_cost, 0.0);
    assert_relative_eq!(route.total_distance, 0.0);
}

#[test]
fn test_route_geojson_export() {
    let model = model();
    let route = compute_route(&model, "A1", "B10", "toilet");
    let collection = route.to_geojson().unwrap();

    let poi_stops = route
        .stops
        .iter()
        .filter(|stop| stop.kind != StopKind::Corridor)
        .count();
    assert_eq!(collection.features.len(), route.segments.len() + poi_stops);
}

#[test]
fn test_route_serializes_camel_case() {
    let model = model();
    let route = compute_route(&model, "A1", "B10", "");
    let value = serde_json::to_value(&route).unwrap();
    assert!(value.get("totalDistance").is_some());
    assert_eq!(value["stops"][0]["type"], "gate");
    assert_eq!(value["stops"][0]["poiId"], "A1");
    assert!(value["stops"][1].get("poiId").is_none());
}
