use geo::Point;
use log::debug;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use super::astar::astar_path;
use super::preferences::{RoutePreferences, parse_preferences};
use crate::algo::estimates::distance;
use crate::model::NodeKind;
use crate::{AirportModel, Poi, PoiCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Gate,
    Poi,
    Corridor,
}

/// A node on the route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub x: f64,
    pub y: f64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poi_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: StopKind,
}

impl RoutePoint {
    pub fn point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

/// One graph edge of the route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub from: RoutePoint,
    pub to: RoutePoint,
    /// Straight-line length
    pub distance: f64,
    pub polyline: Vec<[f64; 2]>,
}

/// Which requested POIs made it into the route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitReport {
    pub visited: Vec<String>,
    pub skipped: Vec<String>,
}

/// Output only: an infinite cost serializes to `null` and does not read back
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingResult {
    /// Sum of the segment lengths
    pub total_distance: f64,
    /// Sum of the edge weights walked; infinite when the destination cannot
    /// be reached (serialized as `null`)
    pub total_cost: f64,
    pub stops: Vec<RoutePoint>,
    pub segments: Vec<RouteSegment>,
    pub polyline: Vec<[f64; 2]>,
    pub preferences: VisitReport,
}

impl RoutingResult {
    /// Result for an unknown origin or destination
    pub fn empty() -> Self {
        Self {
            total_distance: 0.0,
            total_cost: 0.0,
            stops: Vec::new(),
            segments: Vec::new(),
            polyline: Vec::new(),
            preferences: VisitReport::default(),
        }
    }

    /// Result for a destination with no path from the origin
    pub fn unreachable(preferences: VisitReport) -> Self {
        Self {
            total_cost: f64::INFINITY,
            preferences,
            ..Self::empty()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Waypoints picked from the catalog, plus optional POIs that did not fit
struct WaypointPlan<'a> {
    waypoints: Vec<&'a Poi>,
    skipped: Vec<String>,
}

/// Walking route between two gates, threaded through the stops requested in
/// `preference_text`.
///
/// Gates are addressed by their catalog id. Each must-visit category adds the
/// first catalog POI of that category; optional categories follow while fewer
/// than `max_stops` waypoints are planned. Waypoints that cannot be reached
/// are skipped and reported.
pub fn compute_route(
    model: &AirportModel,
    arrival_gate_id: &str,
    departure_gate_id: &str,
    preference_text: &str,
) -> RoutingResult {
    let graph = &model.graph;
    let (Some(start), Some(goal)) = (
        graph.poi_node(arrival_gate_id),
        graph.poi_node(departure_gate_id),
    ) else {
        debug!("Unknown route endpoint: {arrival_gate_id} -> {departure_gate_id}");
        return RoutingResult::empty();
    };

    let preferences = parse_preferences(preference_text);
    let plan = select_waypoints(model, &preferences);

    let mut report = VisitReport {
        visited: Vec::new(),
        skipped: plan.skipped,
    };
    let mut path = vec![start];
    let mut total_cost = 0.0;
    let mut current = start;

    for poi in plan.waypoints {
        let leg = graph
            .poi_node(&poi.id)
            .map(|waypoint| (waypoint, astar_path(graph, current, waypoint)));

        match leg {
            Some((waypoint, leg)) if !leg.is_unreachable() => {
                append_leg(&mut path, &leg.nodes);
                total_cost += leg.cost;
                current = waypoint;
                report.visited.push(poi.id.clone());
            }
            _ => {
                debug!("Waypoint {} is not reachable, skipping it", poi.id);
                report.skipped.push(poi.id.clone());
            }
        }
    }

    let last_leg = astar_path(graph, current, goal);
    if last_leg.is_unreachable() {
        debug!("No path to {departure_gate_id}");
        return RoutingResult::unreachable(report);
    }
    append_leg(&mut path, &last_leg.nodes);
    total_cost += last_leg.cost;

    assemble(model, &path, total_cost, report)
}

fn select_waypoints<'a>(model: &'a AirportModel, preferences: &RoutePreferences) -> WaypointPlan<'a> {
    let first_of = |category: PoiCategory| model.pois.iter().find(|poi| poi.category == category);

    let mut waypoints: Vec<&Poi> = preferences
        .must_visit
        .iter()
        .filter_map(|&category| first_of(category))
        .collect();
    let mut skipped = Vec::new();

    for &category in &preferences.optional_visit {
        let Some(poi) = first_of(category) else {
            continue;
        };
        if waypoints.len() < preferences.max_stops {
            waypoints.push(poi);
        } else {
            skipped.push(poi.id.clone());
        }
    }

    WaypointPlan { waypoints, skipped }
}

/// Appends a leg whose first node is the current end of `path`
fn append_leg(path: &mut Vec<NodeIndex>, leg: &[NodeIndex]) {
    if path.last() == leg.first() {
        path.extend_from_slice(&leg[1..]);
    } else {
        path.extend_from_slice(leg);
    }
}

fn assemble(
    model: &AirportModel,
    path: &[NodeIndex],
    total_cost: f64,
    preferences: VisitReport,
) -> RoutingResult {
    let stops: Vec<RoutePoint> = path
        .iter()
        .filter_map(|&idx| route_point(model, idx))
        .collect();

    let segments: Vec<RouteSegment> = stops
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            RouteSegment {
                distance: distance(from.point(), to.point()),
                polyline: vec![[from.x, from.y], [to.x, to.y]],
                from: from.clone(),
                to: to.clone(),
            }
        })
        .collect();

    RoutingResult {
        total_distance: segments.iter().map(|segment| segment.distance).sum(),
        total_cost,
        polyline: stops.iter().map(|stop| [stop.x, stop.y]).collect(),
        stops,
        segments,
        preferences,
    }
}

fn route_point(model: &AirportModel, idx: NodeIndex) -> Option<RoutePoint> {
    let node = model.graph.node_weight(idx)?;
    let poi_id = node.poi_id().map(str::to_string);
    let kind = match node.kind {
        NodeKind::Corridor => StopKind::Corridor,
        NodeKind::Poi => match poi_id.as_deref().and_then(|id| model.poi(id)) {
            Some(poi) if poi.category == PoiCategory::Gate => StopKind::Gate,
            _ => StopKind::Poi,
        },
    };

    Some(RoutePoint {
        x: node.geometry.x(),
        y: node.geometry.y(),
        name: node.name.clone(),
        poi_id,
        kind,
    })
}
