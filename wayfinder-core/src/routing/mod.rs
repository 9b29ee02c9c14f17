//! Multi-stop walking routes over the navigation graph

pub mod astar;
mod preferences;
mod route;
mod to_geojson;

pub use astar::{PathResult, astar_path};
pub use preferences::{RoutePreferences, parse_preferences};
pub use route::{RoutePoint, RouteSegment, RoutingResult, StopKind, VisitReport, compute_route};
