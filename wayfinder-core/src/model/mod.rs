//! Data model for airport wayfinding
//!
//! Contains the static catalog (POIs, zones), the navigation graph and the
//! per-request trip facts and preferences.

pub mod airport_model;
pub mod catalog;
pub mod navigation;
pub mod trip;

// Re-export of the main model structure
pub use airport_model::{AirportModel, terminal_zone_id};

// Re-export of basic types for convenience
pub use catalog::{Location, OpeningHours, Poi, PoiCategory, Zone};
pub use navigation::{NavEdge, NavNode, NavigationGraph, NodeKind, POI_NODE_PREFIX, poi_node_id};
pub use trip::{MealType, MobilityMode, TripDetails, UserPreferences};
