//! Core of the airport wayfinding assistant.
//!
//! Everything here is a pure computation over an [`AirportModel`] loaded once
//! at startup: travel-time and queue estimates, POI recommendations, the
//! itinerary timeline and A* routing over the terminal navigation graph.

pub mod algo;
mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod session;
pub mod timeline;

pub use error::Error;
pub use loading::{AirportModelConfig, create_airport_model};
pub use model::{
    AirportModel, Location, MealType, MobilityMode, NavigationGraph, OpeningHours, Poi,
    PoiCategory, TripDetails, UserPreferences, Zone,
};

/// Whole minutes
pub type Minutes = u32;

/// Upper bound on the number of recommendations handed back to callers
pub const MAX_RECOMMENDATIONS: usize = 20;

/// Boarding closes this many minutes before departure
pub const BOARDING_LEAD_MINUTES: i64 = 30;
