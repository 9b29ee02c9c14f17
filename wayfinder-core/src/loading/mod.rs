//! This module is responsible for loading the static airport data (POI
//! catalog, zones, navigation graph) and building an [`AirportModel`].
//!
//! [`AirportModel`]: crate::AirportModel

mod builder;
mod config;
mod raw_types;

pub use builder::create_airport_model;
pub use config::AirportModelConfig;
pub use raw_types::{RawAirportData, RawEdge, RawNavGraph, RawNode, RawPoiLink};
