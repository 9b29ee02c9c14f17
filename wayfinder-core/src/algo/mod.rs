//! Travel-time and queue estimates, and the POI recommendation engine

pub mod estimates;
pub mod recommend;

pub use estimates::{Checkpoint, distance, is_open, queue_time, travel_time};
pub use recommend::{AnnotatedPoi, recommend_pois};
