//! Time-annotated itinerary from arrival to the departure gate

mod builder;
mod format;
mod status;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

pub use builder::build_timeline;
pub use format::{format_duration, minutes_until_boarding};
pub use status::{TIGHT_MARGIN_MINUTES, boarding_status};

use crate::Minutes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Checkpoint,
    Poi,
    Gate,
}

/// Risk of missing boarding after this step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    #[default]
    Safe,
    Tight,
    Risky,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub name: String,
    /// Zone id, or the gate code for the gate step
    pub location: String,
    /// When the traveler leaves for this step
    pub start_time: NaiveDateTime,
    /// Minutes spent at the step (queue or service)
    pub duration: f64,
    /// Minutes of walking to reach the step
    pub travel_time: Minutes,
    pub status: StepStatus,
    pub description: String,
}

impl TimelineStep {
    /// Walking plus time spent at the step
    pub fn total_minutes(&self) -> f64 {
        f64::from(self.travel_time) + self.duration
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.start_time
            .checked_add_signed(minutes_delta(self.total_minutes()))
            .unwrap_or(NaiveDateTime::MAX)
    }
}

/// Fractional minutes as a chrono delta, at millisecond precision
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn minutes_delta(minutes: f64) -> TimeDelta {
    TimeDelta::milliseconds((minutes * 60_000.0).round() as i64)
}
