//! Geometry and time estimates shared by recommendations, timeline and routing

use chrono::{NaiveDateTime, Timelike};
use geo::{Distance, Euclidean, Point};

use crate::{Location, Minutes, MobilityMode, Poi};

/// Meters represented by one unit of the airport coordinate space
pub const METERS_PER_UNIT: f64 = 2.0;

/// Fixed cost of changing terminals, in seconds
pub const TERMINAL_CHANGE_PENALTY_SECS: f64 = 600.0;

/// Queue points on the way through the airport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    Security,
    Passport,
    Baggage,
}

/// Planar Euclidean distance in coordinate units
pub fn distance(a: Point<f64>, b: Point<f64>) -> f64 {
    Euclidean.distance(a, b)
}

/// Walking time between two locations in whole minutes, rounded up
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn travel_time(from: &Location, to: &Location, mobility: MobilityMode) -> Minutes {
    let meters = distance(from.point(), to.point()) * METERS_PER_UNIT;
    let mut seconds = meters / mobility.walking_speed();
    if from.terminal != to.terminal {
        seconds += TERMINAL_CHANGE_PENALTY_SECS;
    }
    (seconds / 60.0).ceil() as Minutes
}

/// Morning (06-09h) and evening (16-19h) rush, by clock hour
pub fn is_peak_hour(time: NaiveDateTime) -> bool {
    matches!(time.hour(), 6..=9 | 16..=19)
}

/// Expected wait at a checkpoint in minutes.
///
/// Static estimate, the terminal does not influence it yet. Domestic travelers
/// skip passport control entirely.
pub fn queue_time(
    time: NaiveDateTime,
    _terminal: &str,
    checkpoint: Checkpoint,
    is_domestic: bool,
) -> Minutes {
    let peak = is_peak_hour(time);
    match checkpoint {
        Checkpoint::Security => {
            if peak {
                20
            } else {
                10
            }
        }
        Checkpoint::Passport if is_domestic => 0,
        Checkpoint::Passport => {
            if peak {
                25
            } else {
                15
            }
        }
        Checkpoint::Baggage => {
            if peak {
                20
            } else {
                15
            }
        }
    }
}

pub fn is_open(poi: &Poi, time: NaiveDateTime) -> bool {
    poi.opening_hours
        .is_open_at(time.hour() * 60 + time.minute())
}
