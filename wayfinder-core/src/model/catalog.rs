//! Static airport catalog: points of interest, zones and planar locations

use std::fmt;
use std::str::FromStr;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A position in the airport coordinate space, tagged with its terminal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub terminal: String,
}

impl Location {
    pub fn new(x: f64, y: f64, terminal: impl Into<String>) -> Self {
        Self {
            x,
            y,
            terminal: terminal.into(),
        }
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiCategory {
    Cafe,
    Restaurant,
    Bar,
    Shop,
    Lounge,
    Service,
    #[serde(rename = "wc")]
    Restroom,
    Gate,
}

impl PoiCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PoiCategory::Cafe => "cafe",
            PoiCategory::Restaurant => "restaurant",
            PoiCategory::Bar => "bar",
            PoiCategory::Shop => "shop",
            PoiCategory::Lounge => "lounge",
            PoiCategory::Service => "service",
            PoiCategory::Restroom => "wc",
            PoiCategory::Gate => "gate",
        }
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily opening hours, in minutes since midnight.
///
/// Ranges that wrap past midnight (`22:00-02:00`) are not supported: such a
/// POI is reported closed at every time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OpeningHours {
    AlwaysOpen,
    Daily { open: u32, close: u32 },
}

impl OpeningHours {
    /// Both ends of the range are inclusive
    pub fn is_open_at(&self, minute_of_day: u32) -> bool {
        match *self {
            OpeningHours::AlwaysOpen => true,
            OpeningHours::Daily { open, close } => minute_of_day >= open && minute_of_day <= close,
        }
    }
}

impl FromStr for OpeningHours {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "24/7" {
            return Ok(OpeningHours::AlwaysOpen);
        }
        let (open, close) = s
            .split_once('-')
            .ok_or_else(|| Error::InvalidOpeningHours(s.to_string()))?;
        Ok(OpeningHours::Daily {
            open: parse_clock(open).ok_or_else(|| Error::InvalidOpeningHours(s.to_string()))?,
            close: parse_clock(close).ok_or_else(|| Error::InvalidOpeningHours(s.to_string()))?,
        })
    }
}

impl TryFrom<String> for OpeningHours {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OpeningHours> for String {
    fn from(hours: OpeningHours) -> Self {
        hours.to_string()
    }
}

impl fmt::Display for OpeningHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OpeningHours::AlwaysOpen => f.write_str("24/7"),
            OpeningHours::Daily { open, close } => write!(
                f,
                "{:02}:{:02}-{:02}:{:02}",
                open / 60,
                open % 60,
                close / 60,
                close % 60
            ),
        }
    }
}

/// Parse `HH:MM` into minutes since midnight
fn parse_clock(clock: &str) -> Option<u32> {
    let (hours, minutes) = clock.trim().split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}

/// Point of interest from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub category: PoiCategory,
    pub terminal: String,
    pub zone: String,
    pub x: f64,
    pub y: f64,
    pub opening_hours: OpeningHours,
    /// Typical wait interval `(min, max)` in minutes
    pub avg_wait_time: (u32, u32),
    /// 0 = free .. 3 = premium
    pub price_level: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub menu: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Poi {
    pub fn location(&self) -> Location {
        Location::new(self.x, self.y, self.terminal.as_str())
    }

    /// Mean of the wait interval, in minutes
    pub fn service_time(&self) -> f64 {
        (f64::from(self.avg_wait_time.0) + f64::from(self.avg_wait_time.1)) / 2.0
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Named area of a terminal (arrivals hall, security, a pier...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub terminal: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Zone {
    pub fn location(&self) -> Location {
        Location::new(self.x, self.y, self.terminal.as_str())
    }
}
