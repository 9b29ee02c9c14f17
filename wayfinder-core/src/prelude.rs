pub use crate::{BOARDING_LEAD_MINUTES, MAX_RECOMMENDATIONS};

// Re-export key components
pub use crate::algo::estimates::{Checkpoint, distance, is_open, queue_time, travel_time};
pub use crate::algo::recommend::{AnnotatedPoi, recommend_pois};
pub use crate::loading::{AirportModelConfig, create_airport_model};
pub use crate::model::{
    AirportModel, Location, MealType, MobilityMode, OpeningHours, Poi, PoiCategory, TripDetails,
    UserPreferences, Zone,
};
pub use crate::routing::{
    RoutePoint, RoutePreferences, RouteSegment, RoutingResult, StopKind, VisitReport,
    compute_route, parse_preferences,
};
pub use crate::session::{PlanRequest, TripPlan, plan_trip};
pub use crate::timeline::{
    StepKind, StepStatus, TimelineStep, boarding_status, build_timeline, format_duration,
    minutes_until_boarding,
};

pub use crate::Error;
pub use crate::Minutes;
