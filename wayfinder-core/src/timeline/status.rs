use chrono::NaiveDateTime;

use super::{StepStatus, TimelineStep};

/// A step is tight when its slack covers the rest of the trip by less than this
pub const TIGHT_MARGIN_MINUTES: f64 = 15.0;

/// Classifies every step against the boarding deadline.
///
/// Slack is the time between the end of a step and boarding; it must cover the
/// travel and dwell time of every later step.
#[allow(clippy::cast_precision_loss)]
pub(super) fn annotate_risk(steps: &mut [TimelineStep], boarding: NaiveDateTime) {
    let mut remaining = 0.0;
    for step in steps.iter_mut().rev() {
        let slack = (boarding - step.end_time()).num_milliseconds() as f64 / 60_000.0;
        step.status = classify(slack, remaining);
        remaining += step.total_minutes();
    }
}

fn classify(slack: f64, remaining: f64) -> StepStatus {
    if slack < remaining {
        StepStatus::Risky
    } else if slack < remaining + TIGHT_MARGIN_MINUTES {
        StepStatus::Tight
    } else {
        StepStatus::Safe
    }
}

/// Overall trip status from the minutes left until boarding
pub fn boarding_status(minutes_until_boarding: i64) -> StepStatus {
    match minutes_until_boarding {
        m if m > 60 => StepStatus::Safe,
        m if m > 30 => StepStatus::Tight,
        _ => StepStatus::Risky,
    }
}
