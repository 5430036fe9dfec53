//! Default pause inference for long days.

use chrono::TimeDelta;

use crate::workday::WorkDay;

/// Days spanning more than this are assumed to include a break.
pub const PAUSE_THRESHOLD: TimeDelta = TimeDelta::hours(6);

/// What [`infer_pause`] decided for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseInference {
    /// A non-zero pause is already recorded and is kept.
    Explicit,
    /// The day has no end yet.
    Open,
    /// The span is within [`PAUSE_THRESHOLD`]; no pause is assumed.
    Short(TimeDelta),
    /// The configured default pause applies.
    Applied(TimeDelta),
    /// A pause applies but no default is configured; pause stays zero.
    Unconfigured,
}

impl PauseInference {
    /// Returns `day` with the inferred pause set, if any.
    #[must_use]
    pub fn apply(self, day: WorkDay) -> WorkDay {
        match self {
            Self::Applied(pause) => WorkDay { pause, ..day },
            _ => day,
        }
    }
}

/// Decides the pause for `day` given the configured default.
///
/// Only a zero pause is ever replaced. The span is measured before any pause
/// is subtracted.
pub fn infer_pause(day: &WorkDay, default_pause: Option<TimeDelta>) -> PauseInference {
    if day.pause > TimeDelta::zero() {
        return PauseInference::Explicit;
    }
    let Some(span) = day.span() else {
        return PauseInference::Open;
    };
    if span <= PAUSE_THRESHOLD {
        return PauseInference::Short(span);
    }
    match default_pause {
        Some(pause) => PauseInference::Applied(pause),
        None => PauseInference::Unconfigured,
    }
}
