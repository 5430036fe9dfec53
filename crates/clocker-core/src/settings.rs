//! Configuration options consumed by the tracker.

use chrono::TimeDelta;

/// Read-only access to the options the tracker needs.
pub trait Settings {
    /// `Behavior.RoundToQuarter`: round start/stop times to quarter-hours.
    fn round_to_quarter(&self) -> bool;

    /// `Work.DefaultPauseTime`: pause assumed for long days, if configured.
    fn default_pause_time(&self) -> Option<TimeDelta>;
}

impl<T: Settings + ?Sized> Settings for &T {
    fn round_to_quarter(&self) -> bool {
        (**self).round_to_quarter()
    }

    fn default_pause_time(&self) -> Option<TimeDelta> {
        (**self).default_pause_time()
    }
}

/// Settings held as plain values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticSettings {
    pub round_to_quarter: bool,
    pub default_pause_time: Option<TimeDelta>,
}

impl Settings for StaticSettings {
    fn round_to_quarter(&self) -> bool {
        self.round_to_quarter
    }

    fn default_pause_time(&self) -> Option<TimeDelta> {
        self.default_pause_time
    }
}
