//! The per-date record of tracked time or absence.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::absence::AbsenceType;

/// One calendar day of tracked work, or an absence.
///
/// The `date` is the record's identity: stores keep at most one `WorkDay` per
/// date, and nothing in the engine changes it after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDay {
    /// The calendar date this record belongs to.
    pub date: NaiveDate,

    /// When work started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin: Option<NaiveTime>,

    /// When work stopped. Absent while the day is in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveTime>,

    /// Total break time, serialized as whole seconds.
    #[serde(default, rename = "pause_secs", with = "pause_seconds")]
    pub pause: TimeDelta,

    /// Why the day was not worked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence: Option<AbsenceType>,
}

/// Optional field overrides applied by a manual `track`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackInput {
    pub begin: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub pause: Option<TimeDelta>,
}

impl WorkDay {
    /// Creates an empty record for `date`.
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            begin: None,
            end: None,
            pause: TimeDelta::zero(),
            absence: None,
        }
    }

    /// Creates a record with only the start time set.
    pub const fn started(date: NaiveDate, begin: NaiveTime) -> Self {
        Self {
            begin: Some(begin),
            ..Self::new(date)
        }
    }

    /// Creates a record carrying only an absence reason.
    pub const fn absent(date: NaiveDate, absence: AbsenceType) -> Self {
        Self {
            absence: Some(absence),
            ..Self::new(date)
        }
    }

    /// Overwrites every field provided in `input` and keeps the rest.
    ///
    /// Tracked time and absence are exclusive, so the merged day is never an
    /// absence.
    #[must_use]
    pub fn merge(self, input: TrackInput) -> Self {
        Self {
            date: self.date,
            begin: input.begin.or(self.begin),
            end: input.end.or(self.end),
            pause: input.pause.unwrap_or(self.pause),
            absence: None,
        }
    }

    /// Time between begin and end, before the pause is subtracted.
    pub fn span(&self) -> Option<TimeDelta> {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => Some(end - begin),
            _ => None,
        }
    }

    /// Worked time: `end - begin - pause`. `None` until the day is closed.
    pub fn duration(&self) -> Option<TimeDelta> {
        self.span().map(|span| span - self.pause)
    }
}

impl fmt::Display for WorkDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(absence) = self.absence {
            return write!(f, "{} {absence}", self.date);
        }
        let Some(begin) = self.begin else {
            return write!(f, "{} untracked", self.date);
        };
        match (self.end, self.duration()) {
            (Some(end), Some(worked)) => write!(
                f,
                "{} {begin}-{end} (pause {}, worked {})",
                self.date,
                format_duration(self.pause),
                format_duration(worked)
            ),
            _ => write!(f, "{} {begin}-open", self.date),
        }
    }
}

/// Formats a duration as `HH:MM`, with a leading `-` when negative.
pub fn format_duration(duration: TimeDelta) -> String {
    let minutes = duration.num_minutes();
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

mod pause_seconds {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(pause: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(pause.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        if secs < 0 {
            return Err(serde::de::Error::custom(format!(
                "pause must not be negative, got {secs}s"
            )));
        }
        TimeDelta::try_seconds(secs)
            .ok_or_else(|| serde::de::Error::custom(format!("pause out of range: {secs}s")))
    }
}
