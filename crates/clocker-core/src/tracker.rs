//! The day-tracking engine.
//!
//! Every operation follows the same shape: read the clock once (where "now"
//! matters), load the record for the target date, derive the new record with a
//! pure transition, then store it. Nothing is stored when an operation fails.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeDelta};

use crate::absence::AbsenceType;
use crate::clock::{Clock, SystemClock};
use crate::error::TrackerError;
use crate::pause::{PauseInference, infer_pause};
use crate::rounding::{round_next_quarter, round_prev_quarter};
use crate::settings::Settings;
use crate::store::Store;
use crate::workday::{TrackInput, WorkDay};

/// Façade over the settings, store and clock collaborators.
#[derive(Debug)]
pub struct Tracker<S, D, C = SystemClock> {
    settings: S,
    store: D,
    clock: C,
}

impl<S: Settings, D: Store> Tracker<S, D> {
    /// Creates a tracker reading the local system clock.
    pub const fn new(settings: S, store: D) -> Self {
        Self::with_clock(settings, store, SystemClock)
    }
}

impl<S: Settings, D: Store, C: Clock> Tracker<S, D, C> {
    pub const fn with_clock(settings: S, store: D, clock: C) -> Self {
        Self {
            settings,
            store,
            clock,
        }
    }

    pub const fn settings(&self) -> &S {
        &self.settings
    }

    pub const fn store(&self) -> &D {
        &self.store
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Starts tracking today at the current time.
    ///
    /// Returns the existing record unchanged if today is already tracked, so a
    /// day that was stopped cannot be restarted this way.
    pub fn start(&mut self) -> Result<WorkDay, TrackerError> {
        let now = self.clock.now();
        let today = now.date();

        if let Some(workday) = self.load(today)? {
            tracing::info!(date = %today, "start: already present in store");
            return Ok(workday);
        }

        let begin = self.clock_in_time(now);
        let workday = WorkDay::started(today, begin);
        self.save(&workday)?;
        tracing::info!(%workday, "start: tracking");

        Ok(workday)
    }

    /// Stops tracking today at the current time.
    ///
    /// A stop that would not move an existing end time forward is ignored.
    pub fn stop(&mut self) -> Result<WorkDay, TrackerError> {
        let now = self.clock.now();
        let today = now.date();

        let workday = match self.load(today)? {
            Some(workday) if workday.begin.is_some() => workday,
            _ => return Err(TrackerError::NotStarted { date: today }),
        };

        let end = self.clock_out_time(now);
        let previous = workday.end;
        if let Some(previous) = previous {
            if end <= previous {
                tracing::info!(
                    date = %today,
                    %end,
                    %previous,
                    "stop: current time is not after tracked end"
                );
                return Ok(workday);
            }
        }

        let workday = self.settle_pause(WorkDay {
            end: Some(end),
            ..workday
        });
        self.save(&workday)?;

        match previous {
            Some(previous) => tracing::info!(date = %today, %previous, %end, "stop: update end time"),
            None => tracing::info!(%workday, "stop: stop tracking"),
        }

        Ok(workday)
    }

    /// Creates or updates the record for `day` from manual input.
    ///
    /// Fields missing from `input` keep their stored values. A zero pause on a
    /// closed day is replaced by the configured default when the day is long
    /// enough.
    pub fn track(&mut self, day: NaiveDate, input: TrackInput) -> Result<WorkDay, TrackerError> {
        let current = match self.load(day)? {
            Some(workday) => {
                tracing::info!(%workday, "track: update");
                workday
            }
            None => {
                tracing::info!(date = %day, "track: create new workday");
                WorkDay::new(day)
            }
        };

        let mut workday = current.merge(input);
        if workday.pause.is_zero() {
            workday = self.settle_pause(workday);
        }

        let Some(begin) = workday.begin else {
            return Err(TrackerError::MissingBegin { date: day });
        };
        if workday.pause < TimeDelta::zero() {
            return Err(TrackerError::NegativePause { date: day });
        }
        if let Some(end) = workday.end {
            if end <= begin {
                tracing::warn!(date = %day, %begin, %end, "track: end is not after begin");
            }
        }

        self.save(&workday)?;
        tracing::info!(%workday, "track: set");

        Ok(workday)
    }

    /// Deletes the record for `day`, returning it if there was one.
    pub fn remove(&mut self, day: NaiveDate) -> Result<Option<WorkDay>, TrackerError> {
        let Some(workday) = self.load(day)? else {
            tracing::info!(date = %day, "remove: no workday found");
            return Ok(None);
        };

        if !self.store.remove(day).map_err(TrackerError::store)? {
            return Err(TrackerError::RemoveFailed { date: day });
        }
        tracing::info!(%workday, "remove: removed");

        Ok(Some(workday))
    }

    /// Marks `day` as an absence, discarding any tracked time.
    pub fn notify(&mut self, day: NaiveDate, absence: AbsenceType) -> Result<WorkDay, TrackerError> {
        if let Some(existing) = self.load(day)? {
            tracing::info!(%existing, "notify: overriding");
        }

        let workday = WorkDay::absent(day, absence);
        self.save(&workday)?;
        tracing::info!(date = %day, %absence, "notify: absence");

        Ok(workday)
    }

    fn clock_in_time(&self, now: NaiveDateTime) -> NaiveTime {
        let time = now.time();
        if !self.settings.round_to_quarter() {
            return time.trunc_subsecs(0);
        }
        let rounded = round_prev_quarter(time);
        tracing::debug!(date = %now.date(), %time, %rounded, "round to previous quarter");
        rounded
    }

    fn clock_out_time(&self, now: NaiveDateTime) -> NaiveTime {
        let time = now.time();
        if !self.settings.round_to_quarter() {
            return time.trunc_subsecs(0);
        }
        let rounded = round_next_quarter(time);
        tracing::debug!(date = %now.date(), %time, %rounded, "round to next quarter");
        rounded
    }

    fn settle_pause(&self, workday: WorkDay) -> WorkDay {
        let inference = infer_pause(&workday, self.settings.default_pause_time());
        let date = workday.date;
        match inference {
            PauseInference::Explicit => {}
            PauseInference::Open => {
                tracing::debug!(%date, "no end time set, no pause applied");
            }
            PauseInference::Short(span) => {
                tracing::debug!(%date, %span, "span is within 6 hours, no pause applied");
            }
            PauseInference::Applied(pause) => {
                tracing::debug!(%date, %pause, "pause set from default pause time");
            }
            PauseInference::Unconfigured => {
                tracing::warn!(%date, "no default pause time configured, pause left at zero");
            }
        }
        inference.apply(workday)
    }

    fn load(&self, date: NaiveDate) -> Result<Option<WorkDay>, TrackerError> {
        self.store.load(date).map_err(TrackerError::store)
    }

    fn save(&mut self, workday: &WorkDay) -> Result<(), TrackerError> {
        self.store.store(workday).map_err(TrackerError::store)
    }
}
