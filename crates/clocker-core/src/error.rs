use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by [`Tracker`](crate::Tracker) operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// `stop` was called on a day that was never started.
    #[error("tracking for {date} has not been started; run start before stop")]
    NotStarted { date: NaiveDate },

    /// A manual track would leave the day without a start time.
    #[error("start time of workday {date} cannot be empty")]
    MissingBegin { date: NaiveDate },

    /// A manual track would leave the day with a negative pause.
    #[error("pause of workday {date} cannot be negative")]
    NegativePause { date: NaiveDate },

    /// The store held a record for the date but did not delete it.
    #[error("failed removing workday {date} from the store")]
    RemoveFailed { date: NaiveDate },

    /// The store itself failed.
    #[error("store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TrackerError {
    pub(crate) fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(err))
    }
}
