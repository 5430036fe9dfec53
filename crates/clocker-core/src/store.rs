//! Persistence capability required by the tracker.

use std::collections::BTreeMap;
use std::convert::Infallible;

use chrono::NaiveDate;

use crate::workday::WorkDay;

/// Date-keyed storage for [`WorkDay`] records.
///
/// Implementations must keep at most one record per date.
pub trait Store {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Loads the record for `date`, if one exists.
    fn load(&self, date: NaiveDate) -> Result<Option<WorkDay>, Self::Error>;

    /// Creates or replaces the record keyed by `workday.date`.
    fn store(&mut self, workday: &WorkDay) -> Result<(), Self::Error>;

    /// Deletes the record for `date`, returning whether one was deleted.
    fn remove(&mut self, date: NaiveDate) -> Result<bool, Self::Error>;
}

impl<T: Store + ?Sized> Store for &mut T {
    type Error = T::Error;

    fn load(&self, date: NaiveDate) -> Result<Option<WorkDay>, Self::Error> {
        (**self).load(date)
    }

    fn store(&mut self, workday: &WorkDay) -> Result<(), Self::Error> {
        (**self).store(workday)
    }

    fn remove(&mut self, date: NaiveDate) -> Result<bool, Self::Error> {
        (**self).remove(date)
    }
}

/// In-process store backed by a sorted map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    days: BTreeMap<NaiveDate, WorkDay>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Store for MemoryStore {
    type Error = Infallible;

    fn load(&self, date: NaiveDate) -> Result<Option<WorkDay>, Self::Error> {
        Ok(self.days.get(&date).cloned())
    }

    fn store(&mut self, workday: &WorkDay) -> Result<(), Self::Error> {
        self.days.insert(workday.date, workday.clone());
        Ok(())
    }

    fn remove(&mut self, date: NaiveDate) -> Result<bool, Self::Error> {
        Ok(self.days.remove(&date).is_some())
    }
}
