//! Storage layer for clocker.
//!
//! Provides persistence for [`WorkDay`] records using `rusqlite`.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but not `Sync`.
//! A `Database` instance can be moved between threads but cannot be shared across
//! threads without external synchronization. clocker itself is single-threaded.
//!
//! # Schema
//!
//! One row per calendar date in the `workdays` table:
//! - `date`: `YYYY-MM-DD`, the primary key
//! - `begin_time` / `end_time`: `HH:MM:SS`, nullable
//! - `pause_secs`: whole seconds, never negative
//! - `absence`: absence type string (`vacation`, `sick`, `holiday`), nullable
//!
//! ISO date strings sort lexicographically in chronological order, so range
//! queries compare the text column directly.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use clocker_core::{AbsenceType, Store, WorkDay};
use rusqlite::{Connection, OptionalExtension, Row, params};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored row could not be decoded into a workday.
    #[error("invalid workday row for {date}: {message}")]
    InvalidRow { date: String, message: String },
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The database schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        tracing::debug!(path = %path.display(), "opened database");
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent - safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS workdays (
                date TEXT PRIMARY KEY,
                begin_time TEXT,
                end_time TEXT,
                pause_secs INTEGER NOT NULL DEFAULT 0 CHECK (pause_secs >= 0),
                absence TEXT
            );
            ",
        )?;
        Ok(())
    }

    /// Loads the workday stored for `date`.
    pub fn load_workday(&self, date: NaiveDate) -> Result<Option<WorkDay>, DbError> {
        let row = self
            .conn
            .query_row(
                "
                SELECT date, begin_time, end_time, pause_secs, absence
                FROM workdays
                WHERE date = ?
                ",
                [format_date(date)],
                WorkDayRow::from_row,
            )
            .optional()?;
        row.map(WorkDayRow::decode).transpose()
    }

    /// Inserts the workday, replacing any row for the same date.
    pub fn upsert_workday(&self, workday: &WorkDay) -> Result<(), DbError> {
        self.conn.execute(
            "
            INSERT INTO workdays (date, begin_time, end_time, pause_secs, absence)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(date) DO UPDATE SET
                begin_time = excluded.begin_time,
                end_time = excluded.end_time,
                pause_secs = excluded.pause_secs,
                absence = excluded.absence
            ",
            params![
                format_date(workday.date),
                workday.begin.map(format_time),
                workday.end.map(format_time),
                workday.pause.num_seconds(),
                workday.absence.map(|absence| absence.as_str()),
            ],
        )?;
        Ok(())
    }

    /// Deletes the workday for `date`, returning whether a row was deleted.
    pub fn delete_workday(&self, date: NaiveDate) -> Result<bool, DbError> {
        let deleted = self
            .conn
            .execute("DELETE FROM workdays WHERE date = ?", [format_date(date)])?;
        Ok(deleted > 0)
    }

    /// Lists workdays with `from <= date <= to`, ordered by date.
    pub fn list_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<WorkDay>, DbError> {
        if to < from {
            return Ok(Vec::new());
        }
        let mut stmt = self.conn.prepare(
            "
            SELECT date, begin_time, end_time, pause_secs, absence
            FROM workdays
            WHERE date >= ? AND date <= ?
            ORDER BY date ASC
            ",
        )?;
        let rows = stmt.query_map([format_date(from), format_date(to)], WorkDayRow::from_row)?;
        let mut workdays = Vec::new();
        for row in rows {
            workdays.push(row?.decode()?);
        }
        Ok(workdays)
    }
}

impl Store for Database {
    type Error = DbError;

    fn load(&self, date: NaiveDate) -> Result<Option<WorkDay>, Self::Error> {
        self.load_workday(date)
    }

    fn store(&mut self, workday: &WorkDay) -> Result<(), Self::Error> {
        self.upsert_workday(workday)
    }

    fn remove(&mut self, date: NaiveDate) -> Result<bool, Self::Error> {
        self.delete_workday(date)
    }
}

#[derive(Debug)]
struct WorkDayRow {
    date: String,
    begin: Option<String>,
    end: Option<String>,
    pause_secs: i64,
    absence: Option<String>,
}

impl WorkDayRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            date: row.get(0)?,
            begin: row.get(1)?,
            end: row.get(2)?,
            pause_secs: row.get(3)?,
            absence: row.get(4)?,
        })
    }

    fn decode(self) -> Result<WorkDay, DbError> {
        let invalid = |message: String| DbError::InvalidRow {
            date: self.date.clone(),
            message,
        };

        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|err| invalid(format!("date: {err}")))?;
        let begin = self
            .begin
            .as_deref()
            .map(|s| parse_time(s).map_err(|err| invalid(format!("begin_time: {err}"))))
            .transpose()?;
        let end = self
            .end
            .as_deref()
            .map(|s| parse_time(s).map_err(|err| invalid(format!("end_time: {err}"))))
            .transpose()?;
        if self.pause_secs < 0 {
            return Err(invalid(format!("negative pause: {}s", self.pause_secs)));
        }
        let pause = TimeDelta::try_seconds(self.pause_secs)
            .ok_or_else(|| invalid(format!("pause out of range: {}s", self.pause_secs)))?;
        let absence = self
            .absence
            .as_deref()
            .map(|s| s.parse::<AbsenceType>().map_err(|err| invalid(err.to_string())))
            .transpose()?;

        Ok(WorkDay {
            date,
            begin,
            end,
            pause,
            absence,
        })
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, TIME_FORMAT)
}
