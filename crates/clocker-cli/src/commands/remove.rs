//! Remove command for deleting a day's record.

use std::io::Write;

use anyhow::Result;
use clocker_core::{Clock, Settings, Store, Tracker};

use super::util::parse_date;

/// Runs the remove command.
pub fn run<W, S, D, C>(writer: &mut W, tracker: &mut Tracker<S, D, C>, date: &str) -> Result<()>
where
    W: Write,
    S: Settings,
    D: Store,
    C: Clock,
{
    let day = parse_date(date, tracker.clock().now().date())?;
    match tracker.remove(day)? {
        Some(workday) => writeln!(writer, "Removed: {workday}")?,
        None => writeln!(writer, "No workday recorded for {day}.")?,
    }
    Ok(())
}
