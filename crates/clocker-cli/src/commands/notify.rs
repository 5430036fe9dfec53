//! Notify command for recording an absence.

use std::io::Write;

use anyhow::Result;
use clocker_core::{AbsenceType, Clock, Settings, Store, Tracker};

use super::util::parse_date;

/// Runs the notify command.
pub fn run<W, S, D, C>(
    writer: &mut W,
    tracker: &mut Tracker<S, D, C>,
    date: &str,
    absence: AbsenceType,
) -> Result<()>
where
    W: Write,
    S: Settings,
    D: Store,
    C: Clock,
{
    let day = parse_date(date, tracker.clock().now().date())?;
    let workday = tracker.notify(day, absence)?;
    writeln!(writer, "Absence: {workday}")?;
    Ok(())
}
