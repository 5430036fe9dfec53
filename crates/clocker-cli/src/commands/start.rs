//! Start command: clock in for today.

use std::io::Write;

use anyhow::Result;
use clocker_core::{Clock, Settings, Store, Tracker};

/// Runs the start command.
pub fn run<W, S, D, C>(writer: &mut W, tracker: &mut Tracker<S, D, C>) -> Result<()>
where
    W: Write,
    S: Settings,
    D: Store,
    C: Clock,
{
    let workday = tracker.start()?;
    writeln!(writer, "Start: {workday}")?;
    Ok(())
}
