//! Track command for creating or correcting a day's record.

use std::io::Write;

use anyhow::Result;
use clocker_core::{Clock, Settings, Store, TrackInput, Tracker};

use super::util::{parse_date, parse_pause, parse_time};

/// Raw `track` arguments as given on the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackArgs<'a> {
    pub date: Option<&'a str>,
    pub begin: Option<&'a str>,
    pub end: Option<&'a str>,
    pub pause: Option<&'a str>,
}

/// Runs the track command.
///
/// All arguments are parsed before the store is touched, so a malformed
/// value never leaves a partial record behind.
pub fn run<W, S, D, C>(writer: &mut W, tracker: &mut Tracker<S, D, C>, args: TrackArgs<'_>) -> Result<()>
where
    W: Write,
    S: Settings,
    D: Store,
    C: Clock,
{
    let today = tracker.clock().now().date();
    let day = match args.date {
        Some(s) => parse_date(s, today)?,
        None => today,
    };
    let input = TrackInput {
        begin: args.begin.map(parse_time).transpose()?,
        end: args.end.map(parse_time).transpose()?,
        pause: args.pause.map(parse_pause).transpose()?,
    };

    let workday = tracker.track(day, input)?;
    writeln!(writer, "Tracked: {workday}")?;
    Ok(())
}
