//! Show command for listing recorded days.
//!
//! Defaults to the current week (Monday through today) and prints either a
//! table or the raw records as JSON.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::{Datelike, NaiveDate, TimeDelta};
use clocker_core::{WorkDay, format_duration};
use clocker_db::Database;

use super::util::parse_date;

/// Monday of the week containing `today`.
fn week_start(today: NaiveDate) -> NaiveDate {
    let days_since_monday = today.weekday().num_days_from_monday();
    today - TimeDelta::days(i64::from(days_since_monday))
}

/// Formats workdays as an aligned table.
pub fn format_table(workdays: &[WorkDay]) -> String {
    let mut output = String::new();
    push_row(
        &mut output,
        ["DATE", "BEGIN", "END", "PAUSE", "WORKED", "ABSENCE"].map(str::to_string),
    );

    for workday in workdays {
        let absent = workday.absence.is_some();
        let time = |t: Option<chrono::NaiveTime>| t.map_or_else(|| "-".to_string(), |t| t.to_string());
        push_row(
            &mut output,
            [
                workday.date.to_string(),
                time(workday.begin),
                time(workday.end),
                if absent {
                    "-".to_string()
                } else {
                    format_duration(workday.pause)
                },
                workday
                    .duration()
                    .map_or_else(|| "-".to_string(), format_duration),
                workday
                    .absence
                    .map(|absence| absence.to_string())
                    .unwrap_or_default(),
            ],
        );
    }
    output
}

fn push_row(output: &mut String, [date, begin, end, pause, worked, absence]: [String; 6]) {
    let line = format!("{date:<10}  {begin:<8}  {end:<8}  {pause:<5}  {worked:<6}  {absence}");
    let _ = writeln!(output, "{}", line.trim_end());
}

/// Runs the show command for `from..=to`, defaulting to the current week.
pub fn run<W: Write>(
    writer: &mut W,
    db: &Database,
    today: NaiveDate,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> Result<()> {
    let from = match from {
        Some(s) => parse_date(s, today)?,
        None => week_start(today),
    };
    let to = match to {
        Some(s) => parse_date(s, today)?,
        None => today,
    };
    if to < from {
        anyhow::bail!("Invalid range: {from} is after {to}");
    }

    let workdays = db.list_range(from, to)?;
    tracing::debug!(%from, %to, count = workdays.len(), "listed workdays");

    if json {
        serde_json::to_writer_pretty(&mut *writer, &workdays)?;
        writeln!(writer)?;
        return Ok(());
    }

    if workdays.is_empty() {
        writeln!(writer, "No workdays recorded between {from} and {to}.")?;
        return Ok(());
    }

    write!(writer, "{}", format_table(&workdays))?;
    Ok(())
}
