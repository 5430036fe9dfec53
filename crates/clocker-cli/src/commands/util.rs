//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use regex::Regex;

/// Pre-compiled regex for `1h30m` style durations.
static UNIT_DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+)\s*h)?\s*(?:(\d+)\s*m)?$").unwrap());

/// Pre-compiled regex for `H:MM` style durations.
static CLOCK_DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):([0-5]\d)$").unwrap());

/// Upper bound for a pause; a break cannot outlast the day.
const MAX_PAUSE_MINUTES: i64 = 24 * 60;

/// Parse a date as ISO 8601 (`2026-10-12`) or relative to `today`.
///
/// Supports `today` and `yesterday`.
pub fn parse_date(s: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    match s.trim().to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => return Ok(today - TimeDelta::days(1)),
        _ => {}
    }
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").with_context(|| {
        format!("Invalid date: {s}. Use YYYY-MM-DD (e.g., 2026-10-12), 'today' or 'yesterday'")
    })
}

/// Parse a time of day as `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> anyhow::Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .with_context(|| format!("Invalid time: {s}. Use HH:MM or HH:MM:SS (e.g., 08:30)"))
}

/// Parse a pause duration.
///
/// Supports:
/// - Clock style: "0:45", "1:30"
/// - Units: "45m", "1h", "1h30m"
pub fn parse_pause(s: &str) -> anyhow::Result<TimeDelta> {
    let s = s.trim();
    let (hours, minutes) = if let Some(caps) = CLOCK_DURATION_RE.captures(s) {
        (
            caps[1].parse::<i64>().context("failed to parse hours in pause")?,
            caps[2].parse::<i64>().context("failed to parse minutes in pause")?,
        )
    } else {
        let caps = UNIT_DURATION_RE
            .captures(s)
            .filter(|caps| caps.get(1).is_some() || caps.get(2).is_some());
        let Some(caps) = caps else {
            anyhow::bail!("Invalid pause: {s}. Use H:MM (e.g., 0:45) or units (e.g., 45m, 1h30m)");
        };
        (
            caps.get(1)
                .map_or(Ok(0), |m| m.as_str().parse::<i64>())
                .context("failed to parse hours in pause")?,
            caps.get(2)
                .map_or(Ok(0), |m| m.as_str().parse::<i64>())
                .context("failed to parse minutes in pause")?,
        )
    };

    let minutes = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .with_context(|| format!("Pause value too large: {s}"))?;
    if minutes > MAX_PAUSE_MINUTES {
        anyhow::bail!("Pause value too large: {s}");
    }
    Ok(TimeDelta::minutes(minutes))
}

/// Formats a pause the way [`parse_pause`] reads it back (`45m`, `1h`, `1h30m`).
pub fn format_pause(pause: TimeDelta) -> String {
    let minutes = pause.num_minutes();
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m}m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_parse_date_iso_and_relative() {
        assert_eq!(
            parse_date("2026-10-12", today()).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 12).unwrap()
        );
        assert_eq!(parse_date("today", today()).unwrap(), today());
        assert_eq!(
            parse_date("Yesterday", today()).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        let err = parse_date("12.10.2026", today()).unwrap_err();
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(
            parse_time("08:30").unwrap(),
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("17:05:42").unwrap(),
            NaiveTime::from_hms_opt(17, 5, 42).unwrap()
        );
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn test_parse_pause_formats() {
        assert_eq!(parse_pause("0:45").unwrap(), TimeDelta::minutes(45));
        assert_eq!(parse_pause("1:30").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_pause("45m").unwrap(), TimeDelta::minutes(45));
        assert_eq!(parse_pause("1h").unwrap(), TimeDelta::hours(1));
        assert_eq!(parse_pause("1h30m").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_pause("1h 15m").unwrap(), TimeDelta::minutes(75));
        assert_eq!(parse_pause("0m").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn test_parse_pause_rejects_garbage() {
        assert!(parse_pause("").is_err());
        assert!(parse_pause("lunch").is_err());
        assert!(parse_pause("-30m").is_err());
        assert!(parse_pause("1:75").is_err());
        assert!(parse_pause("25h").is_err());
    }

    #[test]
    fn test_format_pause_round_trips_through_parse() {
        for minutes in [0, 30, 60, 90, 125] {
            let pause = TimeDelta::minutes(minutes);
            assert_eq!(parse_pause(&format_pause(pause)).unwrap(), pause);
        }
    }
}
