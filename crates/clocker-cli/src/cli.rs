//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clocker_core::AbsenceType;

/// Working hours tracker.
///
/// Clocks the working day in and out, backfills past days and records
/// absences.
#[derive(Debug, Parser)]
#[command(name = "clocker", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start tracking today at the current time.
    Start,

    /// Stop tracking today at the current time.
    Stop,

    /// Create or correct the record of a day.
    Track {
        /// Day to track (YYYY-MM-DD, today, yesterday). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,

        /// Start of work (HH:MM or HH:MM:SS).
        #[arg(short, long)]
        begin: Option<String>,

        /// End of work (HH:MM or HH:MM:SS).
        #[arg(short, long)]
        end: Option<String>,

        /// Break duration (e.g. 0:45, 45m, 1h, 1h30m).
        #[arg(short, long)]
        pause: Option<String>,
    },

    /// Delete the record of a day.
    Remove {
        /// Day to remove (YYYY-MM-DD, today, yesterday).
        date: String,
    },

    /// Mark a day as an absence, replacing any tracked time.
    Notify {
        /// Day of the absence (YYYY-MM-DD, today, yesterday).
        date: String,

        /// Absence reason: vacation, sick or holiday.
        absence: AbsenceType,
    },

    /// Show recorded days. Defaults to the current week.
    Show {
        /// First day to show (YYYY-MM-DD, today, yesterday).
        #[arg(long)]
        from: Option<String>,

        /// Last day to show (YYYY-MM-DD, today, yesterday).
        #[arg(long)]
        to: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
