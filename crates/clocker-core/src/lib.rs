//! Core domain logic for clocker.
//!
//! This crate contains the day-tracking engine and its building blocks:
//! - [`WorkDay`]: the per-date record of working hours or absence
//! - Quarter-hour rounding for clock-in/clock-out times
//! - Pause inference for long days
//! - [`Tracker`]: start/stop/track/remove/notify over injected collaborators
//!
//! Collaborators are traits ([`Settings`], [`Store`], [`Clock`]) so that
//! storage and configuration backends stay swappable.

pub mod absence;
mod clock;
mod error;
pub mod pause;
pub mod rounding;
mod settings;
mod store;
mod tracker;
pub mod workday;

pub use absence::{AbsenceType, UnknownAbsenceType};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::TrackerError;
pub use pause::{PAUSE_THRESHOLD, PauseInference, infer_pause};
pub use rounding::{round_next_quarter, round_prev_quarter, round_quarter};
pub use settings::{Settings, StaticSettings};
pub use store::{MemoryStore, Store};
pub use tracker::Tracker;
pub use workday::{TrackInput, WorkDay, format_duration};
