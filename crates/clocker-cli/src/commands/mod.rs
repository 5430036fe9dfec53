//! CLI subcommand implementations.

pub mod notify;
pub mod remove;
pub mod show;
pub mod start;
pub mod stop;
pub mod track;
pub mod util;
