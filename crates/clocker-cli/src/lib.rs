//! clocker CLI library.
//!
//! This crate provides the CLI interface for the working hours tracker.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::{BehaviorConfig, Config, WorkConfig};
