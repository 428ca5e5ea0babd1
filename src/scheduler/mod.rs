//! Daily reset scheduling module.
//!
//! Clears all accumulated counters once per day at the configured
//! local time.

mod runner;

pub use runner::{ResetScheduler, SchedulerMessage};
