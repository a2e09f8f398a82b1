// src/lib.rs

#[macro_use]
pub mod macros;

pub mod log;
pub mod error;
pub mod config;
pub mod teams;
pub mod schedule;

pub mod ordering;
pub mod finder;
pub mod distance;
pub mod report;

pub mod progress;
pub mod file;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{ Error, Result };
pub use finder::{ DateFinder, Event, EventSet, GapWindow, Trip };
pub use ordering::{ generate_orderings, Ordering, Variant };
pub use schedule::{ GameRecord, ScheduleTable };
pub use teams::{ Team, TeamList };
