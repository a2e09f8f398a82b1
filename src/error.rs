// src/error.rs
//! Error types for every layer of the planner.
//!
//! Search failures (`FindError`) are control flow for the date finder and are
//! normally consumed inside `finder`; the others reach the caller.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Outcomes of a date search that did not produce a match.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FindError {
    /// One team has no home game inside the requested window.
    #[error("{team} has no home game between {earliest} and {}", until(.latest))]
    NoMatchingDate {
        team: String,
        earliest: NaiveDate,
        latest: Option<NaiveDate>,
    },

    /// No complete trip exists for an ordering starting on or after `earliest`.
    #[error("no dates satisfy the ordering on or after {earliest}")]
    NoDatesSatisfyRequirements { earliest: NaiveDate },
}

fn until(latest: &Option<NaiveDate>) -> String {
    match latest {
        Some(d) => d.to_string(),
        None => s!("end of season"),
    }
}

/// Invalid planner configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("games per trip {min}..={max} cannot be drawn from {teams} teams")]
    InvalidOrderingLength { min: usize, max: usize, teams: usize },

    #[error("unknown team: {0}")]
    UnknownTeam(String),

    #[error("no orderings to search (check --min-games/--max-games/--require)")]
    NoOrderings,

    #[error("invalid day window {min}..={max} (need 1 <= min <= max)")]
    InvalidWindow { min: i64, max: i64 },
}

/// Problems reading team lists or schedules from disk.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing column {column:?}", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{team}: unparseable date {value:?}")]
    BadDate { team: String, value: String },

    #[error("no schedule file for required team {0}")]
    MissingSchedule(String),
}

/// Problems with the optional distance matrix.
#[derive(Debug, Error)]
pub enum DistanceError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed distance matrix {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no distance from {from} to {to}")]
    MissingPair { from: String, to: String },
}

/// Top-level error for callers that drive a full planning run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Find(#[from] FindError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Distance(#[from] DistanceError),

    #[error("cannot write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
