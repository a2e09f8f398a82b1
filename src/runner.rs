// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::PlanOptions,
    distance::DistanceMatrix,
    error::{ConfigError, Result},
    file,
    finder::DateFinder,
    ordering::{self, Ordering},
    progress::Progress,
    report::{self, TripReport},
    schedule::ScheduleTable,
    teams::TeamList,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub orderings: usize,
    pub trips: usize,
    pub file_written: PathBuf,
}

/// Canonical team list: the configured file, else the built-in MLB list.
pub fn load_teams(options: &PlanOptions) -> Result<TeamList> {
    Ok(match &options.input.teams_file {
        Some(path) => TeamList::load(path)?,
        None => TeamList::mlb(),
    })
}

/// Orderings to search for `options`. Unlike the bare generator, an empty
/// result is a configuration error here.
pub fn orderings_for(options: &PlanOptions, teams: &TeamList) -> Result<Vec<Ordering>> {
    let s = &options.search;
    let rivals = s.rivals.as_ref().map(|(a, b)| (a.as_str(), b.as_str()));
    let orderings = ordering::generate_orderings(
        &teams.names(),
        s.min_games,
        s.max_games,
        &s.required_teams,
        rivals,
    );
    if orderings.is_empty() {
        return Err(ConfigError::NoOrderings.into());
    }
    Ok(orderings)
}

/// Everything short of writing: validate, load inputs, search, build rows.
pub fn plan(
    options: &PlanOptions,
    teams: &TeamList,
    progress: Option<&mut dyn Progress>,
) -> Result<(usize, TripReport)> {
    options.validate(teams)?;

    let table = ScheduleTable::load(teams, &options.input.schedules_dir, &options.search.required_teams)?;
    let distances = match &options.input.distances_file {
        Some(path) => Some(DistanceMatrix::load(path)?),
        None => None,
    };

    let orderings = orderings_for(options, teams)?;
    let finder = DateFinder::new(&table).with_window(options.search.window);
    log::info!(
        "Plan: {} orderings from {} (window {}..={} days)",
        orderings.len(), options.search.earliest, options.search.window.min, options.search.window.max
    );

    let report = report::build_report(
        teams,
        finder,
        &orderings,
        options.search.earliest,
        distances.as_ref(),
        progress,
    );
    Ok((orderings.len(), report))
}

/// Top-level runner: plan, then export the table.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(options: &PlanOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let teams = load_teams(options)?;
    run_with(options, &teams, progress)
}

/// Same as [`run`] with the team list already loaded.
pub fn run_with(
    options: &PlanOptions,
    teams: &TeamList,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let (orderings, report) = plan(options, teams, progress)?;

    let (headers, rows) = report.to_table();
    let path = file::write_export(&options.export, &headers, &rows)?;

    Ok(RunSummary { orderings, trips: rows.len(), file_written: path })
}
