// src/cli.rs
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ Parser, ValueEnum };

use crate::config::consts::{ DEFAULT_MAX_GAMES, DEFAULT_MIN_GAMES, DEFAULT_SCHEDULES_DIR, RIVALS };
use crate::config::options::{ ExportFormat, PlanOptions };
use crate::error::ConfigError;
use crate::finder::GapWindow;
use crate::ordering::Ordering;
use crate::progress::Progress;
use crate::teams::TeamList;

/// Plan multi-city ballpark road trips from home-game schedules.
#[derive(Parser, Debug)]
#[command(name = "roadtrip", version, about, long_about = None)]
pub struct Cli {
    /// Fewest games per trip
    #[arg(long, default_value_t = DEFAULT_MIN_GAMES)]
    pub min_games: usize,

    /// Most games per trip
    #[arg(long, default_value_t = DEFAULT_MAX_GAMES)]
    pub max_games: usize,

    /// Team every trip must visit (repeatable)
    #[arg(short = 'r', long = "require", value_name = "TEAM")]
    pub required: Vec<String>,

    /// First day a trip may start (YYYY-MM-DD); defaults to today
    #[arg(long = "from", value_name = "DATE", value_parser = parse_day)]
    pub from: Option<NaiveDate>,

    /// Most days allowed between consecutive games
    #[arg(long, default_value_t = crate::config::consts::MAX_GAP_DAYS)]
    pub max_gap: i64,

    /// Directory holding <team>.csv home schedules
    #[arg(long, default_value = DEFAULT_SCHEDULES_DIR)]
    pub schedules: PathBuf,

    /// CSV team list replacing the built-in MLB teams
    #[arg(long, value_name = "FILE")]
    pub teams: Option<PathBuf>,

    /// JSON distance matrix; adds an average-distance column
    #[arg(long, value_name = "FILE")]
    pub distances: Option<PathBuf>,

    /// Skip the rival-swap orderings
    #[arg(long)]
    pub no_rivals: bool,

    /// Output file, or directory ending in '/'
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Leave out the header row
    #[arg(long)]
    pub no_headers: bool,

    /// Print teams in canonical order and exit
    #[arg(long)]
    pub list_teams: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| format!("{s:?}: {e}"))
}

impl Cli {
    /// Fold arguments over the defaults. Team names are resolved against
    /// `teams` so "yankees" and "New York Yankees" both work.
    pub fn to_options(&self, teams: &TeamList) -> Result<PlanOptions, ConfigError> {
        let mut opts = PlanOptions::default();

        let s = &mut opts.search;
        s.min_games = self.min_games;
        s.max_games = self.max_games;
        if let Some(d) = self.from {
            s.earliest = d;
        }
        s.window = GapWindow::new(GapWindow::default().min, self.max_gap);
        s.rivals = if self.no_rivals { None } else { Some((s!(RIVALS.0), s!(RIVALS.1))) };

        s.required_teams = Vec::with_capacity(self.required.len());
        for text in &self.required {
            let name = teams
                .resolve(text)
                .ok_or_else(|| ConfigError::UnknownTeam(text.clone()))?;
            if !s.required_teams.iter().any(|r| r == name) {
                s.required_teams.push(s!(name));
            }
        }

        opts.input.schedules_dir = self.schedules.clone();
        opts.input.teams_file = self.teams.clone();
        opts.input.distances_file = self.distances.clone();

        opts.export.format = match self.format {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        };
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts.export.include_headers = !self.no_headers;

        Ok(opts)
    }
}

/// One stderr line per searched ordering.
pub struct CliProgress {
    total: usize,
    done: usize,
}

impl CliProgress {
    pub fn new() -> Self { Self { total: 0, done: 0 } }
}

impl Default for CliProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Searching {total} orderings…");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, ordering: &Ordering, trips: usize) {
        self.done += 1;
        if trips > 0 {
            eprintln!("[{}/{}] {ordering}: {trips} trips", self.done, self.total);
        }
    }

    fn finish(&mut self) {
        eprintln!("Searched {} of {} orderings.", self.done, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_map_onto_options() {
        let cli = Cli::try_parse_from([
            "roadtrip", "--min-games", "2", "--max-games", "3",
            "-r", "yankees", "--require", "Boston Red Sox", "-r", "Yankees",
            "--from", "2018-06-01", "--format", "tsv", "-o", "out/june.tsv",
        ]).unwrap();
        let opts = cli.to_options(&TeamList::mlb()).unwrap();

        assert_eq!(opts.search.min_games, 2);
        assert_eq!(opts.search.max_games, 3);
        assert_eq!(opts.search.required_teams, vec![s!("Yankees"), s!("Red Sox")]);
        assert_eq!(opts.search.earliest, ymd!(2018, 6, 1));
        assert_eq!(opts.search.window, GapWindow::new(1, 2));
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(opts.export.out_path().ends_with("june.tsv"));
    }

    #[test]
    fn unknown_required_team_is_rejected() {
        let cli = Cli::try_parse_from(["roadtrip", "-r", "Expos"]).unwrap();
        assert_eq!(
            cli.to_options(&TeamList::mlb()).unwrap_err(),
            ConfigError::UnknownTeam(s!("Expos"))
        );
    }

    #[test]
    fn bad_date_is_a_parse_error() {
        assert!(Cli::try_parse_from(["roadtrip", "--from", "06/01/18"]).is_err());
    }

    #[test]
    fn no_rivals_drops_the_pair() {
        let cli = Cli::try_parse_from(["roadtrip", "--no-rivals"]).unwrap();
        assert_eq!(cli.to_options(&TeamList::mlb()).unwrap().search.rivals, None);
    }
}
