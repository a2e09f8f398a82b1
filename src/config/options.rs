// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use chrono::{ Local, NaiveDate };

use super::consts::*;
use crate::error::ConfigError;
use crate::finder::GapWindow;
use crate::teams::TeamList;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PlanOptions {
    pub search: SearchOptions,
    pub input: InputOptions,
    pub export: ExportOptions,
}

impl PlanOptions {
    /// Reject settings the planner cannot act on.
    /// An empty length range is reported here even though the generator
    /// itself just yields nothing for it.
    pub fn validate(&self, teams: &TeamList) -> Result<(), ConfigError> {
        let s = &self.search;

        if s.window.min < 1 || s.window.min > s.window.max {
            return Err(ConfigError::InvalidWindow { min: s.window.min, max: s.window.max });
        }

        if s.min_games == 0 || s.min_games > s.max_games || s.min_games > teams.len() {
            return Err(ConfigError::InvalidOrderingLength {
                min: s.min_games,
                max: s.max_games,
                teams: teams.len(),
            });
        }

        for name in &s.required_teams {
            if teams.position(name).is_none() {
                return Err(ConfigError::UnknownTeam(name.clone()));
            }
        }
        if s.required_teams.len() > s.max_games {
            return Err(ConfigError::NoOrderings);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub min_games: usize,
    pub max_games: usize,
    /// Every base ordering must contain all of these.
    pub required_teams: Vec<String>,
    /// Initial search frontier for every ordering.
    pub earliest: NaiveDate,
    pub window: GapWindow,
    /// Pair whose positions get swapped during augmentation.
    /// Only applies to orderings holding both teams.
    pub rivals: Option<(String, String)>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_games: DEFAULT_MIN_GAMES,
            max_games: DEFAULT_MAX_GAMES,
            required_teams: Vec::new(),
            earliest: Local::now().date_naive(),
            window: GapWindow::default(),
            rivals: Some((s!(RIVALS.0), s!(RIVALS.1))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputOptions {
    pub schedules_dir: PathBuf,
    /// Replaces the built-in team list when set.
    pub teams_file: Option<PathBuf>,
    pub distances_file: Option<PathBuf>,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            schedules_dir: PathBuf::from(DEFAULT_SCHEDULES_DIR),
            teams_file: None,
            distances_file: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Final report path. A user-typed extension wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        match &self.out_path.ext {
            Some(ext) => name.push(ext),
            None => name.push(self.format.ext()),
        }
        self.out_path.dir.join(name)
    }

    /// Parse user text into dir + stem (+ explicit extension).
    /// Text ending in a separator, or naming an existing directory,
    /// keeps the default file name inside that directory.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);

        if crate::file::looks_like_dir_hint(p) || p.is_dir() {
            self.out_path = OutputPath { dir: p.to_path_buf(), ..OutputPath::default() };
            return;
        }

        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
