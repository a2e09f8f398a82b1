// src/schedule.rs
//
// Schedule Table: per-team home games, date-ascending, one game per day.
// Built once before any search and never mutated afterwards.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use crate::config::consts::{ SCHEDULE_DATE_COL, SCHEDULE_SUBJECT_COL };
use crate::error::ScheduleError;
use crate::teams::TeamList;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub opponent: String,
}

impl GameRecord {
    pub fn new(date: NaiveDate, opponent: &str) -> Self {
        Self { date, opponent: s!(opponent) }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScheduleTable {
    by_team: HashMap<String, Vec<GameRecord>>,
}

impl ScheduleTable {
    pub fn new() -> Self { Self::default() }

    /// Insert (or replace) one team's games. Sorts by date and keeps only
    /// the first game of any day (double-headers count once).
    pub fn insert(&mut self, team: &str, mut games: Vec<GameRecord>) {
        games.sort_by(|a, b| a.date.cmp(&b.date));
        games.dedup_by(|later, first| later.date == first.date);
        self.by_team.insert(s!(team), games);
    }

    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<GameRecord>)>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for (team, games) in records {
            table.insert(team.as_ref(), games);
        }
        table
    }

    /// Games for `team`, date-ascending. Unknown teams have none.
    pub fn games(&self, team: &str) -> &[GameRecord] {
        self.by_team.get(team).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn team_count(&self) -> usize { self.by_team.len() }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.by_team.values().filter_map(|g| g.last()).map(|g| g.date).max()
    }

    /// Load `<dir>/<short_name>.csv` for every team in canonical order.
    /// Missing files are skipped, unless the team is in `required`.
    pub fn load(teams: &TeamList, dir: &Path, required: &[String]) -> Result<Self, ScheduleError> {
        let mut table = Self::new();

        for team in teams {
            let path = dir.join(format!("{}.csv", team.short_name()));
            if !path.is_file() {
                if required.iter().any(|r| *r == team.name) {
                    return Err(ScheduleError::MissingSchedule(team.name.clone()));
                }
                log::warn!("Schedules: no file for {} ({})", team.name, path.display());
                continue;
            }

            let file = std::fs::File::open(&path)
                .map_err(|source| ScheduleError::Io { path: path.clone(), source })?;
            let games = parse_schedule(&team.name, file, &path)?;
            log::debug!("Schedules: {} home games for {}", games.len(), team.name);
            table.insert(&team.name, games);
        }

        log::info!("Schedules: loaded {} of {} teams", table.team_count(), teams.len());
        Ok(table)
    }
}

/// Parse one downloadable home-game schedule.
/// Needs `START DATE` and `SUBJECT` columns; everything else is ignored.
pub fn parse_schedule<R: Read>(team: &str, reader: R, path: &Path) -> Result<Vec<GameRecord>, ScheduleError> {
    let csv_err = |source| ScheduleError::Csv { path: path.to_path_buf(), source };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let col = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
            .ok_or(ScheduleError::MissingColumn { path: path.to_path_buf(), column: name })
    };
    let date_ix = col(SCHEDULE_DATE_COL)?;
    let subject_ix = col(SCHEDULE_SUBJECT_COL)?;

    let mut games = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(csv_err)?;
        let raw_date = rec.get(date_ix).unwrap_or("");
        if raw_date.is_empty() && rec.iter().all(str::is_empty) {
            continue; // trailing blank line
        }
        let date = parse_date(raw_date).ok_or_else(|| ScheduleError::BadDate {
            team: s!(team),
            value: s!(raw_date),
        })?;
        let opponent = opponent_from_subject(rec.get(subject_ix).unwrap_or(""));
        games.push(GameRecord { date, opponent });
    }
    Ok(games)
}

/// `06/01/18`, `06/01/2018` or `2018-06-01`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let t = text.trim();
    ["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(t, fmt).ok())
}

/// "Yankees at Red Sox" → "Yankees". Subjects without " at " are kept whole.
pub fn opponent_from_subject(subject: &str) -> String {
    match subject.split_once(" at ") {
        Some((away, _home)) => s!(away.trim()),
        None => s!(subject.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_downloadable_schedule() {
        let text = "\
START DATE,START TIME,SUBJECT,LOCATION
06/02/18,07:10 PM,Tigers at Red Sox,Fenway Park - Boston
06/01/18,07:10 PM,Yankees at Red Sox,Fenway Park - Boston
";
        let games = parse_schedule("Red Sox", text.as_bytes(), &PathBuf::from("redsox.csv")).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0], GameRecord::new(ymd!(2018, 6, 2), "Tigers"));
        assert_eq!(games[1].opponent, "Yankees");
    }

    #[test]
    fn missing_subject_column_is_reported() {
        let text = "START DATE,START TIME\n06/02/18,07:10 PM\n";
        let err = parse_schedule("Red Sox", text.as_bytes(), &PathBuf::from("x.csv")).unwrap_err();
        assert!(matches!(err, ScheduleError::MissingColumn { column: "SUBJECT", .. }));
    }

    #[test]
    fn bad_date_fails_fast() {
        let text = "START DATE,SUBJECT\nsoon,Yankees at Red Sox\n";
        let err = parse_schedule("Red Sox", text.as_bytes(), &PathBuf::from("x.csv")).unwrap_err();
        assert!(matches!(err, ScheduleError::BadDate { .. }));
    }

    #[test]
    fn insert_sorts_and_collapses_double_headers() {
        let mut table = ScheduleTable::new();
        table.insert("Mets", vec![
            GameRecord::new(ymd!(2018, 6, 3), "Cubs"),
            GameRecord::new(ymd!(2018, 6, 1), "Braves"),
            GameRecord::new(ymd!(2018, 6, 1), "Braves (2)"),
        ]);
        let games = table.games("Mets");
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].opponent, "Braves");
        assert_eq!(games[1].date, ymd!(2018, 6, 3));
        assert!(table.games("Expos").is_empty());
        assert_eq!(table.last_date(), Some(ymd!(2018, 6, 3)));
    }

    #[test]
    fn date_formats() {
        assert_eq!(parse_date("06/01/18"), Some(ymd!(2018, 6, 1)));
        assert_eq!(parse_date("06/01/2018"), Some(ymd!(2018, 6, 1)));
        assert_eq!(parse_date(" 2018-06-01 "), Some(ymd!(2018, 6, 1)));
        assert_eq!(parse_date("June 1"), None);
    }
}
