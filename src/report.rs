// src/report.rs
//
// Trip Report Builder: project every trip onto the canonical team columns
// and sort by first game. No search logic lives here.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::config::consts::DISTANCE_HEADER;
use crate::distance::DistanceMatrix;
use crate::error::DistanceError;
use crate::finder::{ DateFinder, Event, EventSet };
use crate::ordering::Ordering;
use crate::progress::Progress;
use crate::teams::TeamList;

/// `"Yankees, Fri Jun 1"`
pub fn format_cell(event: &Event) -> String {
    format!("{}, {}", event.opponent, event.date.format("%a %b %-d"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    /// Earliest game in the row; the sort key.
    pub first_date: NaiveDate,
    /// One cell per canonical team, empty when the team is not visited.
    pub cells: Vec<String>,
    pub avg_distance_km: Option<f64>,
}

impl ReportRow {
    pub fn from_events(teams: &TeamList, events: &EventSet) -> Option<Self> {
        let first_date = events.iter().map(|e| e.date).min()?;
        let cells = teams
            .iter()
            .map(|t| events.get(&t.name).map(format_cell).unwrap_or_default())
            .collect();
        Some(Self { first_date, cells, avg_distance_km: None })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripReport {
    pub headers: Vec<String>,
    pub rows: Vec<ReportRow>,
    with_distance: bool,
}

impl TripReport {
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Flat string table, distance column appended when scored.
    pub fn to_table(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let mut headers = self.headers.clone();
        if self.with_distance {
            headers.push(s!(DISTANCE_HEADER));
        }
        let rows = self
            .rows
            .iter()
            .map(|r| {
                let mut cells = r.cells.clone();
                if self.with_distance {
                    cells.push(r.avg_distance_km.map(|km| format!("{km:.1}")).unwrap_or_default());
                }
                cells
            })
            .collect();
        (headers, rows)
    }
}

/// Search every ordering from `earliest` and collect one row per trip.
/// Orderings without trips contribute nothing. A trip the distance matrix
/// cannot score keeps its row with a blank distance; each missing pair is
/// reported once.
pub fn build_report(
    teams: &TeamList,
    finder: DateFinder<'_>,
    orderings: &[Ordering],
    earliest: NaiveDate,
    distances: Option<&DistanceMatrix>,
    mut progress: Option<&mut dyn Progress>,
) -> TripReport {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(orderings.len());
    }

    let mut rows = Vec::new();
    let mut unscored: HashSet<(String, String)> = HashSet::new();
    for ordering in orderings {
        let mut found = 0usize;
        for trip in finder.find_all_trips(earliest, ordering.teams()) {
            let Some(mut row) = ReportRow::from_events(teams, &trip.events) else { continue };
            if let Some(m) = distances {
                row.avg_distance_km = match m.average_hop_distance(&trip.events) {
                    Ok(meters) => Some(meters / 1000.0),
                    Err(DistanceError::MissingPair { from, to }) => {
                        if unscored.insert((from.clone(), to.clone())) {
                            let msg = format!("No distance from {from} to {to}; leaving those trips unscored");
                            log::warn!("Report: {msg}");
                            if let Some(p) = progress.as_deref_mut() {
                                p.log(&msg);
                            }
                        }
                        None
                    }
                    Err(e) => {
                        log::warn!("Report: {e}");
                        None
                    }
                };
            }
            rows.push(row);
            found += 1;
        }
        log::debug!("Report: {ordering} → {found} trips");
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(ordering, found);
        }
    }

    // Stable: equal dates keep ordering-generation order.
    rows.sort_by_key(|r| r.first_date);
    log::info!("Report: {} trips over {} orderings", rows.len(), orderings.len());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    TripReport { headers: teams.names(), rows, with_distance: distances.is_some() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{ GameRecord, ScheduleTable };
    use crate::teams::Team;

    fn teams(names: &[&str]) -> TeamList {
        TeamList::new(names.iter().map(|n| Team::new("X", n, "S", "A", "L", "D")).collect())
    }

    fn ordering(names: &[&str]) -> Ordering {
        Ordering::new(names.iter().map(|n| s!(*n)).collect())
    }

    #[test]
    fn cell_format() {
        let ev = Event { team: s!("Red Sox"), date: ymd!(2018, 6, 1), opponent: s!("Yankees") };
        assert_eq!(format_cell(&ev), "Yankees, Fri Jun 1");
    }

    #[test]
    fn rows_follow_canonical_columns_and_sort_by_first_game() {
        let list = teams(&["A", "B", "C"]);
        let table = ScheduleTable::from_records(vec![
            ("A", vec![GameRecord::new(ymd!(2018, 6, 10), "a10")]),
            ("B", vec![GameRecord::new(ymd!(2018, 6, 4), "b4"), GameRecord::new(ymd!(2018, 6, 11), "b11")]),
            ("C", vec![GameRecord::new(ymd!(2018, 6, 5), "c5")]),
        ]);
        let finder = DateFinder::new(&table);
        let orderings = vec![ordering(&["A", "B"]), ordering(&["B", "C"]), ordering(&["A", "C"])];

        let report = build_report(&list, finder, &orderings, ymd!(2018, 6, 1), None, None);
        assert_eq!(report.headers, vec!["A", "B", "C"]);
        assert_eq!(report.len(), 2); // A→C never fits

        let (headers, rows) = report.to_table();
        assert_eq!(headers.len(), 3);
        assert_eq!(rows[0], vec![s!(""), s!("b4, Mon Jun 4"), s!("c5, Tue Jun 5")]);
        assert_eq!(rows[1], vec![s!("a10, Sun Jun 10"), s!("b11, Mon Jun 11"), s!("")]);
    }

    #[test]
    fn distance_column_only_when_scored() {
        let list = teams(&["A", "B"]);
        let table = ScheduleTable::from_records(vec![
            ("A", vec![GameRecord::new(ymd!(2018, 6, 1), "x")]),
            ("B", vec![GameRecord::new(ymd!(2018, 6, 2), "y")]),
        ]);
        let m = DistanceMatrix::from_json(r#"{"A": {"B": 3000}}"#, std::path::Path::new("d.json")).unwrap();
        let orderings = vec![ordering(&["A", "B"])];

        let plain = build_report(&list, DateFinder::new(&table), &orderings, ymd!(2018, 6, 1), None, None);
        assert_eq!(plain.to_table().0.len(), 2);

        let scored = build_report(&list, DateFinder::new(&table), &orderings, ymd!(2018, 6, 1), Some(&m), None);
        let (headers, rows) = scored.to_table();
        assert_eq!(headers.last().unwrap(), DISTANCE_HEADER);
        assert_eq!(rows[0][2], "1.5");
    }

    #[derive(Default)]
    struct Notes(Vec<String>);

    impl Progress for Notes {
        fn log(&mut self, msg: &str) { self.0.push(s!(msg)); }
    }

    #[test]
    fn partial_matrix_keeps_every_row() {
        let list = teams(&["A", "B", "C"]);
        let table = ScheduleTable::from_records(vec![
            ("A", vec![GameRecord::new(ymd!(2018, 6, 1), "x")]),
            ("B", vec![GameRecord::new(ymd!(2018, 6, 2), "y")]),
            ("C", vec![GameRecord::new(ymd!(2018, 6, 3), "z")]),
        ]);
        let m = DistanceMatrix::from_json(r#"{"A": {"B": 3000}}"#, std::path::Path::new("d.json")).unwrap();
        let orderings = vec![ordering(&["A", "B"]), ordering(&["B", "C"]), ordering(&["A", "B", "C"])];

        let mut notes = Notes::default();
        let report = build_report(
            &list, DateFinder::new(&table), &orderings, ymd!(2018, 6, 1), Some(&m), Some(&mut notes),
        );
        let (headers, rows) = report.to_table();
        assert_eq!(headers.len(), 4);
        assert_eq!(rows.len(), 3);
        // Stable sort on first date: A→B, A→B→C, then B→C.
        assert_eq!(rows[0][3], "1.5");
        assert_eq!(rows[1][2], "z, Sun Jun 3");
        assert_eq!(rows[1][3], "");
        assert_eq!(rows[2][3], "");
        // B→C is missing twice but noted once.
        assert_eq!(notes.0.len(), 1);
        assert!(notes.0[0].contains("B to C"));
    }
}
