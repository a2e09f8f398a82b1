// src/finder.rs
//! # Date finder
//!
//! Given one ordering of teams and an earliest date, find concrete trips:
//! one home game per team, in visit order, each game falling inside the
//! [`GapWindow`] that follows the previous team's game.
//!
//! ## Search
//! - The first team takes its first game on or after `earliest`.
//! - Every later team takes its first game in `[prev + min, prev + max]`.
//! - When a later team has nothing in its window, the **whole ordering** is
//!   retried from the day after the first team's game. Alternate dates for
//!   the failing team are never tried on their own.
//! - When the first team has nothing left, the ordering is exhausted.
//!
//! The retry runs as a loop rather than recursion, so a long season cannot
//! grow the call stack.
//!
//! ## Enumeration
//! [`DateFinder::find_all_trips`] repeats the search from `start + 1 day`
//! after every hit. Trips come out in strictly increasing start-date order
//! and the iterator ends at the first exhausted search.

use chrono::{ Duration, NaiveDate };

use crate::config::consts::{ MAX_GAP_DAYS, MIN_GAP_DAYS };
use crate::error::FindError;
use crate::schedule::ScheduleTable;

/// Allowed gap, in whole days, between consecutive games of a trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GapWindow {
    pub min: i64,
    pub max: i64,
}

impl Default for GapWindow {
    fn default() -> Self {
        Self { min: MIN_GAP_DAYS, max: MAX_GAP_DAYS }
    }
}

impl GapWindow {
    pub fn new(min: i64, max: i64) -> Self { Self { min, max } }

    /// Inclusive date bounds for the game after one played on `prev`.
    /// `None` when the bounds fall off the calendar.
    pub fn after(&self, prev: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let lo = prev.checked_add_signed(Duration::days(self.min))?;
        let hi = prev.checked_add_signed(Duration::days(self.max))?;
        Some((lo, hi))
    }

    pub fn contains_gap(&self, prev: NaiveDate, next: NaiveDate) -> bool {
        let gap = (next - prev).num_days();
        self.min <= gap && gap <= self.max
    }
}

/// One team's chosen game within a trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub team: String,
    pub date: NaiveDate,
    pub opponent: String,
}

/// One concrete trip: an event per team, kept in visit order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EventSet {
    events: Vec<Event>,
}

impl EventSet {
    pub fn len(&self) -> usize { self.events.len() }
    pub fn is_empty(&self) -> bool { self.events.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Event> { self.events.iter() }

    pub fn get(&self, team: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.team == team)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.events.first().map(|e| e.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.events.last().map(|e| e.date)
    }

    /// Every adjacent pair honours `window`.
    pub fn satisfies(&self, window: &GapWindow) -> bool {
        self.events
            .windows(2)
            .all(|pair| window.contains_gap(pair[0].date, pair[1].date))
    }
}

impl<'a> IntoIterator for &'a EventSet {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;
    fn into_iter(self) -> Self::IntoIter { self.events.iter() }
}

/// An event set plus the date its first game is played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    pub start: NaiveDate,
    pub events: EventSet,
}

/// Search over a read-only schedule table. Cheap to copy.
#[derive(Clone, Copy, Debug)]
pub struct DateFinder<'a> {
    table: &'a ScheduleTable,
    window: GapWindow,
}

impl<'a> DateFinder<'a> {
    pub fn new(table: &'a ScheduleTable) -> Self {
        Self { table, window: GapWindow::default() }
    }

    pub fn with_window(mut self, window: GapWindow) -> Self {
        self.window = window;
        self
    }

    pub fn window(&self) -> GapWindow { self.window }

    /// First game of `team` on or after `earliest`, and no later than
    /// `latest` when given.
    pub fn find_one_date(
        &self,
        team: &str,
        earliest: NaiveDate,
        latest: Option<NaiveDate>,
    ) -> Result<Event, FindError> {
        let games = self.table.games(team);
        let ix = games.partition_point(|g| g.date < earliest);

        match games.get(ix) {
            Some(g) if latest.is_none_or(|l| g.date <= l) => Ok(Event {
                team: s!(team),
                date: g.date,
                opponent: g.opponent.clone(),
            }),
            _ => Err(FindError::NoMatchingDate { team: s!(team), earliest, latest }),
        }
    }

    /// Earliest complete trip for `order` whose first game is on or after
    /// `earliest`.
    pub fn find_event_set(&self, earliest: NaiveDate, order: &[String]) -> Result<Trip, FindError> {
        if order.is_empty() {
            return Err(FindError::NoDatesSatisfyRequirements { earliest });
        }

        let mut frontier = earliest;
        'attempt: loop {
            let mut events: Vec<Event> = Vec::with_capacity(order.len());

            for team in order {
                let found = match events.last() {
                    None => self.find_one_date(team, frontier, None),
                    Some(prev) => match self.window.after(prev.date) {
                        Some((lo, hi)) => self.find_one_date(team, lo, Some(hi)),
                        None => Err(FindError::NoMatchingDate {
                            team: team.clone(),
                            earliest: prev.date,
                            latest: None,
                        }),
                    },
                };

                match found {
                    Ok(ev) => events.push(ev),
                    Err(miss) => {
                        let Some(first) = events.first() else {
                            return Err(FindError::NoDatesSatisfyRequirements { earliest: frontier });
                        };
                        log::trace!("Finder: {miss}; retrying {:?} after {}", order, first.date);
                        match first.date.succ_opt() {
                            Some(next) => {
                                frontier = next;
                                continue 'attempt;
                            }
                            None => return Err(FindError::NoDatesSatisfyRequirements { earliest: frontier }),
                        }
                    }
                }
            }

            let start = events[0].date;
            return Ok(Trip { start, events: EventSet { events } });
        }
    }

    /// All disjoint trips for `order` from `earliest` on, lazily.
    pub fn find_all_trips<'o>(&self, earliest: NaiveDate, order: &'o [String]) -> Trips<'o>
    where
        'a: 'o,
    {
        Trips { finder: *self, order, next_earliest: Some(earliest) }
    }
}

/// Iterator returned by [`DateFinder::find_all_trips`].
/// Finite, and done for good once a search comes back empty.
#[derive(Clone, Debug)]
pub struct Trips<'a> {
    finder: DateFinder<'a>,
    order: &'a [String],
    next_earliest: Option<NaiveDate>,
}

impl Iterator for Trips<'_> {
    type Item = Trip;

    fn next(&mut self) -> Option<Trip> {
        let earliest = self.next_earliest.take()?;
        match self.finder.find_event_set(earliest, self.order) {
            Ok(trip) => {
                self.next_earliest = trip.start.succ_opt();
                Some(trip)
            }
            Err(_) => None,
        }
    }
}

impl std::iter::FusedIterator for Trips<'_> {}
