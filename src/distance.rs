// src/distance.rs
//
// Optional scoring strategy: driving distance between ballparks.
// Not part of the search; the report only adds a column when a matrix
// is supplied.

use std::collections::HashMap;
use std::path::Path;

use crate::error::DistanceError;
use crate::finder::EventSet;

/// Two-level map of driving distance in meters: `from -> to -> meters`.
/// Same shape as the cached `distances.json`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistanceMatrix {
    meters: HashMap<String, HashMap<String, u64>>,
}

impl DistanceMatrix {
    pub fn from_json(text: &str, path: &Path) -> Result<Self, DistanceError> {
        let meters = serde_json::from_str(text)
            .map_err(|source| DistanceError::Json { path: path.to_path_buf(), source })?;
        Ok(Self { meters })
    }

    pub fn load(path: &Path) -> Result<Self, DistanceError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| DistanceError::Io { path: path.to_path_buf(), source })?;
        let m = Self::from_json(&text, path)?;
        log::info!("Distances: {} origins from {}", m.meters.len(), path.display());
        Ok(m)
    }

    /// Meters between two stadiums; zero for a team to itself.
    pub fn between(&self, from: &str, to: &str) -> Result<u64, DistanceError> {
        if from == to {
            return Ok(0);
        }
        self.meters
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .ok_or_else(|| DistanceError::MissingPair { from: s!(from), to: s!(to) })
    }

    /// Sum of hop distances in visit order.
    pub fn trip_distance(&self, events: &EventSet) -> Result<u64, DistanceError> {
        let teams: Vec<&str> = events.iter().map(|e| e.team.as_str()).collect();
        teams
            .windows(2)
            .map(|hop| self.between(hop[0], hop[1]))
            .sum()
    }

    /// Total distance divided by the number of games attended.
    pub fn average_hop_distance(&self, events: &EventSet) -> Result<f64, DistanceError> {
        if events.is_empty() {
            return Ok(0.0);
        }
        Ok(self.trip_distance(events)? as f64 / events.len() as f64)
    }
}
