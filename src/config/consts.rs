// src/config/consts.rs

// Trip shape
pub const DEFAULT_MIN_GAMES: usize = 3;
pub const DEFAULT_MAX_GAMES: usize = 4;
pub const MIN_GAP_DAYS: i64 = 1;
pub const MAX_GAP_DAYS: i64 = 2;
pub const RIVALS: (&str, &str) = ("Red Sox", "Yankees");

// Input
pub const DEFAULT_SCHEDULES_DIR: &str = "schedules";
pub const SCHEDULE_DATE_COL: &str = "START DATE";
pub const SCHEDULE_SUBJECT_COL: &str = "SUBJECT";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "trips";
pub const DISTANCE_HEADER: &str = "Avg distance (km)";
