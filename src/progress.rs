// src/progress.rs
use crate::ordering::Ordering;

/// Lightweight progress reporting for the report builder.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of orderings to search.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One ordering has been searched to exhaustion.
    fn item_done(&mut self, _ordering: &Ordering, _trips: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
