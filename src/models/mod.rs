pub mod activity;
pub mod class;

pub use activity::{ActivityRecord, ActivityStatus, NewActivityRequest};
pub use class::{ClassRecord, NewClassRequest};

use serde::Serialize;

/// Dashboard counters, always derived by traversal so they can never drift
/// from the collections they summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub classes: usize,
    pub students: i64,
    pub activities: usize,
}
