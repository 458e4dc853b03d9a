//! Aggregated statistics over a client's past activities

use serde::{Deserialize, Serialize};

use super::activity::ActivityType;

/// Counters for one `(year, activity type)` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypeStatistics {
    /// Number of past activities of this type in the year
    pub num_activities: i64,
    /// Sum of per-activity whole-minute durations
    pub num_minutes: i64,
}

/// Per-type statistics entry within a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub statistics: TypeStatistics,
}

/// All statistics for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearStatistics {
    pub year: i32,
    pub statistics_by_type: Vec<TypeEntry>,
}
