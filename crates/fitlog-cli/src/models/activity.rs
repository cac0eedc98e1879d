use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Supported activity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Walking,
    Running,
}

impl ActivityType {
    /// Key used in storage and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Walking => "walking",
            ActivityType::Running => "running",
        }
    }

    /// Human-readable label for tables
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityType::Walking => "Walking",
            ActivityType::Running => "Running",
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged walk or run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Calendar day the activity happened on
    pub date: NaiveDate,

    /// Activity kind
    #[serde(rename = "type")]
    pub activity_type: ActivityType,

    /// Distance in kilometres
    #[serde(rename = "distance")]
    pub distance_km: f64,

    /// Duration in minutes
    #[serde(rename = "duration")]
    pub duration_min: f64,

    /// Estimated calories burned
    pub calories: u32,

    /// When the record was entered
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}
