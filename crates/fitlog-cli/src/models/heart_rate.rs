use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A resting heart-rate reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateRecord {
    /// Calendar day of the reading
    pub date: NaiveDate,

    /// Beats per minute
    #[serde(rename = "heartRate")]
    pub heart_rate_bpm: u32,

    /// When the record was entered
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}
