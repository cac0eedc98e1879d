use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// One BMI measurement, created per successful BMI submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    /// When the measurement was taken
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,

    /// Height in centimetres
    #[serde(rename = "height")]
    pub height_cm: f64,

    /// Weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,

    /// BMI rounded to one decimal
    pub bmi: f64,

    /// Category label at the time of measurement
    #[serde(rename = "category")]
    pub category_name: String,
}

impl BmiRecord {
    /// Timestamp in local time, minute precision
    pub fn timestamp_formatted(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}
