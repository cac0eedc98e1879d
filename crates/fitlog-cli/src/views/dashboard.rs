use chrono::NaiveDate;
use serde::Serialize;

use crate::metrics::{latest_heart_rate, today_stats, TodayStats};
use crate::models::{ActivityRecord, BmiRecord, HeartRateRecord};

/// Summary cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// BMI of the most recently stored measurement
    pub current_bmi: Option<f64>,
    pub today: TodayStats,
    pub latest_heart_rate: Option<u32>,
}

impl Dashboard {
    pub fn bmi_display(&self) -> String {
        self.current_bmi
            .map(|b| b.to_string())
            .unwrap_or_else(|| "--".to_string())
    }

    pub fn km_display(&self) -> String {
        format!("{} km", self.today.total_km)
    }

    pub fn calories_display(&self) -> String {
        format!("{} cal", self.today.total_calories)
    }

    pub fn heart_rate_display(&self) -> String {
        match self.latest_heart_rate {
            Some(bpm) => format!("{} bpm", bpm),
            None => "-- bpm".to_string(),
        }
    }
}

pub fn dashboard(
    bmi_records: &[BmiRecord],
    activities: &[ActivityRecord],
    heart_rates: &[HeartRateRecord],
    today: NaiveDate,
) -> Dashboard {
    Dashboard {
        current_bmi: bmi_records.last().map(|r| r.bmi),
        today: today_stats(activities, today),
        latest_heart_rate: latest_heart_rate(heart_rates).map(|r| r.heart_rate_bpm),
    }
}
