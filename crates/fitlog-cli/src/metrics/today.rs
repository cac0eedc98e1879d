use chrono::NaiveDate;
use serde::Serialize;

use super::round1;
use crate::models::ActivityRecord;

/// Totals over the activities logged for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TodayStats {
    pub total_km: f64,
    pub total_calories: u64,
}

/// Sum distance and calories of activities dated `today`.
///
/// Matches on the activity's own date, so a run entered today but dated
/// yesterday does not count.
pub fn today_stats(activities: &[ActivityRecord], today: NaiveDate) -> TodayStats {
    let (km, calories) = activities
        .iter()
        .filter(|a| a.date == today)
        .fold((0.0, 0u64), |(km, cal), a| {
            (km + a.distance_km, cal.saturating_add(u64::from(a.calories)))
        });

    TodayStats {
        total_km: round1(km),
        total_calories: calories,
    }
}
