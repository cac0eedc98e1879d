use serde::Serialize;

use super::HistoryTable;
use crate::models::ActivityRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRow {
    pub date: String,
    pub activity: &'static str,
    pub distance_km: f64,
    pub duration_min: f64,
    pub calories: u32,
}

/// Activities by date, newest first; same-day entries by entry time, newest first
pub fn activity_list(records: &[ActivityRecord]) -> HistoryTable<ActivityRow> {
    let mut sorted: Vec<&ActivityRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });

    let rows = sorted
        .into_iter()
        .map(|a| ActivityRow {
            date: a.date.format("%Y-%m-%d").to_string(),
            activity: a.activity_type.display_name(),
            distance_km: a.distance_km,
            duration_min: a.duration_min,
            calories: a.calories,
        })
        .collect();

    HistoryTable::new(rows, "No activities yet")
}
