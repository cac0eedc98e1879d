use serde::Serialize;

use super::HistoryTable;
use crate::metrics::{classify_heart_rate, latest_heart_rate, HeartRateZone};
use crate::models::HeartRateRecord;

/// Latest reading with its comment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeartRateInfo {
    pub date: String,
    pub bpm: u32,
    pub zone: HeartRateZone,
    pub comment: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeartRateRow {
    pub date: String,
    pub bpm: u32,
    pub comment: &'static str,
}

/// `None` hides the panel when nothing was recorded
pub fn heart_rate_info(records: &[HeartRateRecord]) -> Option<HeartRateInfo> {
    latest_heart_rate(records).map(|r| {
        let zone = classify_heart_rate(r.heart_rate_bpm);
        HeartRateInfo {
            date: r.date.format("%Y-%m-%d").to_string(),
            bpm: r.heart_rate_bpm,
            zone,
            comment: zone.comment(),
        }
    })
}

/// All readings, most recently entered first
pub fn heart_rate_history(records: &[HeartRateRecord]) -> HistoryTable<HeartRateRow> {
    // Stable sort on reversed input: equal timestamps keep later insertions first
    let mut sorted: Vec<&HeartRateRecord> = records.iter().rev().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let rows = sorted
        .into_iter()
        .map(|r| HeartRateRow {
            date: r.date.format("%Y-%m-%d").to_string(),
            bpm: r.heart_rate_bpm,
            comment: classify_heart_rate(r.heart_rate_bpm).comment(),
        })
        .collect();

    HistoryTable::new(rows, "No heart rate readings yet")
}
