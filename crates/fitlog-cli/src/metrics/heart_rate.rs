use serde::Serialize;

use crate::models::HeartRateRecord;

/// Qualitative band for a resting heart rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeartRateZone {
    Low,
    Normal,
    Elevated,
}

impl HeartRateZone {
    /// Short remark shown under the latest reading
    pub fn comment(&self) -> &'static str {
        match self {
            HeartRateZone::Low => "Slow heart rate (may reflect your fitness level, keep monitoring)",
            HeartRateZone::Normal => "Normal heart rate",
            HeartRateZone::Elevated => "Fast heart rate, pay attention",
        }
    }
}

/// Below 60 is low, 60..=100 normal, above 100 elevated
pub fn classify_heart_rate(bpm: u32) -> HeartRateZone {
    if bpm < 60 {
        HeartRateZone::Low
    } else if bpm <= 100 {
        HeartRateZone::Normal
    } else {
        HeartRateZone::Elevated
    }
}

/// Reading with the newest `created_at`. On equal timestamps the one stored
/// later wins.
pub fn latest_heart_rate(records: &[HeartRateRecord]) -> Option<&HeartRateRecord> {
    records.iter().fold(None, |best: Option<&HeartRateRecord>, r| match best {
        Some(b) if b.created_at > r.created_at => Some(b),
        _ => Some(r),
    })
}
