use serde::Serialize;

use super::HistoryTable;
use crate::metrics::{classify, BmiCategory};
use crate::models::BmiRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiHistoryRow {
    pub recorded_at: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub category: String,
}

/// Result card shown right after a BMI submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    pub marker: &'static str,
    pub advice: &'static str,
}

/// BMI history, newest measurement first
pub fn bmi_history(records: &[BmiRecord]) -> HistoryTable<BmiHistoryRow> {
    let mut sorted: Vec<&BmiRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let rows = sorted
        .into_iter()
        .map(|r| BmiHistoryRow {
            recorded_at: r.timestamp_formatted(),
            height_cm: r.height_cm,
            weight_kg: r.weight_kg,
            bmi: r.bmi,
            category: r.category_name.clone(),
        })
        .collect();

    HistoryTable::new(rows, "No BMI history yet")
}

pub fn bmi_result(record: &BmiRecord) -> BmiResult {
    let category = classify(record.bmi);
    BmiResult {
        bmi: record.bmi,
        category,
        marker: category.marker(),
        advice: category.advice(),
    }
}
