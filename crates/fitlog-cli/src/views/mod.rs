//! View models
//!
//! Read-only projections of the store for the CLI to print. Nothing here
//! writes; every command that mutates the store re-renders from scratch.

mod activities;
mod bmi;
mod dashboard;
mod heart_rate;

pub use activities::{activity_list, ActivityRow};
pub use bmi::{bmi_history, bmi_result, BmiHistoryRow, BmiResult};
pub use dashboard::{dashboard, Dashboard};
pub use heart_rate::{heart_rate_history, heart_rate_info, HeartRateInfo, HeartRateRow};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;

/// A history table: newest rows first, or a single placeholder when empty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryTable<R> {
    pub rows: Vec<R>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl<R> HistoryTable<R> {
    fn new(rows: Vec<R>, placeholder: &'static str) -> Self {
        let placeholder = rows.is_empty().then_some(placeholder);
        Self { rows, placeholder }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every view, rendered from one read of the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSet {
    pub dashboard: Dashboard,
    pub bmi_history: HistoryTable<BmiHistoryRow>,
    pub activities: HistoryTable<ActivityRow>,
    pub heart_rate: Option<HeartRateInfo>,
}

/// Render all four views
pub fn render_all<S: KeyValueStore>(tracker: &Tracker<S>, today: NaiveDate) -> Result<ViewSet> {
    let bmi_records = tracker.bmi_history()?;
    let activities = tracker.activities()?;
    let heart_rates = tracker.heart_rates()?;

    Ok(ViewSet {
        dashboard: dashboard(&bmi_records, &activities, &heart_rates, today),
        bmi_history: bmi_history(&bmi_records),
        activities: activity_list(&activities),
        heart_rate: heart_rate_info(&heart_rates),
    })
}
