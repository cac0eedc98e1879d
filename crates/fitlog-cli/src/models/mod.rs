//! Record types persisted by the tracker
//!
//! Field names on the wire follow the layout written by the original browser
//! app, so arrays exported from there load unchanged.

mod activity;
mod bmi;
mod heart_rate;

pub use activity::{ActivityRecord, ActivityType};
pub use bmi::BmiRecord;
pub use heart_rate::HeartRateRecord;
