//! Derived metrics
//!
//! Pure calculators with no storage access. Callers load records and pass
//! them in, which keeps every formula testable on plain values.

mod bmi;
mod calories;
mod heart_rate;
mod today;

pub use bmi::{classify, compute_bmi, BmiCategory};
pub use calories::{calorie_weight, compute_calories, met, DEFAULT_WEIGHT_KG};
pub use heart_rate::{classify_heart_rate, latest_heart_rate, HeartRateZone};
pub use today::{today_stats, TodayStats};

/// Round to one decimal place, halves away from zero
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
