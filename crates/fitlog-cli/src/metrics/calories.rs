use crate::error::ValidationError;
use crate::models::ActivityType;

/// Weight used for calorie estimates when none has been recorded
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Metabolic equivalent for an activity kind
pub fn met(activity_type: ActivityType) -> f64 {
    match activity_type {
        ActivityType::Walking => 3.5,
        ActivityType::Running => 7.0,
    }
}

/// Calories burned = MET * weight (kg) * duration (h), rounded to the nearest integer.
///
/// Fails when the estimate does not fit in a `u32`.
pub fn compute_calories(
    activity_type: ActivityType,
    weight_kg: f64,
    duration_min: f64,
) -> Result<u32, ValidationError> {
    let duration_hours = duration_min / 60.0;
    let calories = (met(activity_type) * weight_kg * duration_hours).round();
    if !calories.is_finite() || calories < 0.0 || calories > f64::from(u32::MAX) {
        return Err(ValidationError::CaloriesOutOfRange(calories));
    }
    Ok(calories as u32)
}

/// Weight to feed into [`compute_calories`]: the stored weight, else the default
pub fn calorie_weight(stored: Option<f64>) -> f64 {
    stored.unwrap_or(DEFAULT_WEIGHT_KG)
}
