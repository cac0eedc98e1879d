//! Form intake
//!
//! One input struct per entry form. `validate` checks fields in form order
//! and reports the first violation.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Result, TrackerError, ValidationError};
use crate::models::ActivityType;

pub const HEIGHT_RANGE_CM: (f64, f64) = (50.0, 250.0);
pub const WEIGHT_RANGE_KG: (f64, f64) = (20.0, 300.0);
pub const AGE_RANGE: (u32, u32) = (1, 120);
pub const HEART_RATE_RANGE_BPM: (u32, u32) = (30, 220);

/// Captured on the BMI form, not used by any calculation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// BMI form fields
#[derive(Debug, Clone, PartialEq)]
pub struct BmiInput {
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Validated but not stored or used
    pub age: u32,
    pub gender: Option<Gender>,
}

impl BmiInput {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let height = finite(self.height_cm, "Height")?;
        if height < HEIGHT_RANGE_CM.0 || height > HEIGHT_RANGE_CM.1 {
            return Err(ValidationError::HeightOutOfRange(height));
        }

        let weight = finite(self.weight_kg, "Weight")?;
        if weight < WEIGHT_RANGE_KG.0 || weight > WEIGHT_RANGE_KG.1 {
            return Err(ValidationError::WeightOutOfRange(weight));
        }

        if self.age < AGE_RANGE.0 || self.age > AGE_RANGE.1 {
            return Err(ValidationError::AgeOutOfRange(self.age));
        }

        Ok(())
    }
}

/// Activity form fields
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityInput {
    pub date: NaiveDate,
    pub activity_type: ActivityType,
    pub distance_km: f64,
    pub duration_min: f64,
}

impl ActivityInput {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let distance = finite(self.distance_km, "Distance")?;
        if distance <= 0.0 {
            return Err(ValidationError::DistanceNotPositive(distance));
        }

        let duration = finite(self.duration_min, "Duration")?;
        if duration <= 0.0 {
            return Err(ValidationError::DurationNotPositive(duration));
        }

        Ok(())
    }
}

/// Heart-rate form fields
#[derive(Debug, Clone, PartialEq)]
pub struct HeartRateInput {
    pub date: NaiveDate,
    pub heart_rate_bpm: u32,
}

impl HeartRateInput {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let bpm = self.heart_rate_bpm;
        if bpm < HEART_RATE_RANGE_BPM.0 || bpm > HEART_RATE_RANGE_BPM.1 {
            return Err(ValidationError::HeartRateOutOfRange(bpm));
        }
        Ok(())
    }
}

fn finite(value: f64, field: &'static str) -> std::result::Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite(field))
    }
}

/// Parse a `YYYY-MM-DD` date option, falling back to `today`
pub fn resolve_date(date: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| TrackerError::InvalidDateFormat(s.to_string())),
        None => Ok(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bmi(height_cm: f64, weight_kg: f64, age: u32) -> BmiInput {
        BmiInput {
            height_cm,
            weight_kg,
            age,
            gender: None,
        }
    }

    fn activity(distance_km: f64, duration_min: f64) -> ActivityInput {
        ActivityInput {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            activity_type: ActivityType::Running,
            distance_km,
            duration_min,
        }
    }

    #[test]
    fn test_bmi_accepts_range_edges() {
        assert!(bmi(50.0, 20.0, 1).validate().is_ok());
        assert!(bmi(250.0, 300.0, 120).validate().is_ok());
    }

    #[test]
    fn test_bmi_rejects_height() {
        assert_eq!(
            bmi(10.0, 65.0, 30).validate(),
            Err(ValidationError::HeightOutOfRange(10.0))
        );
        assert_eq!(
            bmi(250.5, 65.0, 30).validate(),
            Err(ValidationError::HeightOutOfRange(250.5))
        );
    }

    #[test]
    fn test_bmi_rejects_weight_and_age() {
        assert_eq!(
            bmi(170.0, 19.9, 30).validate(),
            Err(ValidationError::WeightOutOfRange(19.9))
        );
        assert_eq!(bmi(170.0, 65.0, 0).validate(), Err(ValidationError::AgeOutOfRange(0)));
        assert_eq!(
            bmi(170.0, 65.0, 121).validate(),
            Err(ValidationError::AgeOutOfRange(121))
        );
    }

    #[test]
    fn test_bmi_checks_height_first() {
        assert_eq!(
            bmi(10.0, 1000.0, 0).validate(),
            Err(ValidationError::HeightOutOfRange(10.0))
        );
    }

    #[test]
    fn test_bmi_rejects_nan() {
        assert_eq!(
            bmi(f64::NAN, 65.0, 30).validate(),
            Err(ValidationError::NotFinite("Height"))
        );
        assert_eq!(
            bmi(170.0, f64::INFINITY, 30).validate(),
            Err(ValidationError::NotFinite("Weight"))
        );
    }

    #[test]
    fn test_activity_requires_positive_values() {
        assert!(activity(0.1, 1.0).validate().is_ok());
        assert_eq!(
            activity(0.0, 30.0).validate(),
            Err(ValidationError::DistanceNotPositive(0.0))
        );
        assert_eq!(
            activity(5.0, -1.0).validate(),
            Err(ValidationError::DurationNotPositive(-1.0))
        );
    }

    #[test]
    fn test_heart_rate_range() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let input = |bpm| HeartRateInput {
            date,
            heart_rate_bpm: bpm,
        };
        assert!(input(30).validate().is_ok());
        assert!(input(220).validate().is_ok());
        assert_eq!(input(29).validate(), Err(ValidationError::HeartRateOutOfRange(29)));
        assert_eq!(input(221).validate(), Err(ValidationError::HeartRateOutOfRange(221)));
    }

    #[test]
    fn test_resolve_date() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(resolve_date(None, today).unwrap(), today);
        assert_eq!(
            resolve_date(Some("2023-12-31"), today).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
        assert!(matches!(
            resolve_date(Some("31/12/2023"), today),
            Err(TrackerError::InvalidDateFormat(_))
        ));
    }
}
