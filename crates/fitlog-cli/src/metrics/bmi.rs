use serde::Serialize;

use super::round1;

/// Weight class derived from a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Label stored with each BMI record
    pub fn name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Advice shown next to a fresh result
    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Improve your nutrition and keep training to gain weight in a healthy way."
            }
            BmiCategory::Normal => {
                "Congratulations! Your weight is in a healthy range. Keep up your current diet and exercise."
            }
            BmiCategory::Overweight => {
                "Adjust your diet and increase physical activity to bring your weight down."
            }
            BmiCategory::Obese => {
                "Talk to a doctor and plan a structured weight-loss program combining diet and exercise."
            }
        }
    }

    /// Marker printed in front of the category name
    pub fn marker(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "💙",
            BmiCategory::Normal => "💚",
            BmiCategory::Overweight => "💛",
            BmiCategory::Obese => "❤️",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// BMI = weight (kg) / height (m)^2, rounded to one decimal
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round1(weight_kg / (height_m * height_m))
}

/// Classify a BMI value. Bands are left-closed: 18.5, 23 and 25 belong to the
/// higher category.
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 23.0 {
        BmiCategory::Normal
    } else if bmi < 25.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bmi_normal() {
        let bmi = compute_bmi(170.0, 65.0);
        assert_eq!(bmi, 22.5);
        assert_eq!(classify(bmi), BmiCategory::Normal);
    }

    #[test]
    fn test_compute_bmi_underweight() {
        let bmi = compute_bmi(160.0, 45.0);
        assert_eq!(bmi, 17.6);
        assert_eq!(classify(bmi), BmiCategory::Underweight);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(18.4), BmiCategory::Underweight);
        assert_eq!(classify(18.5), BmiCategory::Normal);
        assert_eq!(classify(22.9), BmiCategory::Normal);
        assert_eq!(classify(23.0), BmiCategory::Overweight);
        assert_eq!(classify(24.9), BmiCategory::Overweight);
        assert_eq!(classify(25.0), BmiCategory::Obese);
        assert_eq!(classify(40.0), BmiCategory::Obese);
    }

    #[test]
    fn test_every_valid_input_has_a_category() {
        for height in (50..=250).step_by(10) {
            for weight in (20..=300).step_by(20) {
                let bmi = compute_bmi(height as f64, weight as f64);
                assert!(bmi.is_finite());
                assert_eq!(compute_bmi(height as f64, weight as f64), bmi);
                let _ = classify(bmi).name();
            }
        }
    }

    #[test]
    fn test_category_copy() {
        assert_eq!(BmiCategory::Obese.to_string(), "Obese");
        assert!(BmiCategory::Normal.advice().starts_with("Congratulations"));
        assert_eq!(BmiCategory::Normal.marker(), "💚");
    }
}
