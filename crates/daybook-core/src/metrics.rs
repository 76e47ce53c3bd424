//! Derived health metrics: BMI and reference ranges.

use serde::Serialize;

use crate::storage::Gender;

/// Body-mass index rounded to one decimal.
///
/// Returns 0 when height is not positive instead of dividing by zero.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    if height_m <= 0.0 {
        return 0.0;
    }
    round_one_decimal(weight_kg / (height_m * height_m))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Reference bands shown next to each metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceRanges {
    pub bmi: &'static str,
    pub body_fat: &'static str,
    pub muscle: &'static str,
    pub visceral: &'static str,
}

/// Reference bands for a gender. Absent gender uses the male bands.
pub fn reference_ranges(gender: Option<Gender>) -> ReferenceRanges {
    let is_male = gender != Some(Gender::Female);
    ReferenceRanges {
        bmi: "18.5 - 23.9",
        body_fat: if is_male { "10% - 20%" } else { "20% - 30%" },
        muscle: if is_male { "> 40%" } else { "> 30%" },
        visceral: "1 - 9",
    }
}
