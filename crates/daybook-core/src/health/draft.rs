//! In-progress health measurement edits.

use chrono::NaiveDate;

use crate::date_key::noon_of;
use crate::storage::{Gender, HealthMetrics};

/// Unsaved editor state for one day's measurements.
///
/// Starts from the current snapshot so unchanged values carry forward.
/// Every setter clamps negatives to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthDraft {
    pub date: NaiveDate,
    metrics: HealthMetrics,
}

impl HealthDraft {
    pub fn from_current(current: &HealthMetrics, today: NaiveDate) -> Self {
        Self {
            date: today,
            metrics: current.clone(),
        }
    }

    pub fn metrics(&self) -> &HealthMetrics {
        &self.metrics
    }

    pub fn set_height(&mut self, cm: f64) {
        self.metrics.height = non_negative(cm);
    }

    pub fn set_weight(&mut self, kg: f64) {
        self.metrics.weight = non_negative(kg);
    }

    pub fn set_body_fat(&mut self, percent: Option<f64>) {
        self.metrics.body_fat_percentage = percent.map(non_negative);
    }

    pub fn set_muscle_mass(&mut self, kg: Option<f64>) {
        self.metrics.muscle_mass = kg.map(non_negative);
    }

    /// No upper bound is enforced here; the 1-9 band is advisory.
    pub fn set_visceral_fat(&mut self, level: Option<f64>) {
        self.metrics.visceral_fat_level = level.map(non_negative);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.metrics.gender = Some(gender);
    }

    /// Flip between male and female. An unset gender becomes female, since
    /// it displays as male.
    pub fn toggle_gender(&mut self) -> Gender {
        let next = match self.metrics.gender {
            Some(Gender::Female) => Gender::Male,
            _ => Gender::Female,
        };
        self.metrics.gender = Some(next);
        next
    }

    /// Finish editing: the record is stamped at local noon of `date`.
    pub fn into_record(self) -> HealthMetrics {
        HealthMetrics {
            last_updated: noon_of(self.date),
            ..self.metrics
        }
    }
}

fn non_negative(value: f64) -> f64 {
    value.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_key::to_day_key;

    #[test]
    fn test_setters_clamp_negatives() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut draft = HealthDraft::from_current(&HealthMetrics::neutral(0), today);
        draft.set_height(-170.0);
        draft.set_weight(-1.0);
        draft.set_body_fat(Some(-4.0));
        draft.set_visceral_fat(Some(12.0));

        let metrics = draft.metrics();
        assert_eq!(metrics.height, 0.0);
        assert_eq!(metrics.weight, 0.0);
        assert_eq!(metrics.body_fat_percentage, Some(0.0));
        assert_eq!(metrics.visceral_fat_level, Some(12.0));
    }

    #[test]
    fn test_record_is_stamped_at_noon_of_date() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut draft = HealthDraft::from_current(&HealthMetrics::neutral(0), today);
        draft.date = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        draft.set_gender(Gender::Female);
        draft.set_muscle_mass(None);

        let record = draft.into_record();
        assert_eq!(record.last_updated, noon_of(NaiveDate::from_ymd_opt(2024, 4, 20).unwrap()));
        assert_eq!(to_day_key(record.last_updated).to_string(), "2024-04-20");
        assert_eq!(record.gender, Some(Gender::Female));
        assert_eq!(record.height, 170.0);
    }

    #[test]
    fn test_toggle_gender() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut current = HealthMetrics::neutral(0);
        current.gender = None;
        let mut draft = HealthDraft::from_current(&current, today);
        assert_eq!(draft.toggle_gender(), Gender::Female);
        assert_eq!(draft.toggle_gender(), Gender::Male);
    }
}
