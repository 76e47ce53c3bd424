//! Health assessment from a remote assistant.
//!
//! The assistant only supplies the wording (`status`, `advice`). BMI is always
//! computed locally with [`compute_bmi`] and overrides anything the remote
//! side returns.

mod gemini;

use serde::Deserialize;

use crate::error::{DaybookError, Result};
use crate::metrics::compute_bmi;
use crate::storage::{Gender, HealthAdvice, HealthMetrics};

pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_MODEL};

/// The one message users see when advice cannot be produced.
pub const UNREACHABLE_MESSAGE: &str =
    "Unable to reach the health assistant. Please try again later.";

/// A source of health assessments.
pub trait AdviceClient {
    /// # Errors
    ///
    /// Returns `DaybookError::Advice` carrying [`UNREACHABLE_MESSAGE`] on any
    /// transport, status, or response-shape failure.
    fn analyze(&self, metrics: &HealthMetrics) -> Result<HealthAdvice>;
}

impl<T: AdviceClient + ?Sized> AdviceClient for &T {
    fn analyze(&self, metrics: &HealthMetrics) -> Result<HealthAdvice> {
        (**self).analyze(metrics)
    }
}

pub(crate) fn unreachable() -> DaybookError {
    DaybookError::Advice(UNREACHABLE_MESSAGE.to_string())
}

/// Prompt text for `metrics`, asking for an answer in `language`.
///
/// Optional composition metrics appear only when recorded and positive.
pub fn build_prompt(metrics: &HealthMetrics, language: &str) -> String {
    let gender = match metrics.gender {
        Some(Gender::Female) => "Female",
        _ => "Male",
    };
    let bmi = compute_bmi(metrics.height, metrics.weight);

    let mut lines = vec![
        format!("Analyze the following health metrics for a {} user:", gender),
        format!("- Height: {} cm", metrics.height),
        format!("- Weight: {} kg", metrics.weight),
        format!("- BMI: {}", bmi),
    ];
    if let Some(fat) = present(metrics.body_fat_percentage) {
        lines.push(format!("- Body Fat: {}%", fat));
    }
    if let Some(muscle) = present(metrics.muscle_mass) {
        lines.push(format!("- Muscle Mass: {} kg", muscle));
    }
    if let Some(visceral) = present(metrics.visceral_fat_level) {
        lines.push(format!("- Visceral Fat Level: {}", visceral));
    }
    lines.push(String::new());
    lines.push("Please provide:".to_string());
    lines.push(
        "1. A short assessment status (e.g. \"Healthy\", \"Overweight\", \"Athletic\").".to_string(),
    );
    lines.push(
        "2. A concise, friendly, actionable advice paragraph (max 100 words) based on these \
         specific numbers and gender. Focus on positive reinforcement or gentle warnings if needed."
            .to_string(),
    );
    lines.push(format!("Language: {}.", language));

    let mut prompt = lines.join("\n");
    prompt.push('\n');
    prompt
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

#[derive(Debug, Deserialize)]
struct Assessment {
    status: String,
    advice: String,
}

/// Turn the assistant's JSON text into advice with a locally computed BMI.
pub(crate) fn parse_assessment(text: &str, metrics: &HealthMetrics) -> Result<HealthAdvice> {
    let assessment: Assessment = serde_json::from_str(text.trim()).map_err(|err| {
        tracing::warn!(error = %err, "assistant returned an unexpected shape");
        unreachable()
    })?;
    Ok(HealthAdvice {
        bmi: compute_bmi(metrics.height, metrics.weight),
        status: assessment.status,
        advice: assessment.advice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> HealthMetrics {
        HealthMetrics {
            height: 170.0,
            weight: 68.85,
            body_fat_percentage: Some(18.5),
            muscle_mass: None,
            visceral_fat_level: Some(0.0),
            last_updated: 0,
            gender: Some(Gender::Female),
        }
    }

    #[test]
    fn test_prompt_lists_present_metrics_only() {
        let prompt = build_prompt(&metrics(), "English");
        assert!(prompt.contains("for a Female user"));
        assert!(prompt.contains("- BMI: 23.8"));
        assert!(prompt.contains("- Body Fat: 18.5%"));
        assert!(!prompt.contains("Muscle Mass"));
        assert!(!prompt.contains("Visceral"));
        assert!(prompt.ends_with("Language: English.\n"));

        let lines: Vec<&str> = prompt.lines().collect();
        assert_eq!(lines[1], "- Height: 170 cm");
        assert_eq!(lines[4], "- Body Fat: 18.5%");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Please provide:");
    }

    #[test]
    fn test_parse_overrides_remote_bmi() {
        let advice = parse_assessment(
            r#"{"bmi": 99, "status": "Healthy", "advice": "Keep walking."}"#,
            &metrics(),
        )
        .unwrap();
        assert_eq!(advice.bmi, 23.8);
        assert_eq!(advice.status, "Healthy");
    }

    #[test]
    fn test_parse_missing_field_is_unreachable() {
        let err = parse_assessment(r#"{"status": "Healthy"}"#, &metrics()).unwrap_err();
        assert_eq!(err.to_string(), UNREACHABLE_MESSAGE);
    }
}
