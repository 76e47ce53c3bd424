//! Gemini `generateContent` client.

use std::time::Duration;

use serde_json::{json, Value};

use super::{build_prompt, parse_assessment, unreachable, AdviceClient};
use crate::error::{DaybookError, Result};
use crate::storage::{HealthAdvice, HealthMetrics};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
    /// Language the advice should be written in.
    pub language: String,
    pub endpoint: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
            language: "English".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns `DaybookError::Advice` when no API key is configured or the
    /// HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(DaybookError::Advice(
                "No Gemini API key configured (set GEMINI_API_KEY or [advice] api_key)."
                    .to_string(),
            ));
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| {
                tracing::warn!(error = %err, "failed to build HTTP client");
                unreachable()
            })?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl AdviceClient for GeminiClient {
    fn analyze(&self, metrics: &HealthMetrics) -> Result<HealthAdvice> {
        let payload = request_payload(&build_prompt(metrics, &self.config.language));
        tracing::info!(model = %self.config.model, "requesting health advice");

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .map_err(|err| {
                tracing::warn!(error = %err, "advice request failed");
                unreachable()
            })?;

        let status = response.status();
        let body = response.text().map_err(|err| {
            tracing::warn!(error = %err, "failed to read advice response");
            unreachable()
        })?;
        if !status.is_success() {
            tracing::warn!(%status, detail = %error_detail(&body), "advice request rejected");
            return Err(unreachable());
        }

        let text = response_text(&body).ok_or_else(|| {
            tracing::warn!("advice response carried no text");
            unreachable()
        })?;
        parse_assessment(&text, metrics)
    }
}

fn request_payload(prompt: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "bmi": { "type": "NUMBER" },
                    "status": { "type": "STRING" },
                    "advice": { "type": "STRING" }
                },
                "required": ["status", "advice"]
            }
        }
    })
}

/// First text part of the first candidate.
fn response_text(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value["candidates"][0]["content"]["parts"]
        .as_array()?
        .iter()
        .find_map(|part| part["text"].as_str())
        .map(str::to_string)
}

fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}
