//! HTTP client for the Gemini generateContent endpoint.
//!
//! The request asks for a JSON array of 3-4 `{type, title, content}` objects
//! via `responseMimeType`/`responseSchema`; anything that does not parse into
//! that shape is a malformed-response error, never a panic.

use crate::models::insight::Insight;
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Failure taxonomy for the insight pipeline. All variants are non-fatal to
/// the host application.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("No API key configured for the insight service")]
    MissingApiKey,
    #[error("Insight request failed: {0}")]
    Transport(String),
    #[error("Insight response did not match the expected shape: {0}")]
    Malformed(String),
}

pub struct InsightClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl InsightClient {
    /// Build a client with the request timeout baked in. Timeout expiry
    /// surfaces as `Transport`.
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, InsightError> {
        if api_key.is_empty() {
            return Err(InsightError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InsightError::Transport(e.to_string()))?;

        Ok(InsightClient {
            client,
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Submit the composed report and parse the structured insight list.
    pub async fn generate(&self, report: &str) -> Result<Vec<Insight>, InsightError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": report }] }],
            "generationConfig": {
                "temperature": 0.7,
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "type": { "type": "STRING", "description": "alert, success, or suggestion" },
                            "title": { "type": "STRING" },
                            "content": { "type": "STRING" }
                        },
                        "required": ["type", "title", "content"]
                    }
                }
            }
        });

        let url = format!(
            "{GEMINI_API_BASE}/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| InsightError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(InsightError::Transport(format!("{status}: {text}")));
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| InsightError::Malformed(e.to_string()))?;

        let text = json
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.pointer("/content/parts/0/text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| InsightError::Malformed("missing candidate text".to_string()))?;

        parse_insights(text)
    }
}

/// Parse the service's text payload into typed insights. An empty payload is
/// a valid (empty) result; a shape mismatch is `Malformed`.
pub fn parse_insights(text: &str) -> Result<Vec<Insight>, InsightError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Vec<Insight>>(text)
        .map_err(|e| InsightError::Malformed(format!("{e}: {text}")))
}
