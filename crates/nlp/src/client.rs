//! Blocking JSON client for the NLP model sidecar.
//!
//! [`SidecarClient`] holds the base URL and a configured HTTP client for a
//! single sidecar instance and implements the core classifier trait over
//! its three inference endpoints. Calls are synchronous; the service runs
//! whole annotation batches on a blocking task.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use review_pulse_core::classifier::{ClassifierBackend, ClassifierError};

// ── Endpoint paths ───────────────────────────────────────────────────

pub const SENTIMENT_PATH: &str = "/v1/sentiment";
pub const EMOTION_PATH: &str = "/v1/emotion";
pub const ASPECTS_PATH: &str = "/v1/aspects";
pub const HEALTH_PATH: &str = "/health";

// ── Wire types ───────────────────────────────────────────────────────

/// Request body shared by all three inference endpoints.
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    text: &'a str,
}

/// Response body of `POST /v1/sentiment`.
#[derive(Debug, Deserialize)]
struct SentimentResponse {
    score: f64,
}

/// Response body of `POST /v1/emotion`.
#[derive(Debug, Deserialize)]
struct EmotionResponse {
    label: String,
}

/// Response body of `POST /v1/aspects`.
#[derive(Debug, Deserialize)]
struct AspectsResponse {
    aspects: String,
}

// ── Errors ───────────────────────────────────────────────────────────

/// Errors that can occur when talking to the sidecar.
#[derive(Debug, thiserror::Error)]
pub enum NlpClientError {
    /// The HTTP client itself could not be constructed.
    #[error("Client configuration error: {0}")]
    Config(String),

    /// The sidecar could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The sidecar answered, but not with a usable response.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

// ── Client ───────────────────────────────────────────────────────────

/// Configuration handle for one NLP sidecar instance.
pub struct SidecarClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl SidecarClient {
    /// Create a client targeting a sidecar.
    ///
    /// * `base_url` - HTTP base URL, e.g. `http://127.0.0.1:8000`.
    /// * `timeout`  - per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, NlpClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NlpClientError::Config(e.to_string()))?;

        let base_url = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// HTTP base URL (e.g. `http://127.0.0.1:8000`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the sidecar is up and answering.
    pub fn ping(&self) -> Result<(), NlpClientError> {
        let url = format!("{}{HEALTH_PATH}", self.base_url);
        let response = self.http.get(&url).send().map_err(|e| {
            NlpClientError::Connection(format!(
                "Failed to reach NLP sidecar at {}: {e}",
                self.base_url
            ))
        })?;

        if !response.status().is_success() {
            return Err(NlpClientError::Protocol(format!(
                "Sidecar health check returned {}",
                response.status()
            )));
        }

        tracing::debug!(base_url = %self.base_url, "NLP sidecar is reachable");
        Ok(())
    }

    /// POST an inference request and decode the JSON response body.
    fn infer<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        text: &str,
    ) -> Result<T, NlpClientError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&InferenceRequest { text })
            .send()
            .map_err(|e| NlpClientError::Connection(format!("Request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NlpClientError::Protocol(format!("{url} returned {status}")));
        }

        response
            .json::<T>()
            .map_err(|e| NlpClientError::Protocol(format!("Undecodable response from {url}: {e}")))
    }
}

impl ClassifierBackend for SidecarClient {
    fn score_sentiment(&self, text: &str) -> Result<f64, ClassifierError> {
        let response: SentimentResponse = self
            .infer(SENTIMENT_PATH, text)
            .map_err(|e| ClassifierError::new(e.to_string()))?;
        Ok(response.score)
    }

    fn classify_emotion(&self, text: &str) -> Result<String, ClassifierError> {
        let response: EmotionResponse = self
            .infer(EMOTION_PATH, text)
            .map_err(|e| ClassifierError::new(e.to_string()))?;
        Ok(response.label)
    }

    fn extract_aspects(&self, text: &str) -> Result<String, ClassifierError> {
        let response: AspectsResponse = self
            .infer(ASPECTS_PATH, text)
            .map_err(|e| ClassifierError::new(e.to_string()))?;
        Ok(response.aspects)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = SidecarClient::new("http://127.0.0.1:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");

        let client = SidecarClient::new("http://127.0.0.1:8000", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_inference_request_serializes_text_field() {
        let body = serde_json::to_value(InferenceRequest { text: "great phone" }).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "great phone" }));
    }

    #[test]
    fn test_response_bodies_deserialize() {
        let sentiment: SentimentResponse =
            serde_json::from_str(r#"{"score": -0.62}"#).unwrap();
        assert_eq!(sentiment.score, -0.62);

        let emotion: EmotionResponse = serde_json::from_str(r#"{"label": "anger"}"#).unwrap();
        assert_eq!(emotion.label, "anger");

        let aspects: AspectsResponse =
            serde_json::from_str(r#"{"aspects": "battery (amazing), camera (bad)"}"#).unwrap();
        assert_eq!(aspects.aspects, "battery (amazing), camera (bad)");
    }

    #[test]
    fn test_extra_response_fields_are_ignored() {
        let sentiment: SentimentResponse =
            serde_json::from_str(r#"{"score": 0.9, "model": "vader-en"}"#).unwrap();
        assert_eq!(sentiment.score, 0.9);
    }

    #[test]
    fn test_error_display_names_the_failure_class() {
        let err = NlpClientError::Connection("refused".to_string());
        assert_eq!(err.to_string(), "Connection error: refused");

        let err = NlpClientError::Protocol("500".to_string());
        assert!(err.to_string().starts_with("Protocol error"));
    }
}
