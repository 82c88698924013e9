//! Itinerary text generation client
//!
//! Sends a structured prompt to a Hugging Face Inference-style endpoint
//! and returns the raw generated text for the day-segment parser.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::TripWeaverError;
use crate::api;
use crate::config::GenerationConfig;

/// Client for the text generation service
pub struct TextGenerationClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_length: u32,
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationParameters {
    max_length: u32,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// The service answers with a result array, or an error object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationReply {
    Results(Vec<GeneratedText>),
    Failure { error: String },
}

impl TextGenerationClient {
    /// Create a new generation client.
    ///
    /// Fails when no API key is configured; generation cannot work
    /// without one.
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TripWeaverError::config("Generation API key is not configured"))?;

        Ok(Self {
            client: api::build_http_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            max_length: config.max_length,
        })
    }

    /// Generate raw itinerary text for one destination
    #[instrument(skip(self))]
    pub async fn generate_itinerary_text(&self, place: &str, num_days: u32) -> Result<String> {
        let prompt = build_prompt(place, num_days);
        debug!("Generation prompt: {}", prompt);

        let url = format!("{}/models/{}", self.base_url, self.model);
        let request = GenerationRequest {
            inputs: &prompt,
            parameters: GenerationParameters {
                max_length: self.max_length,
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                TripWeaverError::generation(format!("Request for '{place}' failed: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(TripWeaverError::generation(format!(
                "Generation for '{}' returned HTTP {}",
                place,
                response.status()
            ))
            .into());
        }

        let reply: GenerationReply = response.json().await.map_err(|e| {
            TripWeaverError::generation(format!("Invalid generation response for '{place}': {e}"))
        })?;

        match reply {
            GenerationReply::Results(results) => {
                let text = results
                    .into_iter()
                    .next()
                    .map(|result| result.generated_text)
                    .filter(|text| !text.is_empty())
                    .ok_or_else(|| {
                        TripWeaverError::generation(format!("Empty generation reply for '{place}'"))
                    })?;

                info!("Generated {} characters for '{}'", text.len(), place);
                Ok(text)
            }
            GenerationReply::Failure { error } => Err(TripWeaverError::generation(format!(
                "Service error for '{place}': {error}"
            ))
            .into()),
        }
    }
}

/// Build the itinerary prompt for one destination
#[must_use]
pub fn build_prompt(place: &str, num_days: u32) -> String {
    format!(
        "Give me a detailed {num_days}-day travel itinerary for {place}, \
         including morning, afternoon, and evening activities. Format with \
         \"Day X: Morning:\", \"Day X: Afternoon:\", \"Day X: Evening:\" headers."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt("Rome", 3);
        assert!(prompt.contains("3-day travel itinerary for Rome"));
        assert!(prompt.contains("\"Day X: Morning:\""));
    }

    #[test]
    fn test_reply_deserialization_results() {
        let payload = r#"[{"generated_text": "Day 1: Morning: ..."}]"#;
        let reply: GenerationReply = serde_json::from_str(payload).unwrap();
        assert!(matches!(reply, GenerationReply::Results(results) if results.len() == 1));
    }

    #[test]
    fn test_reply_deserialization_failure() {
        let payload = r#"{"error": "Model is currently loading"}"#;
        let reply: GenerationReply = serde_json::from_str(payload).unwrap();
        assert!(matches!(reply, GenerationReply::Failure { error } if error.contains("loading")));
    }

    #[test]
    fn test_client_requires_api_key() {
        let config = GenerationConfig::default();
        assert!(TextGenerationClient::new(&config).is_err());

        let config = GenerationConfig {
            api_key: Some("hf_test_key_123".to_string()),
            ..GenerationConfig::default()
        };
        assert!(TextGenerationClient::new(&config).is_ok());
    }
}
