// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Assessment generation via the Gemini generateContent API

use anyhow::Result;
use reqwest::Client;
use tracing::{debug, warn};

use super::fallback::fallback_assessment;
use super::parser::parse_assessment_text;
use super::types::{Assessment, AssessmentOutcome, AssessmentSource};
use crate::config::ScreeningConfig;

// --- Gemini serde structs ---

#[derive(serde::Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(serde::Serialize)]
struct RequestPart {
    text: String,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    // f64 so the wire value is exactly 0.7
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(serde::Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(serde::Deserialize, Default)]
struct ResponseCandidate {
    #[serde(default)]
    content: ResponseContent,
}

#[derive(serde::Deserialize, Default)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(serde::Deserialize, Default)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Sampling temperature for every generation request
const TEMPERATURE: f64 = 0.7;

/// Output length cap for every generation request
const MAX_OUTPUT_TOKENS: u32 = 500;

/// Client for turning a classification into explanatory text
///
/// Wraps the generateContent endpoint with the fallback table behind
/// it. [`AssessmentGenerator::generate`] always produces a value.
pub struct AssessmentGenerator {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl AssessmentGenerator {
    /// Create a new assessment generator
    ///
    /// An empty API key is accepted: the provider rejects such requests
    /// and every generation then answers from the fallback table.
    pub fn new(config: &ScreeningConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.gemini_endpoint.clone(),
            api_key: config.gemini_api_key.clone(),
        })
    }

    /// Endpoint requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Produce an assessment for a classification and confidence value
    ///
    /// Never fails. When the generative call errors at any stage, the
    /// static fallback entry for the classification is returned and the
    /// outcome records which path ran.
    pub async fn generate(&self, classification: &str, probability: f64) -> AssessmentOutcome {
        match self.request_assessment(classification, probability).await {
            Ok(assessment) => AssessmentOutcome {
                assessment,
                source: AssessmentSource::Generated,
            },
            Err(e) => {
                warn!(
                    "Assessment generation failed for {}: {}, using fallback",
                    classification, e
                );
                AssessmentOutcome {
                    assessment: fallback_assessment(classification),
                    source: AssessmentSource::Fallback,
                }
            }
        }
    }

    async fn request_assessment(
        &self,
        classification: &str,
        probability: f64,
    ) -> Result<Assessment> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: build_prompt(classification, probability),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Generative API returned status {}", status.as_u16());
        }

        let body: GenerateResponse = response.json().await?;
        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .unwrap_or_default();
        debug!("Generative response text: {} chars", text.len());

        Ok(parse_assessment_text(&text))
    }
}

/// Build the generation prompt for a classification and confidence
fn build_prompt(classification: &str, probability: f64) -> String {
    format!(
        "A diabetic retinopathy screening model classified a retinal image as \"{}\" with \
         {:.1}% confidence.\n\n\
         Respond with exactly three labeled sections:\n\
         DESCRIPTION: What this classification means for the patient (2-3 lines).\n\
         CAUSE: The most likely cause of this condition (2-3 lines).\n\
         REMEDY: Recommended next steps for the patient (2-3 lines).",
        classification, probability
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(endpoint: &str) -> ScreeningConfig {
        ScreeningConfig {
            gemini_endpoint: endpoint.to_string(),
            gemini_api_key: "test-key".to_string(),
            ..ScreeningConfig::default()
        }
    }

    #[test]
    fn test_generator_new() {
        let generator =
            AssessmentGenerator::new(&test_config("http://localhost:9000/generate")).unwrap();
        assert_eq!(generator.endpoint(), "http://localhost:9000/generate");
    }

    #[test]
    fn test_generate_request_serialization() {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: build_prompt("Mild", 87.3),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        let temp = json["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temp - 0.7).abs() < 0.01);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 500);
        let text = json["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("Mild"));
        assert!(text.contains("87.3%"));
    }

    #[test]
    fn test_generate_response_parsing() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "DESCRIPTION: A\nCAUSE: B\nREMEDY: C"
                    }]
                }
            }]
        });
        let response: GenerateResponse = serde_json::from_value(json).unwrap();
        let text = &response.candidates[0].content.parts[0].text;
        assert_eq!(text, "DESCRIPTION: A\nCAUSE: B\nREMEDY: C");
    }

    #[test]
    fn test_generate_response_parsing_is_defensive() {
        let empty: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.candidates.is_empty());

        let no_parts: GenerateResponse =
            serde_json::from_value(serde_json::json!({"candidates": [{"content": {}}]})).unwrap();
        assert!(no_parts.candidates[0].content.parts.is_empty());
    }

    #[test]
    fn test_build_prompt_sections() {
        let prompt = build_prompt("No DR", 96.2);
        assert!(prompt.contains("\"No DR\""));
        assert!(prompt.contains("96.2% confidence"));
        assert!(prompt.contains("DESCRIPTION:"));
        assert!(prompt.contains("CAUSE:"));
        assert!(prompt.contains("REMEDY:"));
    }

    #[test]
    fn test_build_prompt_formats_one_decimal() {
        let prompt = build_prompt("Severe", 50.0);
        assert!(prompt.contains("50.0% confidence"));
    }

    #[tokio::test]
    async fn test_generate_unreachable_endpoint_uses_fallback() {
        let generator =
            AssessmentGenerator::new(&test_config("http://127.0.0.1:59999/generate")).unwrap();
        let outcome = generator.generate("Moderate", 72.4).await;
        assert!(outcome.used_fallback());
        assert_eq!(outcome.assessment, fallback_assessment("Moderate"));
    }
}
