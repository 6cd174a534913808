use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{config::GeminiConfig, error::ApiError};

/// What the caller expects the generated text to decode into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    DestinationList,
    Destination,
    Itinerary,
    Recommendations,
}

impl fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResponseShape::DestinationList => "destination list",
            ResponseShape::Destination => "destination",
            ResponseShape::Itinerary => "itinerary",
            ResponseShape::Recommendations => "recommendations",
        };
        f.write_str(label)
    }
}

/// One blocking round trip to a text generation service. No retries and no
/// timeout beyond what the transport provides.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, shape: ResponseShape) -> Result<String, ApiError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, shape: ResponseShape) -> Result<String, ApiError> {
        log::debug!("Requesting {} from {}", shape, self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("Generation request for {} failed with {}: {}", shape, status, error_text);
            return Err(ApiError::UpstreamCallFailed(format!(
                "generation service responded with status {}",
                status
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            ApiError::UpstreamCallFailed(format!("unreadable generation response: {}", e))
        })?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ApiError::UpstreamCallFailed(
                "generation service returned no text".to_string(),
            ));
        }

        log::debug!("Generated {} ({} bytes)", shape, text.len());
        Ok(text)
    }
}
