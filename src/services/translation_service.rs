use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::TranslateConfig,
    error::ApiError,
    models::translation::{Translated, TranslationRequest, TranslationResponse},
    services::phrasebook,
};

const AUTO_DETECT: &str = "auto";

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<Translated, ApiError>;
}

#[derive(Debug, Serialize)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreTranslateResponse {
    translated_text: String,
    detected_language: Option<DetectedLanguage>,
}

#[derive(Debug, Deserialize)]
struct DetectedLanguage {
    language: String,
}

#[derive(Clone)]
pub struct LibreTranslateClient {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl LibreTranslateClient {
    pub fn new(config: &TranslateConfig) -> Self {
        Self {
            client: Client::new(),
            url: config.url.to_string(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl Translator for LibreTranslateClient {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<Translated, ApiError> {
        let request = LibreTranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self.client.post(&self.url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UpstreamCallFailed(format!(
                "translation service responded with status {}",
                status
            )));
        }

        let body: LibreTranslateResponse = response.json().await?;
        Ok(Translated {
            text: body.translated_text,
            detected_language: body.detected_language.map(|d| d.language),
        })
    }
}

#[derive(Clone)]
pub struct TranslationService {
    translator: Arc<dyn Translator>,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Only a malformed request fails. Upstream failures degrade to the
    /// phrasebook and then to a placeholder text.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse, ApiError> {
        let text = request.text.as_deref().filter(|t| !t.trim().is_empty());
        let target = request
            .target_language
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        let (Some(text), Some(target)) = (text, target) else {
            return Err(ApiError::validation("Missing required parameters"));
        };
        let source = request
            .source_language
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(AUTO_DETECT);

        match self.translator.translate(text, source, target).await {
            Ok(translated) => Ok(TranslationResponse {
                translated_text: translated.text,
                detected_source_language: Some(
                    translated
                        .detected_language
                        .unwrap_or_else(|| source.to_string()),
                ),
                note: None,
                error: None,
            }),
            Err(err) => {
                log::warn!("Translation error, falling back to phrasebook: {}", err);
                Ok(fallback(text, target))
            }
        }
    }
}

pub fn fallback(text: &str, target: &str) -> TranslationResponse {
    match phrasebook::lookup(target, text) {
        Some(translation) => TranslationResponse {
            translated_text: translation.to_string(),
            detected_source_language: Some("en".to_string()),
            note: Some("Using fallback translation".to_string()),
            error: None,
        },
        None => TranslationResponse {
            translated_text: format!("[Translation unavailable for \"{}\"]", text),
            detected_source_language: None,
            note: None,
            error: Some("Translation failed".to_string()),
        },
    }
}
