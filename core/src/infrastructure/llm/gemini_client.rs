use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, meal_ai::ports::LLMClient};

/// Gemini adapter. A missing API key is not a startup error; calls fail
/// with an upstream error until one is configured.
#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: Option<String>,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

impl GeminiLLMClient {
    pub fn new(api_key: Option<String>, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            client: Client::new(),
        }
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        let api_key = self.api_key.as_deref().filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            CoreError::UpstreamFailure {
                message: "GEMINI_API_KEY is not configured".to_string(),
                raw: String::new(),
            }
        })?;

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, api_key
        );

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::UpstreamFailure {
                    message: format!("LLM API error: {}", e),
                    raw: String::new(),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamFailure {
                message: format!("LLM API returned error: {}", status),
                raw: error_text,
            });
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::UpstreamFailure {
                message: format!("Failed to parse LLM response: {}", e),
                raw: String::new(),
            }
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::UpstreamFailure {
                message: "No response from LLM".to_string(),
                raw: String::new(),
            })
    }
}
