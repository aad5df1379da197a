use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::common::{
    entities::app_errors::CoreError, ports::LLMClient, value_objects::AccessToken,
};

/// Gemini adapter. Authenticates with the caller's OAuth token when one
/// is forwarded; otherwise falls back to a configured API key passed as
/// a query parameter.
#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    model_name: String,
    fallback_api_key: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
    temperature: f32,
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
    pub fn new(model_name: String, fallback_api_key: Option<String>) -> Self {
        Self {
            model_name,
            fallback_api_key,
            client: Client::new(),
        }
    }

    async fn call_gemini_api(
        &self,
        access_token: Option<AccessToken>,
        request: GeminiRequest,
    ) -> Result<String, CoreError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model_name
        );

        let builder = match (&access_token, &self.fallback_api_key) {
            (Some(token), _) => self.client.post(&url).bearer_auth(token.as_str()),
            (None, Some(api_key)) => self.client.post(&url).query(&[("key", api_key)]),
            (None, None) => return Err(CoreError::MissingCredentials),
        };

        let response = builder.json(&request).send().await.map_err(|e| {
            tracing::error!("Gemini API request failed: {}", e);
            CoreError::ExternalServiceError(format!("LLM API error: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        access_token: Option<AccessToken>,
        prompt: String,
        temperature: f32,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
                temperature,
            }),
        };

        self.call_gemini_api(access_token, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_token_and_no_key_is_rejected() {
        let client = GeminiLLMClient::new("gemini-flash-latest".to_string(), None);
        let result = client
            .generate_with_text(None, "hello".to_string(), 0.7, serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(CoreError::MissingCredentials)));
    }
}
