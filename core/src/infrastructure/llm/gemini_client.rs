use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    plan::ports::LLMClient,
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    timeout: Duration,
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
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<GeminiModel>,
    next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiModel {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl GeminiResponse {
    /// Text of the first candidate, all parts joined. Blocked or empty
    /// candidates yield an empty string.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config
                .gemini_model
                .trim_start_matches("models/")
                .to_string(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    /// The request URL carries the API key, so it is stripped before the
    /// error is logged or returned.
    fn map_transport_error(&self, e: reqwest::Error) -> CoreError {
        let e = e.without_url();

        if e.is_timeout() {
            tracing::error!("Gemini API request timed out after {:?}", self.timeout);
            return CoreError::ExternalServiceError(format!(
                "LLM request timed out after {} seconds",
                self.timeout.as_secs()
            ));
        }

        tracing::error!("Gemini API request failed: {}", e);
        CoreError::ExternalServiceError(format!("LLM API error: {}", e))
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

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

        Ok(gemini_response.into_text())
    }

    /// Models visible to the configured API key, following pagination.
    pub async fn list_models(&self) -> Result<Vec<GeminiModel>, CoreError> {
        let url = format!("{}/v1beta/models", self.base_url);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("key", self.api_key.clone())];
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }

            let response = self
                .client
                .get(&url)
                .query(&query)
                .send()
                .await
                .map_err(|e| self.map_transport_error(e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                tracing::error!("Gemini list models error: {} - {}", status, error_text);
                return Err(CoreError::ExternalServiceError(format!(
                    "LLM API returned error: {} - {}",
                    status, error_text
                )));
            }

            let page: ListModelsResponse = response.json().await.map_err(|e| {
                tracing::error!("Failed to parse Gemini models: {}", e);
                CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
            })?;

            models.extend(page.models);

            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(models)
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        self.call_gemini_api(request).await
    }
}
