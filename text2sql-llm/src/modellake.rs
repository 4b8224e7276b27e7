use crate::{
    client::CompletionClient,
    error::LlmError,
    types::{ChatRequest, ChatResponse},
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// ModelLake completion client
pub struct ModelLakeClient {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl ModelLakeClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(base_url, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new client with a bounded request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: base_url.into(),
            http_client,
        })
    }
}

#[async_trait]
impl CompletionClient for ModelLakeClient {
    async fn chat_complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        let url = format!("{}/chat/complete", self.base_url.trim_end_matches('/'));

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| LlmError::authentication("Invalid API key format"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let status = response.status();

        if status.is_success() {
            let chat_response: ChatResponse = response
                .json()
                .await
                .map_err(|e| LlmError::internal(format!("Failed to parse response: {}", e)))?;
            debug!(answer_len = chat_response.answer.len(), "ModelLake answered");
            Ok(chat_response)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            match status {
                reqwest::StatusCode::BAD_REQUEST => Err(LlmError::invalid_request(error_text)),
                reqwest::StatusCode::UNAUTHORIZED => Err(LlmError::authentication(error_text)),
                reqwest::StatusCode::FORBIDDEN => Err(LlmError::authentication(error_text)),
                _ => Err(LlmError::api_error(status.as_u16(), error_text)),
            }
        }
    }

    fn provider_name(&self) -> &str {
        "modellake"
    }
}
