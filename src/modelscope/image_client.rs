use crate::{
    config::ApiConfig,
    error::{ModelScopeError, Result},
    models::{GenerationParams, GenerationRequest, GenerationResponse},
};
use reqwest::StatusCode;

#[derive(Clone)]
pub struct ImageClient {
    http: reqwest::Client,
    config: ApiConfig,
    api_key: String,
}

impl ImageClient {
    pub fn new(config: ApiConfig, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ModelScopeError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config,
            api_key: api_key.into(),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    /// Issue a single generation call. Omitted `params` fields fall back to
    /// the configured defaults; the call is bounded by the configured
    /// timeout and never retried.
    pub async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<GenerationResponse> {
        if prompt.trim().is_empty() {
            return Err(ModelScopeError::Validation(
                "prompt must not be empty".into(),
            ));
        }

        let request = GenerationRequest::new(&self.config, prompt, &params);
        let url = format!("{}/images/generations", self.config.base_url);

        log::info!(
            "🎨 Generating image with model: {} ({}x{}, {} steps)",
            request.model,
            request.width,
            request.height,
            request.steps
        );

        let timeout_secs = self.config.timeout.as_secs();
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelScopeError::Timeout {
                        seconds: timeout_secs,
                    }
                } else if e.is_connect() {
                    ModelScopeError::Connection(e.to_string())
                } else {
                    ModelScopeError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(status, &body);
            log::error!(
                "❌ Generation failed with HTTP {}: {}",
                status.as_u16(),
                message
            );
            return Err(ModelScopeError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ModelScopeError::Response(format!("failed to read response: {}", e)))?;
        let result: GenerationResponse = serde_json::from_str(&body)
            .map_err(|e| ModelScopeError::Response(format!("failed to parse response: {}", e)))?;

        log::info!("✅ Generated {} image(s)", result.images.len());
        Ok(result)
    }
}

/// Best-effort extraction of a failure message from a non-success
/// response. Order matters: structured JSON field, then the raw body
/// text, then a status-derived line.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|v| v.as_str()) {
            return message.to_string();
        }
        if let Some(error) = value.get("error") {
            if let Some(text) = error.as_str() {
                return text.to_string();
            }
            if let Some(text) = error.get("message").and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    if !body.trim().is_empty() {
        return body.to_string();
    }

    match status.canonical_reason() {
        Some(reason) => format!("HTTP {}: {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}
