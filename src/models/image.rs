use crate::config::ApiConfig;
use serde::{Deserialize, Serialize};

/// The exact JSON body sent to the provider. Every field is concrete:
/// anything the caller leaves out is filled from the configured defaults
/// before the request is serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub guidance_scale: f32,
}

impl GenerationRequest {
    pub fn new(config: &ApiConfig, prompt: impl Into<String>, params: &GenerationParams) -> Self {
        GenerationRequest {
            model: config.model.clone(),
            prompt: prompt.into(),
            width: params.width.unwrap_or(config.defaults.width),
            height: params.height.unwrap_or(config.defaults.height),
            steps: params.steps.unwrap_or(config.defaults.steps),
            guidance_scale: params
                .guidance_scale
                .unwrap_or(config.defaults.guidance_scale),
        }
    }
}

/// Per-call overrides. Unset fields fall back to [`ApiConfig`] defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationParams {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub steps: Option<u32>,
    pub guidance_scale: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub images: Vec<GeneratedImage>,
}

impl GenerationResponse {
    pub fn first_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
}
