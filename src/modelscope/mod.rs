pub mod image_client;

use crate::{
    config::ApiConfig,
    error::{ModelScopeError, Result},
    models::{GenerationParams, GenerationRequest, GenerationResponse, HistoryEntry},
    storage::{SessionManager, SessionStore},
};
use std::sync::Arc;

pub use image_client::ImageClient;

#[derive(Clone)]
pub struct ModelScopeClient {
    image_client: ImageClient,
    session: Option<Arc<SessionManager>>,
}

impl ModelScopeClient {
    pub fn new(config: ApiConfig, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            image_client: ImageClient::new(config, api_key)?,
            session: None,
        })
    }

    pub fn with_session(
        config: ApiConfig,
        api_key: impl Into<String>,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self> {
        let mut client = Self::new(config, api_key)?;
        client.session = Some(Arc::new(SessionManager::new(store)));
        Ok(client)
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn session(&self) -> Option<&Arc<SessionManager>> {
        self.session.as_ref()
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.image_client.set_api_key(api_key);
    }

    /// Generate an image and record the first result in session history.
    pub async fn generate_and_record(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<GenerationResponse> {
        let response = self.image_client.generate(prompt, params.clone()).await?;

        if let Some(session) = &self.session {
            let request = GenerationRequest::new(self.image_client.config(), prompt, &params);
            let image = response
                .images
                .first()
                .ok_or_else(|| ModelScopeError::Response("no images returned".into()))?;

            session.record(HistoryEntry::new(&request, image)).await?;
            Ok(response)
        } else {
            Err(ModelScopeError::Config(
                "no session store configured".into(),
            ))
        }
    }
}
