use crate::{error::Result, models::HistoryEntry, storage::traits::SessionStore};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct SessionData {
    api_key: Option<String>,
    history: Vec<HistoryEntry>,
}

/// Process-local session store. Used in tests and by embedders that do
/// not want anything written to disk.
#[derive(Default)]
pub struct InMemorySessionStore {
    inner: RwLock<SessionData>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load_api_key(&self) -> Result<Option<String>> {
        Ok(self.inner.read().await.api_key.clone())
    }

    async fn save_api_key(&self, api_key: &str) -> Result<()> {
        self.inner.write().await.api_key = Some(api_key.to_string());
        Ok(())
    }

    async fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.inner.read().await.history.clone())
    }

    async fn save_history(&self, entries: &[HistoryEntry]) -> Result<()> {
        self.inner.write().await.history = entries.to_vec();
        Ok(())
    }

    async fn clear_history(&self) -> Result<()> {
        self.inner.write().await.history.clear();
        Ok(())
    }
}
