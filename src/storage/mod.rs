pub mod file;
pub mod memory;
pub mod traits;

use crate::{
    error::Result,
    models::{push_entry, HistoryEntry},
};
use std::sync::Arc;

pub use file::JsonFileSessionStore;
pub use memory::InMemorySessionStore;
pub use traits::SessionStore;

/// Domain-level session operations over an injected [`SessionStore`]
/// backend. Recording applies the history cap before persisting.
pub struct SessionManager {
    backend: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(backend: Arc<dyn SessionStore>) -> Self {
        Self { backend }
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.backend
    }

    pub async fn remember_api_key(&self, api_key: &str) -> Result<()> {
        self.backend.save_api_key(api_key).await
    }

    pub async fn api_key(&self) -> Result<Option<String>> {
        self.backend.load_api_key().await
    }

    /// Push one entry into persisted history and return the capped,
    /// most-recent-first list.
    pub async fn record(&self, entry: HistoryEntry) -> Result<Vec<HistoryEntry>> {
        let history = self.backend.load_history().await?;
        let history = push_entry(entry, history);
        self.backend.save_history(&history).await?;
        Ok(history)
    }

    pub async fn history(&self) -> Result<Vec<HistoryEntry>> {
        self.backend.load_history().await
    }

    pub async fn clear_history(&self) -> Result<()> {
        self.backend.clear_history().await
    }
}
