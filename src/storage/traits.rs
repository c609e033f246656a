use crate::{error::Result, models::HistoryEntry};
use async_trait::async_trait;

/// Key-value persistence for the UI session: the last-used credential and
/// the generation history. The generation clients never touch this
/// directly; it is injected where history recording is wanted.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load_api_key(&self) -> Result<Option<String>>;
    async fn save_api_key(&self, api_key: &str) -> Result<()>;
    async fn load_history(&self) -> Result<Vec<HistoryEntry>>;
    async fn save_history(&self, entries: &[HistoryEntry]) -> Result<()>;
    async fn clear_history(&self) -> Result<()>;
}
