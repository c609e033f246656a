use crate::{
    error::{ModelScopeError, Result},
    models::HistoryEntry,
    storage::traits::SessionStore,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    api_key: Option<String>,
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

/// Session store backed by a single JSON document on disk, the native
/// counterpart of a browser's key-value storage. A missing file reads as
/// an empty session.
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn read(&self) -> Result<SessionFile> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| ModelScopeError::Internal(format!("session file is corrupt: {}", e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SessionFile::default()),
            Err(e) => Err(ModelScopeError::Internal(format!(
                "failed to read session file: {}",
                e
            ))),
        }
    }

    async fn write(&self, data: &SessionFile) -> Result<()> {
        let contents = serde_json::to_string_pretty(data)
            .map_err(|e| ModelScopeError::Internal(format!("failed to serialize session: {}", e)))?;

        tokio::fs::write(&self.path, contents).await.map_err(|e| {
            ModelScopeError::Internal(format!("failed to write session file: {}", e))
        })
    }
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn load_api_key(&self) -> Result<Option<String>> {
        Ok(self.read().await?.api_key)
    }

    async fn save_api_key(&self, api_key: &str) -> Result<()> {
        let mut data = self.read().await?;
        data.api_key = Some(api_key.to_string());
        self.write(&data).await
    }

    async fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.read().await?.history)
    }

    async fn save_history(&self, entries: &[HistoryEntry]) -> Result<()> {
        let mut data = self.read().await?;
        data.history = entries.to_vec();
        self.write(&data).await
    }

    async fn clear_history(&self) -> Result<()> {
        let mut data = self.read().await?;
        data.history.clear();
        self.write(&data).await
    }
}
