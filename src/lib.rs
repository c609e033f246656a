//! Rust client and CORS relay for the ModelScope text-to-image API.
//!
//! [`ModelScopeClient`] builds normalized generation requests (defaults
//! filled in, bearer credential attached, bounded by a per-request
//! deadline) and maps every failure to a tagged [`ModelScopeError`].
//! The [`relay`] module hosts the standalone server that forwards
//! browser requests to the upstream provider; `cargo run` starts it.

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod modelscope;
pub mod relay;
pub mod storage;

pub use config::{ApiConfig, GenerationDefaults, RelayConfig};
pub use error::{ModelScopeError, Result};
pub use models::{
    ErrorEnvelope, GeneratedImage, GenerationParams, GenerationRequest, GenerationResponse,
    HealthStatus, HistoryEntry,
};
pub use modelscope::{ImageClient, ModelScopeClient};
pub use relay::RelayServer;
pub use storage::{InMemorySessionStore, JsonFileSessionStore, SessionManager, SessionStore};
