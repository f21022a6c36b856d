//! Sentiment model loader
//!
//! The demo keeps a hosted sentiment-analysis model around for show; its
//! output never drives any response. Acquisition is a one-time metadata
//! fetch against a model hub, memoized for the rest of the process:
//! success and failure are both cached, a failed fetch is logged as a
//! warning and not retried unless explicitly reset.

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Default model, matching the demo configuration
pub const DEFAULT_MODEL: &str = "cardiffnlp/twitter-roberta-base-sentiment-latest";
/// Default model hub host
pub const DEFAULT_HUB_HOST: &str = "https://huggingface.co";

/// Env var overriding the hub host
pub const HUB_HOST_ENV: &str = "FINASSIST_HUB_HOST";
/// Env var overriding the sentiment model id
pub const MODEL_ENV: &str = "FINASSIST_SENTIMENT_MODEL";

/// Metadata describing a hosted sentiment model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentModelInfo {
    /// Model identifier (e.g., "cardiffnlp/twitter-roberta-base-sentiment-latest")
    pub id: String,
    /// Task the model is published for (e.g., "text-classification")
    #[serde(default)]
    pub pipeline_tag: Option<String>,
    #[serde(default)]
    pub downloads: Option<u64>,
}

/// Pluggable source for sentiment-model metadata
#[async_trait]
pub trait SentimentBackend: Send + Sync {
    /// Fetch metadata for the configured model
    async fn fetch_model(&self) -> Result<SentimentModelInfo>;

    /// The configured model id
    fn model(&self) -> &str;

    /// The host this backend talks to
    fn host(&self) -> &str;
}

/// Model-hub backend over HTTP
pub struct HubBackend {
    http_client: Client,
    base_url: String,
    model: String,
}

impl HubBackend {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables, falling back to the demo defaults
    pub fn from_env() -> Self {
        let host = std::env::var(HUB_HOST_ENV).unwrap_or_else(|_| DEFAULT_HUB_HOST.to_string());
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(&host, &model)
    }
}

impl Default for HubBackend {
    fn default() -> Self {
        Self::new(DEFAULT_HUB_HOST, DEFAULT_MODEL)
    }
}

#[async_trait]
impl SentimentBackend for HubBackend {
    async fn fetch_model(&self) -> Result<SentimentModelInfo> {
        let url = format!("{}/api/models/{}", self.base_url, self.model);
        debug!("Fetching sentiment model metadata from {}", url);

        let response = self.http_client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Http(response.error_for_status().unwrap_err()));
        }

        let info: SentimentModelInfo = response.json().await?;
        debug!("Sentiment model available: {}", info.id);
        Ok(info)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn host(&self) -> &str {
        &self.base_url
    }
}

/// Mock backend for tests and offline use
#[derive(Clone, Default)]
pub struct MockSentimentBackend {
    /// Whether fetch_model should succeed
    pub healthy: bool,
}

impl MockSentimentBackend {
    /// Create a new mock backend (healthy by default)
    pub fn new() -> Self {
        Self { healthy: true }
    }

    /// Create a mock backend whose fetches always fail
    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl SentimentBackend for MockSentimentBackend {
    async fn fetch_model(&self) -> Result<SentimentModelInfo> {
        if !self.healthy {
            return Err(Error::InvalidData("mock backend is unhealthy".into()));
        }
        Ok(SentimentModelInfo {
            id: "mock/sentiment".to_string(),
            pipeline_tag: Some("text-classification".to_string()),
            downloads: Some(0),
        })
    }

    fn model(&self) -> &str {
        "mock/sentiment"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}

/// Cached outcome of the one-time load
enum LoadState {
    NotLoaded,
    Ready(SentimentModelInfo),
    Failed,
}

/// Externally visible load status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    NotLoaded,
    Ready,
    Failed,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotLoaded => "not_loaded",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

/// Memoized loader around a sentiment backend
///
/// The first `get` performs the fetch and records the outcome; later calls
/// return the cached value without retrying a prior failure. Failures are
/// swallowed (warned, returned as `None`) because the model is never on
/// the critical path of a user-visible response.
pub struct SentimentLoader {
    backend: Box<dyn SentimentBackend>,
    state: RwLock<LoadState>,
}

impl SentimentLoader {
    pub fn new(backend: Box<dyn SentimentBackend>) -> Self {
        Self {
            backend,
            state: RwLock::new(LoadState::NotLoaded),
        }
    }

    /// Loader over the hub backend configured from the environment
    pub fn from_env() -> Self {
        Self::new(Box::new(HubBackend::from_env()))
    }

    /// The model id this loader is configured for
    pub fn model(&self) -> &str {
        self.backend.model()
    }

    /// Fetch-once accessor for the model metadata
    pub async fn get(&self) -> Option<SentimentModelInfo> {
        {
            let state = self.state.read().ok()?;
            match &*state {
                LoadState::Ready(info) => return Some(info.clone()),
                LoadState::Failed => return None,
                LoadState::NotLoaded => {}
            }
        }

        match self.backend.fetch_model().await {
            Ok(info) => {
                if let Ok(mut state) = self.state.write() {
                    *state = LoadState::Ready(info.clone());
                }
                Some(info)
            }
            Err(e) => {
                warn!(
                    "Failed to load sentiment model {}: {}. Responses are unaffected.",
                    self.backend.model(),
                    e
                );
                if let Ok(mut state) = self.state.write() {
                    *state = LoadState::Failed;
                }
                None
            }
        }
    }

    /// Current cached status without triggering a fetch
    pub fn status(&self) -> LoadStatus {
        match self.state.read() {
            Ok(state) => match &*state {
                LoadState::NotLoaded => LoadStatus::NotLoaded,
                LoadState::Ready(_) => LoadStatus::Ready,
                LoadState::Failed => LoadStatus::Failed,
            },
            Err(_) => LoadStatus::Failed,
        }
    }

    /// Clear the cached outcome so the next `get` fetches again
    pub fn reset(&self) {
        if let Ok(mut state) = self.state.write() {
            *state = LoadState::NotLoaded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loader_caches_success() {
        let loader = SentimentLoader::new(Box::new(MockSentimentBackend::new()));
        assert_eq!(loader.status(), LoadStatus::NotLoaded);

        let info = loader.get().await.unwrap();
        assert_eq!(info.id, "mock/sentiment");
        assert_eq!(loader.status(), LoadStatus::Ready);

        // Second call served from cache
        let again = loader.get().await.unwrap();
        assert_eq!(again.id, info.id);
    }

    #[tokio::test]
    async fn test_loader_caches_failure_until_reset() {
        let loader = SentimentLoader::new(Box::new(MockSentimentBackend::unhealthy()));

        assert!(loader.get().await.is_none());
        assert_eq!(loader.status(), LoadStatus::Failed);

        // Prior failure is not retried
        assert!(loader.get().await.is_none());

        loader.reset();
        assert_eq!(loader.status(), LoadStatus::NotLoaded);
    }

    #[test]
    fn test_hub_backend_trims_trailing_slash() {
        let backend = HubBackend::new("https://hub.example/", "org/model");
        assert_eq!(backend.host(), "https://hub.example");
        assert_eq!(backend.model(), "org/model");
    }

    #[test]
    fn test_model_info_deserializes_sparse_payload() {
        let info: SentimentModelInfo = serde_json::from_str(r#"{"id": "org/model"}"#).unwrap();
        assert_eq!(info.id, "org/model");
        assert!(info.pipeline_tag.is_none());
    }
}
