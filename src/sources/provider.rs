use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("source task failed: {0}")]
    Task(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Trait that every external match source must implement.
///
/// Rows are returned as raw JSON objects; field naming is the source's own
/// and gets normalized by the converter.
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Return the upcoming or in-progress matches this source knows about.
    async fn fetch_matches(&self) -> Result<Vec<Value>, SourceError>;

    /// Human-readable name for logging and the `source` tag.
    fn name(&self) -> &str;
}

/// Adapts a blocking closure into a [`MatchSource`].
///
/// The closure runs on tokio's blocking pool so a slow synchronous fetcher
/// can still be bounded by the dispatcher's timeout.
pub struct FnSource<F> {
    name: String,
    fetch: Arc<F>,
}

impl<F> FnSource<F>
where
    F: Fn() -> anyhow::Result<Vec<Value>> + Send + Sync + 'static,
{
    pub fn new(name: &str, fetch: F) -> Self {
        FnSource {
            name: name.to_string(),
            fetch: Arc::new(fetch),
        }
    }
}

#[async_trait]
impl<F> MatchSource for FnSource<F>
where
    F: Fn() -> anyhow::Result<Vec<Value>> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_matches(&self) -> Result<Vec<Value>, SourceError> {
        let fetch = Arc::clone(&self.fetch);
        let rows = tokio::task::spawn_blocking(move || (*fetch)())
            .await
            .map_err(|e| SourceError::Task(e.to_string()))??;
        Ok(rows)
    }
}
