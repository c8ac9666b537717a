use super::error::HistoryServiceError;
use super::HistoryEntryResponse;
use crate::infrastructure::repositories::HistoryRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Maximum number of entries returned by the history query
pub const HISTORY_LIMIT: i64 = 20;

pub struct HistoryService {
    history_repo: Arc<dyn HistoryRepository>,
}

impl HistoryService {
    pub fn new(history_repo: Arc<dyn HistoryRepository>) -> Self {
        Self { history_repo }
    }
}

#[async_trait]
pub trait HistoryServiceApi: Send + Sync {
    /// Recorded premium requests, newest first, at most [`HISTORY_LIMIT`]
    async fn recent(&self) -> Result<Vec<HistoryEntryResponse>, HistoryServiceError>;
}

#[async_trait]
impl HistoryServiceApi for HistoryService {
    async fn recent(&self) -> Result<Vec<HistoryEntryResponse>, HistoryServiceError> {
        let entries = self.history_repo.find_recent(HISTORY_LIMIT).await?;

        tracing::debug!(count = entries.len(), "History fetched");

        Ok(entries.into_iter().map(HistoryEntryResponse::from).collect())
    }
}
