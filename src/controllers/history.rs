use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::history::{HistoryEntryResponse, HistoryService, HistoryServiceApi},
    error::AppResult,
};

pub struct HistoryController {
    history_service: Arc<HistoryService>,
}

impl HistoryController {
    pub fn new(history_service: Arc<HistoryService>) -> Self {
        Self { history_service }
    }

    /// GET /api/history - Latest premium requests, newest first
    pub async fn list_history(
        State(controller): State<Arc<HistoryController>>,
    ) -> AppResult<Json<Vec<HistoryEntryResponse>>> {
        let entries = controller.history_service.recent().await?;
        Ok(Json(entries))
    }
}
