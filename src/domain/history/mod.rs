pub mod error;
pub mod model;
pub mod service;

pub use error::HistoryServiceError;
pub use model::{HistoryEntry, NewHistoryEntry};
pub use service::{HistoryService, HistoryServiceApi, HISTORY_LIMIT};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response item for GET /api/history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryResponse {
    pub id: Uuid,
    pub text: String,
    pub voice_id: String,
    pub rate: f32,
    pub pitch: f32,
    pub created_at: DateTime<Utc>,
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id,
            text: entry.text,
            voice_id: entry.voice_id,
            rate: entry.rate,
            pitch: entry.pitch,
            created_at: entry.created_at,
        }
    }
}
