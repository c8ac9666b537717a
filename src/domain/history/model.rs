use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One recorded premium request. Never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub text: String,
    pub voice_id: String,
    pub rate: f32,
    pub pitch: f32,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when recording a request
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub text: String,
    pub voice_id: String,
    pub rate: f32,
    pub pitch: f32,
}
