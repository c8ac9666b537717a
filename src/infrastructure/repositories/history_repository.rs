use crate::domain::history::{HistoryEntry, NewHistoryEntry};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Append-only log of premium speech requests.
///
/// Implementations only ever insert and read; entries are immutable once
/// written.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Insert a new entry and return it with its generated id and timestamp
    async fn insert_one(&self, entry: &NewHistoryEntry) -> AppResult<HistoryEntry>;

    /// Most recent entries first, at most `limit`
    async fn find_recent(&self, limit: i64) -> AppResult<Vec<HistoryEntry>>;
}

pub struct PgHistoryRepository {
    pool: Arc<DbPool>,
}

impl PgHistoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for PgHistoryRepository {
    async fn insert_one(&self, entry: &NewHistoryEntry) -> AppResult<HistoryEntry> {
        let pool = self.pool.as_ref();
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        let saved = sqlx::query_as::<_, HistoryEntry>(
            r#"
            INSERT INTO speech_history (id, text, voice_id, rate, pitch, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, text, voice_id, rate, pitch, created_at
            "#,
        )
        .bind(id)
        .bind(&entry.text)
        .bind(&entry.voice_id)
        .bind(entry.rate)
        .bind(entry.pitch)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(saved)
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<HistoryEntry>> {
        let pool = self.pool.as_ref();
        let entries = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT id, text, voice_id, rate, pitch, created_at
            FROM speech_history
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}
