use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use voicealoud::domain::history::HistoryEntry;

pub struct TestFixtures {
    pool: PgPool,
}

impl TestFixtures {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_history_entry(
        &self,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<HistoryEntry> {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            text: text.to_string(),
            voice_id: "Samantha".to_string(),
            rate: 1.0,
            pitch: 1.0,
            created_at,
        };

        sqlx::query(
            r#"
            INSERT INTO speech_history (id, text, voice_id, rate, pitch, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.text)
        .bind(&entry.voice_id)
        .bind(entry.rate)
        .bind(entry.pitch)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Insert `count` entries one minute apart, the last one newest
    pub async fn create_history(&self, count: usize) -> Result<Vec<HistoryEntry>> {
        let start = Utc::now() - Duration::minutes(count as i64);
        let mut entries = Vec::with_capacity(count);
        for i in 0..count {
            let created_at = start + Duration::minutes(i as i64);
            entries.push(
                self.create_history_entry(&format!("entry {}", i), created_at)
                    .await?,
            );
        }
        Ok(entries)
    }

    pub async fn count_history(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM speech_history")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
