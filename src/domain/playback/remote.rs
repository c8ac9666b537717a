use crate::domain::history::HistoryEntryResponse;
use crate::domain::speech::{PremiumSpeakRequest, PremiumSpeakResponse};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Client side of the premium endpoint and its history log.
#[async_trait]
pub trait PremiumSpeechClient: Send + Sync {
    /// Submit a request for simulated premium audio.
    ///
    /// Non-2xx answers are errors. Safe to call again after a failure: each
    /// call records one more history entry and nothing else.
    async fn premium_speak(
        &self,
        request: &PremiumSpeakRequest,
    ) -> Result<PremiumSpeakResponse, RemoteError>;

    /// Most recent premium requests, newest first.
    async fn history(&self) -> Result<Vec<HistoryEntryResponse>, RemoteError>;
}
