//! Simulated premium speech generation.
//!
//! No audio is produced here. The service records the request, waits for the
//! configured delay to mimic a synthesis provider, and answers with a fixed
//! placeholder URL. Swapping in a real provider means replacing
//! [`PremiumSpeechService::generate`]'s simulation step, nothing else.

use super::dto::{PremiumSpeakRequest, PremiumSpeakResponse};
use super::error::SpeechServiceError;
use crate::domain::history::NewHistoryEntry;
use crate::domain::playback::request::{clamp_speech_param, DEFAULT_SPEECH_PARAM};
use crate::infrastructure::repositories::HistoryRepository;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub const MAX_TEXT_CHARS: usize = 10_000;
pub const DEFAULT_VOICE: &str = "default";
pub const SIMULATED_MESSAGE: &str = "Premium audio generated! (Simulated)";
pub const SIMULATED_AUDIO_URL: &str =
    "https://storage.googleapis.com/audio-samples/fake-audio.mp3";

pub struct PremiumSpeechService {
    history_repo: Arc<dyn HistoryRepository>,
    simulated_delay: Duration,
}

impl PremiumSpeechService {
    pub fn new(history_repo: Arc<dyn HistoryRepository>, simulated_delay: Duration) -> Self {
        Self {
            history_repo,
            simulated_delay,
        }
    }
}

#[async_trait]
pub trait PremiumSpeechServiceApi: Send + Sync {
    /// Record a premium request and return the simulated result
    ///
    /// This operation:
    /// - Rejects blank or oversized text
    /// - Clamps rate and pitch into the supported range
    /// - Stores the request in the history log
    /// - Sleeps for the simulated generation delay
    async fn generate(
        &self,
        request: PremiumSpeakRequest,
    ) -> Result<PremiumSpeakResponse, SpeechServiceError>;
}

#[async_trait]
impl PremiumSpeechServiceApi for PremiumSpeechService {
    async fn generate(
        &self,
        request: PremiumSpeakRequest,
    ) -> Result<PremiumSpeakResponse, SpeechServiceError> {
        let entry = self.validate(request)?;

        tracing::info!(
            voice = %entry.voice_id,
            rate = entry.rate,
            pitch = entry.pitch,
            text_length = entry.text.chars().count(),
            "Premium speech request"
        );

        let saved = self.history_repo.insert_one(&entry).await?;

        tracing::info!(
            saved_id = %saved.id,
            delay_ms = self.simulated_delay.as_millis() as u64,
            "Simulating premium voice generation"
        );
        tokio::time::sleep(self.simulated_delay).await;

        Ok(PremiumSpeakResponse {
            message: SIMULATED_MESSAGE.to_string(),
            audio_url: SIMULATED_AUDIO_URL.to_string(),
            saved_id: Some(saved.id.to_string()),
        })
    }
}

impl PremiumSpeechService {
    fn validate(
        &self,
        request: PremiumSpeakRequest,
    ) -> Result<NewHistoryEntry, SpeechServiceError> {
        if request.text.trim().is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        if request.text.chars().count() > MAX_TEXT_CHARS {
            return Err(SpeechServiceError::TooLarge(
                "Text must be 10,000 characters or less".to_string(),
            ));
        }

        let rate = Self::speech_param("rate", request.rate)?;
        let pitch = Self::speech_param("pitch", request.pitch)?;

        let voice_id = request
            .voice
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_VOICE.to_string());

        Ok(NewHistoryEntry {
            text: request.text,
            voice_id,
            rate,
            pitch,
        })
    }

    fn speech_param(name: &str, value: Option<f32>) -> Result<f32, SpeechServiceError> {
        let value = value.unwrap_or(DEFAULT_SPEECH_PARAM);
        clamp_speech_param(value)
            .ok_or_else(|| SpeechServiceError::Invalid(format!("Invalid {}: {}", name, value)))
    }
}
