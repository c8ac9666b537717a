use super::error::PlaybackError;
use serde::{Deserialize, Serialize};

pub const MIN_SPEECH_PARAM: f32 = 0.5;
pub const MAX_SPEECH_PARAM: f32 = 2.0;
pub const DEFAULT_SPEECH_PARAM: f32 = 1.0;

/// Clamp a rate or pitch into the supported range.
///
/// Returns `None` for NaN and infinities, which have no meaningful clamp.
pub fn clamp_speech_param(value: f32) -> Option<f32> {
    if !value.is_finite() {
        return None;
    }
    Some(value.clamp(MIN_SPEECH_PARAM, MAX_SPEECH_PARAM))
}

/// A validated request to speak some text, locally or through the premium endpoint.
///
/// The text is non-blank and rate/pitch lie within `[0.5, 2.0]`. Deserialization
/// goes through [`PlaybackRequest::new`] as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlaybackRequest")]
pub struct PlaybackRequest {
    text: String,
    voice_id: String,
    rate: f32,
    pitch: f32,
}

#[derive(Deserialize)]
struct RawPlaybackRequest {
    text: String,
    voice_id: String,
    rate: f32,
    pitch: f32,
}

impl TryFrom<RawPlaybackRequest> for PlaybackRequest {
    type Error = PlaybackError;

    fn try_from(raw: RawPlaybackRequest) -> Result<Self, Self::Error> {
        Self::new(raw.text, raw.voice_id, raw.rate, raw.pitch)
    }
}

impl PlaybackRequest {
    pub fn new(
        text: impl Into<String>,
        voice_id: impl Into<String>,
        rate: f32,
        pitch: f32,
    ) -> Result<Self, PlaybackError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(PlaybackError::InvalidInput(
                "Text cannot be empty".to_string(),
            ));
        }

        let rate = clamp_speech_param(rate)
            .ok_or_else(|| PlaybackError::InvalidInput(format!("Invalid rate: {}", rate)))?;
        let pitch = clamp_speech_param(pitch)
            .ok_or_else(|| PlaybackError::InvalidInput(format!("Invalid pitch: {}", pitch)))?;

        Ok(Self {
            text,
            voice_id: voice_id.into(),
            rate,
            pitch,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voice_id(&self) -> &str {
        &self.voice_id
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}
