use crate::domain::playback::PlaybackRequest;
use serde::{Deserialize, Serialize};

/// Request for POST /api/premium-speak
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumSpeakRequest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f32>,
}

impl From<&PlaybackRequest> for PremiumSpeakRequest {
    fn from(request: &PlaybackRequest) -> Self {
        let voice = Some(request.voice_id())
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        Self {
            text: request.text().to_string(),
            voice,
            rate: Some(request.rate()),
            pitch: Some(request.pitch()),
        }
    }
}

/// Response for POST /api/premium-speak
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumSpeakResponse {
    pub message: String,
    pub audio_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_id: Option<String>,
}
