use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::speech::{
        PremiumSpeakRequest, PremiumSpeakResponse, PremiumSpeechService, PremiumSpeechServiceApi,
    },
    error::AppResult,
};

pub struct PremiumSpeakController {
    speech_service: Arc<PremiumSpeechService>,
}

impl PremiumSpeakController {
    pub fn new(speech_service: Arc<PremiumSpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /api/premium-speak - Record a request and return simulated premium audio
    pub async fn premium_speak(
        State(controller): State<Arc<PremiumSpeakController>>,
        Json(request): Json<PremiumSpeakRequest>,
    ) -> AppResult<Json<PremiumSpeakResponse>> {
        let response = controller.speech_service.generate(request).await?;
        Ok(Json(response))
    }
}
