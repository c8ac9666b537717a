use crate::domain::history::HistoryEntryResponse;
use crate::domain::playback::{PremiumSpeechClient, RemoteError};
use crate::domain::speech::{PremiumSpeakRequest, PremiumSpeakResponse};
use crate::infrastructure::config::PremiumClientConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

const PREMIUM_SPEAK_PATH: &str = "/api/premium-speak";
const HISTORY_PATH: &str = "/api/history";

/// reqwest-backed client for the premium endpoint
pub struct HttpPremiumSpeechClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpPremiumSpeechClient {
    pub fn new(config: &PremiumClientConfig) -> Result<Self, RemoteError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                body = %body,
                "Premium endpoint returned error"
            );
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PremiumSpeechClient for HttpPremiumSpeechClient {
    async fn premium_speak(
        &self,
        request: &PremiumSpeakRequest,
    ) -> Result<PremiumSpeakResponse, RemoteError> {
        tracing::debug!(
            url = %self.url(PREMIUM_SPEAK_PATH),
            text_length = request.text.len(),
            "Calling premium endpoint"
        );

        let response = self
            .http_client
            .post(self.url(PREMIUM_SPEAK_PATH))
            .json(request)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn history(&self) -> Result<Vec<HistoryEntryResponse>, RemoteError> {
        let response = self
            .http_client
            .get(self.url(HISTORY_PATH))
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Self::read_json(response).await
    }
}
