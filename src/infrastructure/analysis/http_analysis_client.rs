use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{
    AnalysisClient, AnalysisError, AnalysisRequest, AnalysisResponse,
};
use crate::config::AnalysisSettings;
use crate::domain::NormalizedPayload;

/// HTTP adapter for the remote analysis service. Single round-trip per call;
/// no timeout beyond reqwest's connection defaults and no retry.
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        Self::new(&settings.base_url)
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    #[tracing::instrument(skip(self, payload), fields(is_image = payload.is_image()))]
    async fn analyze(
        &self,
        payload: &NormalizedPayload,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let request = AnalysisRequest::from_payload(payload);
        let url = format!("{}/analyze", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("analysis service returned {status}"));
            tracing::warn!(%status, "Analysis request rejected");
            return Err(AnalysisError::ServiceRejected(message));
        }

        response
            .json::<AnalysisResponse>()
            .await
            .map_err(|_| AnalysisError::InvalidResponse)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}
