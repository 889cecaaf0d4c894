use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{ReadinessError, ReadinessProbe};
use crate::config::AnalysisSettings;

/// Startup probe against the analysis service. Ready iff the health endpoint
/// reports `status == "ok"` with an API key configured; any other shape or
/// transport failure counts as not-ready.
pub struct HttpReadinessProbe {
    client: Client,
    base_url: String,
}

impl HttpReadinessProbe {
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
impl ReadinessProbe for HttpReadinessProbe {
    #[tracing::instrument(skip(self))]
    async fn check(&self) -> Result<(), ReadinessError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ReadinessError::Unreachable(e.to_string()))?;

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| ReadinessError::Unreachable(e.to_string()))?;

        if health.status != "ok" {
            return Err(ReadinessError::Unreachable(format!(
                "unexpected health status: {}",
                health.status
            )));
        }
        if !health.api_key_configured {
            return Err(ReadinessError::Misconfigured);
        }

        tracing::info!("Analysis service ready");
        Ok(())
    }
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
    api_key_configured: bool,
}
