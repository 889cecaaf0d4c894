use crate::application::ports::{AnalysisClient, AnalysisError, AnalysisResponse};
use crate::domain::NormalizedPayload;

/// Canned client for wiring tests without a live analysis service.
pub struct MockAnalysisClient {
    response: AnalysisResponse,
}

impl MockAnalysisClient {
    pub fn returning(response: AnalysisResponse) -> Self {
        Self { response }
    }
}

#[async_trait::async_trait]
impl AnalysisClient for MockAnalysisClient {
    async fn analyze(
        &self,
        _payload: &NormalizedPayload,
    ) -> Result<AnalysisResponse, AnalysisError> {
        Ok(self.response.clone())
    }
}
