use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::NormalizedPayload;

/// Sends one normalized payload to the remote analysis service. Exactly one
/// request per invocation, no internal retry; concurrent invocations from
/// overlapping uploads are allowed to race.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, payload: &NormalizedPayload)
        -> Result<AnalysisResponse, AnalysisError>;
}

/// Wire request: a direct serialization of the normalized payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub content: String,
    #[serde(rename = "isImage")]
    pub is_image: bool,
}

impl AnalysisRequest {
    pub fn from_payload(payload: &NormalizedPayload) -> Self {
        Self {
            content: payload.content().to_string(),
            is_image: payload.is_image(),
        }
    }
}

/// The loosely-typed response shape of the analysis service. Exactly one of
/// `products` (success) or `error` (failure) is expected, but the presence of
/// `products` counts as success regardless of `error`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    pub products: Option<Vec<ProductPayload>>,
    pub error: Option<String>,
}

/// One product entry as the service returns it, before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub allergens: Option<Vec<String>>,
    pub traces: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("analysis request failed: {0}")]
    RequestFailed(String),
    #[error("{0}")]
    ServiceRejected(String),
    #[error("invalid response")]
    InvalidResponse,
}
