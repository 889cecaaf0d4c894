use async_trait::async_trait;

use crate::domain::{DocumentFormat, NormalizedPayload, UploadedFile};

/// Turns raw uploaded bytes into the single normalized payload for the
/// detected format. May suspend while reading file bytes; no side effects
/// beyond the read itself.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    async fn extract(
        &self,
        file: &UploadedFile,
        format: DocumentFormat,
    ) -> Result<NormalizedPayload, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
