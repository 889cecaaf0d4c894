use async_trait::async_trait;

/// Startup check deciding whether the analysis client may be used at all.
/// Any failure leaves the upload surface disabled until a full reload.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn check(&self) -> Result<(), ReadinessError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReadinessError {
    #[error("analysis service unreachable: {0}")]
    Unreachable(String),
    #[error("analysis service has no API key configured")]
    Misconfigured,
}
