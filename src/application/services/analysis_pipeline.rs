use std::sync::Arc;

use crate::application::ports::{
    AnalysisClient, AnalysisError, ContentExtractor, ExtractionError,
};
use crate::domain::{DocumentFormat, ProductRecord, UploadedFile};

use super::result_projector::{project, ProjectionError};

/// Any stage failure, caught at the single top-level orchestration point and
/// converted into one user-visible message. Never fatal: every error is
/// recoverable by retrying the upload action.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

impl PipelineError {
    /// The banner message shown above the upload surface. Server-provided
    /// analysis messages surface verbatim; the rest get the generic wrapping.
    pub fn user_message(&self) -> String {
        format!("Erreur lors de l'analyse : {self}")
    }
}

/// Runs one upload end to end: detect, extract, analyze, project. Strictly
/// sequential and single-shot; holds no state between runs.
pub struct AnalysisPipeline<E, A>
where
    E: ContentExtractor,
    A: AnalysisClient,
{
    extractor: Arc<E>,
    client: Arc<A>,
}

impl<E, A> AnalysisPipeline<E, A>
where
    E: ContentExtractor,
    A: AnalysisClient,
{
    pub fn new(extractor: Arc<E>, client: Arc<A>) -> Self {
        Self { extractor, client }
    }

    #[tracing::instrument(
        skip(self, file),
        fields(filename = %file.name, mime_type = %file.mime_type)
    )]
    pub async fn run(&self, file: &UploadedFile) -> Result<Vec<ProductRecord>, PipelineError> {
        let format = DocumentFormat::detect(file);
        tracing::debug!(format = format.as_str(), "Document format detected");

        let payload = self.extractor.extract(file, format).await?;
        tracing::debug!(
            is_image = payload.is_image(),
            content_len = payload.content().len(),
            "Payload normalized"
        );

        let response = self.client.analyze(&payload).await?;
        let products = project(&response)?;

        tracing::info!(product_count = products.len(), "Analysis complete");
        Ok(products)
    }
}
