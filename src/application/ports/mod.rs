mod analysis_client;
mod content_extractor;
mod readiness_probe;

pub use analysis_client::{
    AnalysisClient, AnalysisError, AnalysisRequest, AnalysisResponse, ProductPayload,
};
pub use content_extractor::{ContentExtractor, ExtractionError};
pub use readiness_probe::{ReadinessError, ReadinessProbe};
