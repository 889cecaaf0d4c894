mod analysis_pipeline;
mod result_projector;

pub use analysis_pipeline::{AnalysisPipeline, PipelineError};
pub use result_projector::{project, ProjectionError};
