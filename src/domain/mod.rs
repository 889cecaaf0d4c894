mod document_format;
mod payload;
mod pipeline_state;
mod product;
mod uploaded_file;

pub use document_format::DocumentFormat;
pub use payload::NormalizedPayload;
pub use pipeline_state::{PipelineEvent, PipelineState, UploadStatus};
pub use product::ProductRecord;
pub use uploaded_file::UploadedFile;
