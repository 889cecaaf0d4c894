use super::product::ProductRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Loading,
    Done,
    Error,
}

/// Pipeline lifecycle events, emitted by the orchestrating UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    UploadStarted { file_name: String },
    AnalysisCompleted { products: Vec<ProductRecord> },
    AnalysisFailed { message: String },
}

/// The single current view of the latest upload's outcome. Owned exclusively
/// by the UI layer and advanced through the pure [`PipelineState::apply`]
/// reducer; the core pipeline itself is stateless.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineState {
    pub status: UploadStatus,
    pub current_file_name: Option<String>,
    pub products: Vec<ProductRecord>,
    pub error_message: Option<String>,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self::idle()
    }
}

impl PipelineState {
    pub fn idle() -> Self {
        Self {
            status: UploadStatus::Idle,
            current_file_name: None,
            products: Vec::new(),
            error_message: None,
        }
    }

    /// Pure reducer. A new upload clears the previous outcome, and terminal
    /// events replace the displayed result outright: overlapping runs are
    /// neither cancelled nor deduplicated, so the last one to resolve wins.
    pub fn apply(self, event: PipelineEvent) -> Self {
        match event {
            PipelineEvent::UploadStarted { file_name } => Self {
                status: UploadStatus::Loading,
                current_file_name: Some(file_name),
                products: Vec::new(),
                error_message: None,
            },
            PipelineEvent::AnalysisCompleted { products } => Self {
                status: UploadStatus::Done,
                products,
                error_message: None,
                ..self
            },
            PipelineEvent::AnalysisFailed { message } => Self {
                status: UploadStatus::Error,
                products: Vec::new(),
                error_message: Some(message),
                ..self
            },
        }
    }
}
