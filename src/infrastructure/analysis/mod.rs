mod http_analysis_client;
mod http_readiness_probe;
mod mock_analysis_client;

pub use http_analysis_client::HttpAnalysisClient;
pub use http_readiness_probe::HttpReadinessProbe;
pub use mock_analysis_client::MockAnalysisClient;
