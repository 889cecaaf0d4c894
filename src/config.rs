use serde::Deserialize;

/// Production endpoint of the allergen analysis service.
pub const DEFAULT_BASE_URL: &str = "https://hogust-allergenes.onrender.com";

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    pub base_url: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
