use serde::{Deserialize, Serialize};

/// One recipe/product entry as displayed to the user. `allergens` is always
/// present (empty when the recipe has none); `traces` is display-only and
/// passed through from the analysis service without further validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub allergens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traces: Option<Vec<String>>,
}
