use crate::application::ports::{AnalysisResponse, ProductPayload};
use crate::domain::ProductRecord;

#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("invalid response format")]
    MissingProducts,
}

/// Validates the response shape and produces the renderable product list.
///
/// `products` present (even empty) is success; each record is normalized with
/// `allergens` defaulted to empty and `traces` passed through unchanged.
/// `products` absent is a contract violation regardless of `error` — the
/// user-facing analysis failures are raised earlier, by the client. Order is
/// preserved exactly; never sorts or deduplicates.
pub fn project(response: &AnalysisResponse) -> Result<Vec<ProductRecord>, ProjectionError> {
    let products = response
        .products
        .as_ref()
        .ok_or(ProjectionError::MissingProducts)?;

    Ok(products.iter().cloned().map(normalize).collect())
}

fn normalize(payload: ProductPayload) -> ProductRecord {
    ProductRecord {
        name: payload.name,
        allergens: payload.allergens.unwrap_or_default(),
        traces: payload.traces,
    }
}
