//! Errors surfaced by the recommendation boundary.

use thiserror::Error;

/// Errors returned when recommendations cannot be produced.
///
/// Both variants mean "there was nothing to rank". They are kept apart from
/// an empty `Ok` page, which is a valid answer for a populated catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// Recommendations were requested before any catalog was primed.
    #[error("no catalog has been primed; prime the engine before requesting recommendations")]
    CatalogNotPrimed,
    /// The catalog snapshot contains no products.
    #[error("the catalog contains no products")]
    EmptyCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_distinguish_missing_from_empty() {
        assert_ne!(
            RecommendError::CatalogNotPrimed.to_string(),
            RecommendError::EmptyCatalog.to_string()
        );
    }
}
