//! Error types for catalog operations.

use thiserror::Error;

/// Errors that can occur while serving catalog requests.
///
/// Nothing here is fatal to the process; pages recover from every variant by
/// rendering a fallback view.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Valid request, but the provider has no matching entity.
    #[error("no matching entity")]
    NotFound,

    /// The remote call could not complete (network failure or provider 5xx).
    #[error("metadata provider unavailable: {reason}")]
    UpstreamUnavailable {
        /// Transport or provider status detail
        reason: String,
    },

    /// Malformed identifier, season, or episode, rejected before any
    /// upstream call.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },

    /// The provider responded successfully but the body did not match the
    /// expected shape.
    #[error("malformed provider response: {reason}")]
    Decode {
        /// The reason deserialization failed
        reason: String,
    },
}

impl CatalogError {
    /// Whether this error means the requested entity simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguishable() {
        assert!(CatalogError::NotFound.is_not_found());
        assert!(
            !CatalogError::UpstreamUnavailable {
                reason: "connection refused".to_string()
            }
            .is_not_found()
        );
    }

    #[test]
    fn display_includes_reason() {
        let error = CatalogError::InvalidInput {
            reason: "id must be positive".to_string(),
        };
        assert!(error.to_string().contains("id must be positive"));
    }
}
