//! Page-boundary error handling.
//!
//! Every facade failure is recovered here by rendering a fallback view with
//! an appropriate status code. Handlers return `Result<Html<String>,
//! PageError>` and use `?`; nothing panics.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_catalog::CatalogError;
use thiserror::Error;
use tracing::warn;

use crate::pages::render_page;

/// Error rendered as a fallback page.
#[derive(Debug, Error)]
pub enum PageError {
    /// The requested entity does not exist.
    #[error("not found")]
    NotFound,

    /// The request itself was malformed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The metadata provider could not be reached or answered garbage.
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl From<CatalogError> for PageError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound => PageError::NotFound,
            CatalogError::InvalidInput { reason } => PageError::BadRequest(reason),
            CatalogError::UpstreamUnavailable { reason } => PageError::ProviderUnavailable(reason),
            CatalogError::Decode { reason } => PageError::ProviderUnavailable(reason),
        }
    }
}

impl PageError {
    fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PageError::ProviderUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn headline(&self) -> &'static str {
        match self {
            PageError::NotFound => "Not Found",
            PageError::BadRequest(_) => "Bad Request",
            PageError::ProviderUnavailable(_) => "Catalog Unavailable",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            PageError::NotFound => "We couldn't find what you were looking for.",
            PageError::BadRequest(_) => "That request didn't make sense to us.",
            PageError::ProviderUnavailable(_) => {
                "The movie catalog isn't responding right now. Try again in a moment."
            }
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "rendering fallback page");
        }

        let content = format!(
            r#"<div class="text-center py-24">
                <div class="text-6xl mb-4">🎬</div>
                <h2 class="text-2xl font-semibold text-white mb-4">{}</h2>
                <p class="text-gray-400 mb-8">{}</p>
                <a href="/" class="px-4 py-2 bg-marquee-500 hover:bg-marquee-600 text-white rounded-lg font-medium transition-colors">Back to Home</a>
            </div>"#,
            self.headline(),
            self.message()
        );

        (status, render_page(self.headline(), "", &content)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_map_to_page_statuses() {
        assert_eq!(
            PageError::from(CatalogError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PageError::from(CatalogError::InvalidInput {
                reason: "bad id".to_string()
            })
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PageError::from(CatalogError::UpstreamUnavailable {
                reason: "timeout".to_string()
            })
            .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            PageError::from(CatalogError::Decode {
                reason: "schema drift".to_string()
            })
            .status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
