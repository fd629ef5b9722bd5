//! Mock provider implementation for testing.

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::MetadataProvider;
#[cfg(test)]
use crate::errors::CatalogError;
#[cfg(test)]
use crate::types::{
    Episode, MediaSummary, MovieDetail, Paginated, ShowDetail, TrendingScope, TrendingWindow,
};

/// Mock provider that fails or returns canned pages on demand.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockProvider {
    /// When set, every operation fails with this error
    pub failure: Option<CatalogError>,
    /// Page returned by listing operations
    pub listing: Option<Paginated<MediaSummary>>,
}

#[cfg(test)]
impl MockProvider {
    /// Creates a mock provider returning empty pages and `NotFound` details.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock provider where every operation fails upstream.
    pub fn unavailable() -> Self {
        Self {
            failure: Some(CatalogError::UpstreamUnavailable {
                reason: "mock outage".to_string(),
            }),
            listing: None,
        }
    }

    fn listing_or_empty(&self) -> Result<Paginated<MediaSummary>, CatalogError> {
        if let Some(ref failure) = self.failure {
            return Err(failure.clone());
        }
        Ok(self.listing.clone().unwrap_or_else(|| Paginated::empty(1)))
    }
}

#[cfg(test)]
#[async_trait]
impl MetadataProvider for MockProvider {
    async fn search(
        &self,
        _query: &str,
        _page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        self.listing_or_empty()
    }

    async fn trending(
        &self,
        _scope: TrendingScope,
        _window: TrendingWindow,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        self.listing_or_empty()
    }

    async fn popular_movies(&self, _page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        self.listing_or_empty()
    }

    async fn popular_shows(&self, _page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        self.listing_or_empty()
    }

    async fn movie_details(&self, _id: i64) -> Result<MovieDetail, CatalogError> {
        Err(self.failure.clone().unwrap_or(CatalogError::NotFound))
    }

    async fn show_details(&self, _id: i64) -> Result<ShowDetail, CatalogError> {
        Err(self.failure.clone().unwrap_or(CatalogError::NotFound))
    }

    async fn season_episodes(
        &self,
        _show_id: i64,
        _season_number: u32,
    ) -> Result<Vec<Episode>, CatalogError> {
        Err(self.failure.clone().unwrap_or(CatalogError::NotFound))
    }
}
