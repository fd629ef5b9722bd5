//! Provider implementations for the catalog facade.

use async_trait::async_trait;

use crate::errors::CatalogError;
use crate::types::{
    Episode, MediaSummary, MovieDetail, Paginated, ShowDetail, TrendingScope, TrendingWindow,
};

pub mod demo;
pub mod mock;
pub mod tmdb;

pub use demo::StaticProvider;
#[cfg(test)]
pub use mock::MockProvider;
pub use tmdb::TmdbProvider;

/// Trait for remote metadata providers.
///
/// Implementations normalize a provider's wire format into the catalog types
/// exactly once, at this boundary; kind tags are assigned here and never
/// inferred downstream. Stream-URL resolution is provider-independent and not
/// part of this trait.
#[async_trait]
pub trait MetadataProvider: Send + Sync + std::fmt::Debug {
    /// Search movies, shows, and persons by free-text query.
    ///
    /// # Errors
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    async fn search(&self, query: &str, page: u32)
    -> Result<Paginated<MediaSummary>, CatalogError>;

    /// Trending entries for a scope over a time window.
    ///
    /// # Errors
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    async fn trending(
        &self,
        scope: TrendingScope,
        window: TrendingWindow,
    ) -> Result<Paginated<MediaSummary>, CatalogError>;

    /// Popular movies, paged.
    ///
    /// # Errors
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    async fn popular_movies(&self, page: u32) -> Result<Paginated<MediaSummary>, CatalogError>;

    /// Popular shows, paged.
    ///
    /// # Errors
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    async fn popular_shows(&self, page: u32) -> Result<Paginated<MediaSummary>, CatalogError>;

    /// Full movie detail, including credits, videos, and related titles.
    ///
    /// # Errors
    /// - `CatalogError::NotFound` - No movie with this id
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    async fn movie_details(&self, id: i64) -> Result<MovieDetail, CatalogError>;

    /// Full show detail, including credits, videos, and related titles.
    ///
    /// # Errors
    /// - `CatalogError::NotFound` - No show with this id
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    async fn show_details(&self, id: i64) -> Result<ShowDetail, CatalogError>;

    /// Episodes of one season of a show.
    ///
    /// # Errors
    /// - `CatalogError::NotFound` - The show or season does not exist
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    async fn season_episodes(
        &self,
        show_id: i64,
        season_number: u32,
    ) -> Result<Vec<Episode>, CatalogError>;
}
