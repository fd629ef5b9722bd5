//! Catalog facade service.
//!
//! The page-facing surface of the crate: wraps a [`MetadataProvider`] behind
//! input validation and the empty-result policies the pages rely on, and
//! resolves streaming-embed URLs. Holds no mutable state; cloning shares the
//! underlying provider.

use std::sync::Arc;

use crate::config::{CatalogConfig, EmbedConfig};
use crate::errors::CatalogError;
use crate::providers::{MetadataProvider, StaticProvider, TmdbProvider};
use crate::stream;
use crate::types::{
    Episode, MediaDetail, MediaKind, MediaSummary, MovieDetail, Paginated, ShowDetail,
    TrendingScope, TrendingWindow,
};

/// Media catalog facade consumed by rendering pages.
#[derive(Debug, Clone)]
pub struct CatalogService {
    provider: Arc<dyn MetadataProvider>,
    embed: EmbedConfig,
}

impl CatalogService {
    /// Creates a service backed by the real TMDB provider.
    ///
    /// # Errors
    /// - `CatalogError::UpstreamUnavailable` - The HTTP client could not be
    ///   constructed
    pub fn new(config: CatalogConfig, embed: EmbedConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            provider: Arc::new(TmdbProvider::from_config(config)?),
            embed,
        })
    }

    /// Creates a service backed by the static demo catalog.
    ///
    /// Serves fixed data so pages can be exercised without credentials or
    /// network access.
    pub fn new_demo(embed: EmbedConfig) -> Self {
        Self {
            provider: Arc::new(StaticProvider::new()),
            embed,
        }
    }

    /// Creates a service around an explicit provider implementation.
    pub fn with_provider(provider: Arc<dyn MetadataProvider>, embed: EmbedConfig) -> Self {
        Self { provider, embed }
    }

    /// Search movies, shows, and persons by free-text query.
    ///
    /// An empty or whitespace-only query yields an empty page without calling
    /// the provider. Pagination metadata is forwarded from the provider
    /// unchanged; a page below 1 is clamped to 1.
    ///
    /// # Errors
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    pub async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        let page = page.max(1);
        let query = query.trim();
        if query.is_empty() {
            return Ok(Paginated::empty(page));
        }
        self.provider.search(query, page).await
    }

    /// Trending entries for a scope over a time window.
    ///
    /// # Errors
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    pub async fn trending(
        &self,
        scope: TrendingScope,
        window: TrendingWindow,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        self.provider.trending(scope, window).await
    }

    /// Popular movies, paged.
    ///
    /// # Errors
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    pub async fn popular_movies(&self, page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        self.provider.popular_movies(page.max(1)).await
    }

    /// Popular shows, paged.
    ///
    /// # Errors
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    pub async fn popular_shows(&self, page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        self.provider.popular_shows(page.max(1)).await
    }

    /// Full movie detail.
    ///
    /// # Errors
    /// - `CatalogError::InvalidInput` - Non-positive id
    /// - `CatalogError::NotFound` - No movie with this id
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    pub async fn movie_details(&self, id: i64) -> Result<MovieDetail, CatalogError> {
        validate_id(id)?;
        self.provider.movie_details(id).await
    }

    /// Full detail for a movie or show, dispatched by kind tag.
    ///
    /// # Errors
    /// - `CatalogError::InvalidInput` - Non-positive id, or a person kind
    /// - `CatalogError::NotFound` - No entity with this id
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    pub async fn details(&self, id: i64, kind: MediaKind) -> Result<MediaDetail, CatalogError> {
        match kind {
            MediaKind::Movie => Ok(MediaDetail::Movie(self.movie_details(id).await?)),
            MediaKind::Show => Ok(MediaDetail::Show(self.show_details(id).await?)),
            MediaKind::Person => Err(CatalogError::InvalidInput {
                reason: "persons have no detail page".to_string(),
            }),
        }
    }

    /// Full show detail.
    ///
    /// # Errors
    /// - `CatalogError::InvalidInput` - Non-positive id
    /// - `CatalogError::NotFound` - No show with this id
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    pub async fn show_details(&self, id: i64) -> Result<ShowDetail, CatalogError> {
        validate_id(id)?;
        self.provider.show_details(id).await
    }

    /// Episodes of one season of a show.
    ///
    /// An absent show or season yields an empty list, not an error; the page
    /// renders an empty state either way.
    ///
    /// # Errors
    /// - `CatalogError::InvalidInput` - Non-positive id
    /// - `CatalogError::UpstreamUnavailable` - Remote call could not complete
    /// - `CatalogError::Decode` - Response did not match the expected shape
    pub async fn season_episodes(
        &self,
        show_id: i64,
        season_number: u32,
    ) -> Result<Vec<Episode>, CatalogError> {
        validate_id(show_id)?;
        match self.provider.season_episodes(show_id, season_number).await {
            Ok(episodes) => Ok(episodes),
            Err(CatalogError::NotFound) => Ok(Vec::new()),
            Err(other) => Err(other),
        }
    }

    /// Resolves the streaming-embed URL for a media target.
    ///
    /// Pure templating over configuration; no remote call is made.
    ///
    /// # Errors
    /// - `CatalogError::InvalidInput` - Non-positive id, zero season/episode,
    ///   or a person target
    pub fn resolve_stream_url(
        &self,
        id: i64,
        kind: MediaKind,
        season: Option<u32>,
        episode: Option<u32>,
    ) -> Result<String, CatalogError> {
        stream::resolve_stream_url(&self.embed, id, kind, season, episode)
    }
}

fn validate_id(id: i64) -> Result<(), CatalogError> {
    if id <= 0 {
        return Err(CatalogError::InvalidInput {
            reason: format!("media id must be positive, got {id}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;
    use crate::types::Paginated;

    fn service_with(provider: MockProvider) -> CatalogService {
        CatalogService::with_provider(Arc::new(provider), EmbedConfig::default())
    }

    #[tokio::test]
    async fn empty_query_short_circuits_to_empty_page() {
        // The mock would fail if called; an empty query must never reach it.
        let service = service_with(MockProvider::unavailable());

        let page = service.search("", 1).await.unwrap();
        assert!(page.is_empty());

        let page = service.search("   ", 4).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.page, 4);
    }

    #[tokio::test]
    async fn page_below_one_is_clamped() {
        let service = service_with(MockProvider::new());
        let page = service.search("", 0).await.unwrap();
        assert_eq!(page.page, 1);
    }

    #[tokio::test]
    async fn pagination_metadata_is_forwarded_unchanged() {
        let mut provider = MockProvider::new();
        provider.listing = Some(Paginated {
            page: 2,
            total_pages: 5,
            total_results: 94,
            results: Vec::new(),
        });
        let service = service_with(provider);

        let page = service.search("dune", 2).await.unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.total_results, 94);
    }

    #[tokio::test]
    async fn missing_details_surface_as_not_found() {
        let service = service_with(MockProvider::new());
        let error = service.movie_details(999_999).await.unwrap_err();
        assert!(error.is_not_found());

        let error = service.details(999_999, MediaKind::Show).await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn person_details_are_invalid_input() {
        let service = service_with(MockProvider::new());
        let error = service.details(500, MediaKind::Person).await.unwrap_err();
        assert!(matches!(error, CatalogError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn non_positive_id_is_rejected_before_the_provider() {
        // Provider is down; only local validation can produce this error.
        let service = service_with(MockProvider::unavailable());
        let error = service.movie_details(0).await.unwrap_err();
        assert!(matches!(error, CatalogError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn absent_season_yields_empty_episode_list() {
        let service = service_with(MockProvider::new());
        let episodes = service.season_episodes(1399, 99).await.unwrap();
        assert!(episodes.is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_propagates_from_season_lookup() {
        let service = service_with(MockProvider::unavailable());
        let error = service.season_episodes(1399, 1).await.unwrap_err();
        assert!(matches!(error, CatalogError::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn demo_service_serves_details_and_streams() {
        let service = CatalogService::new_demo(EmbedConfig::default());

        let detail = service.movie_details(550).await.unwrap();
        assert_eq!(detail.summary.title, "Fight Club");

        let url = service
            .resolve_stream_url(550, MediaKind::Movie, None, None)
            .unwrap();
        assert_eq!(url, "https://vidsrc.to/embed/movie/550");
    }
}
