//! Facade behavior through the public API.

use std::sync::Arc;

use async_trait::async_trait;
use marquee_catalog::{
    CatalogError, CatalogService, EmbedConfig, Episode, MediaKind, MediaSummary, MetadataProvider,
    MovieDetail, Paginated, ShowDetail, TrendingScope, TrendingWindow,
};

/// Provider returning a fixed page so pagination forwarding can be observed.
#[derive(Debug)]
struct PagedProvider;

fn summary(id: i64, kind: MediaKind, title: &str) -> MediaSummary {
    MediaSummary {
        id,
        kind,
        title: title.to_string(),
        poster_path: None,
        backdrop_path: None,
        overview: String::new(),
        release_date: None,
        vote_average: 7.0,
        vote_count: 100,
        popularity: 10.0,
    }
}

#[async_trait]
impl MetadataProvider for PagedProvider {
    async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        Ok(Paginated {
            page,
            total_pages: 5,
            total_results: 94,
            results: vec![summary(1, MediaKind::Movie, query)],
        })
    }

    async fn trending(
        &self,
        _scope: TrendingScope,
        _window: TrendingWindow,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        Ok(Paginated::empty(1))
    }

    async fn popular_movies(&self, _page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        Ok(Paginated::empty(1))
    }

    async fn popular_shows(&self, _page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        Ok(Paginated::empty(1))
    }

    async fn movie_details(&self, _id: i64) -> Result<MovieDetail, CatalogError> {
        Err(CatalogError::NotFound)
    }

    async fn show_details(&self, _id: i64) -> Result<ShowDetail, CatalogError> {
        Err(CatalogError::NotFound)
    }

    async fn season_episodes(
        &self,
        _show_id: i64,
        _season_number: u32,
    ) -> Result<Vec<Episode>, CatalogError> {
        Err(CatalogError::NotFound)
    }
}

fn paged_service() -> CatalogService {
    CatalogService::with_provider(Arc::new(PagedProvider), EmbedConfig::default())
}

#[tokio::test]
async fn pagination_metadata_travels_through_the_facade() {
    let page = paged_service().search("dune", 2).await.unwrap();
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.total_results, 94);
}

#[tokio::test]
async fn empty_query_never_reaches_the_provider() {
    // PagedProvider would return a non-empty page for any query it sees.
    let page = paged_service().search("   ", 1).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn details_for_unknown_id_is_not_found_not_a_fault() {
    let error = paged_service()
        .details(424242, MediaKind::Movie)
        .await
        .unwrap_err();
    assert!(error.is_not_found());
}

#[tokio::test]
async fn absent_season_is_an_empty_list() {
    let episodes = paged_service().season_episodes(1399, 42).await.unwrap();
    assert!(episodes.is_empty());
}

#[tokio::test]
async fn demo_catalog_supports_the_full_browse_flow() {
    let catalog = CatalogService::new_demo(EmbedConfig::default());

    let results = catalog.search("matrix", 1).await.unwrap();
    assert_eq!(results.results.len(), 1);
    let hit = &results.results[0];
    assert_eq!(hit.kind, MediaKind::Movie);

    let detail = catalog.movie_details(hit.id).await.unwrap();
    assert_eq!(detail.summary.title, "The Matrix");
    assert!(detail.trailer.is_some());

    let shows = catalog.popular_shows(1).await.unwrap();
    let show = catalog.show_details(shows.results[0].id).await.unwrap();
    assert!(show.number_of_seasons > 0);

    let episodes = catalog
        .season_episodes(show.summary.id, 1)
        .await
        .unwrap();
    assert!(!episodes.is_empty());
}
