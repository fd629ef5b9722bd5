//! Full page renders over the router with the demo catalog.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use marquee_catalog::{
    CatalogError, CatalogService, EmbedConfig, Episode, MediaSummary, MetadataProvider,
    MovieDetail, Paginated, ShowDetail, TrendingScope, TrendingWindow,
};
use marquee_web::{AppState, router};
use tower::ServiceExt;

fn demo_router() -> Router {
    router(AppState::new(CatalogService::new_demo(
        EmbedConfig::default(),
    )))
}

async fn fetch(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn browse_detail_and_watch_flow_renders_end_to_end() {
    let (status, body) = fetch(demo_router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/movies/550"));

    let (status, body) = fetch(demo_router(), "/movies/550").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/watch/movie/550"));

    let (status, body) = fetch(demo_router(), "/watch/movie/550").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<iframe src=\"https://vidsrc.to/embed/movie/550\""));
}

#[tokio::test]
async fn show_flow_reaches_an_episode_embed() {
    let (status, body) = fetch(demo_router(), "/tv/1396").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/tv/1396/season/1"));

    let (status, body) = fetch(demo_router(), "/tv/1396/season/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/watch/tv/1396?season=1&episode=1"));

    let (status, body) = fetch(demo_router(), "/watch/tv/1396?season=1&episode=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("https://vidsrc.to/embed/tv/1396/1/1"));
}

/// Provider that always fails upstream, to observe page-boundary recovery.
#[derive(Debug)]
struct OutageProvider;

#[async_trait]
impl MetadataProvider for OutageProvider {
    async fn search(
        &self,
        _query: &str,
        _page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        Err(outage())
    }

    async fn trending(
        &self,
        _scope: TrendingScope,
        _window: TrendingWindow,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        Err(outage())
    }

    async fn popular_movies(&self, _page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        Err(outage())
    }

    async fn popular_shows(&self, _page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        Err(outage())
    }

    async fn movie_details(&self, _id: i64) -> Result<MovieDetail, CatalogError> {
        Err(outage())
    }

    async fn show_details(&self, _id: i64) -> Result<ShowDetail, CatalogError> {
        Err(outage())
    }

    async fn season_episodes(
        &self,
        _show_id: i64,
        _season_number: u32,
    ) -> Result<Vec<Episode>, CatalogError> {
        Err(outage())
    }
}

fn outage() -> CatalogError {
    CatalogError::UpstreamUnavailable {
        reason: "simulated outage".to_string(),
    }
}

fn outage_router() -> Router {
    let catalog =
        CatalogService::with_provider(Arc::new(OutageProvider), EmbedConfig::default());
    router(AppState::new(catalog))
}

#[tokio::test]
async fn provider_outage_renders_fallback_views_not_crashes() {
    // Detail pages surface the outage as a 502 fallback page.
    let (status, body) = fetch(outage_router(), "/movies/550").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Catalog Unavailable"));

    // The home page degrades section by section and still renders.
    let (status, body) = fetch(outage_router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("couldn't be loaded"));

    // Stream resolution needs no provider at all.
    let (status, _body) = fetch(outage_router(), "/watch/movie/550").await;
    assert_eq!(status, StatusCode::OK);
}
