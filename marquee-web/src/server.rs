//! Axum server wiring for the browsing UI.
//!
//! Holds the only shared state: a clone-cheap catalog facade. Nothing mutable
//! crosses requests; every page render is an independent fan-out of catalog
//! calls.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use marquee_catalog::CatalogService;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::pages::{
    home_page, movie_page, search_page, season_page, show_page, watch_movie_page, watch_show_page,
};

/// Shared application state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Media catalog facade
    pub catalog: CatalogService,
}

impl AppState {
    /// Creates state around a catalog facade.
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }
}

/// Builds the page router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/search", get(search_page))
        .route("/movies/{id}", get(movie_page))
        .route("/tv/{id}", get(show_page))
        .route("/tv/{id}/season/{season_number}", get(season_page))
        .route("/watch/movie/{id}", get(watch_movie_page))
        .route("/watch/tv/{id}", get(watch_show_page))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the web server until the process is stopped.
///
/// # Errors
/// Returns an error when the listener cannot bind or the server loop fails.
pub async fn run_server(
    catalog: CatalogService,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("marquee web server listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use marquee_catalog::EmbedConfig;
    use tower::ServiceExt;

    use super::*;

    fn demo_router() -> Router {
        let catalog = CatalogService::new_demo(EmbedConfig::default());
        router(AppState::new(catalog))
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
    async fn home_page_renders_trending_sections() {
        let (status, body) = fetch(demo_router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Trending Movies"));
        assert!(body.contains("Trending TV Shows"));
        assert!(body.contains("Watch Now"));
    }

    #[tokio::test]
    async fn search_page_lists_matches_and_handles_empty_query() {
        let (status, body) = fetch(demo_router(), "/search?q=fight").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Fight Club"));

        let (status, body) = fetch(demo_router(), "/search").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Enter a search term"));
    }

    #[tokio::test]
    async fn search_page_shows_empty_state_for_no_matches() {
        let (status, body) = fetch(demo_router(), "/search?q=zzzzzz").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No results found"));
    }

    #[tokio::test]
    async fn movie_detail_page_renders() {
        let (status, body) = fetch(demo_router(), "/movies/550").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Fight Club"));
        assert!(body.contains("/watch/movie/550"));
    }

    #[tokio::test]
    async fn missing_movie_renders_not_found_page() {
        let (status, body) = fetch(demo_router(), "/movies/999999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Not Found"));
    }

    #[tokio::test]
    async fn invalid_movie_id_renders_bad_request_page() {
        let (status, _body) = fetch(demo_router(), "/movies/0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn show_detail_page_renders_related_grids() {
        let (status, body) = fetch(demo_router(), "/tv/1399").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Game of Thrones"));
        assert!(body.contains("Similar Shows"));
        assert!(body.contains("Recommended"));
        assert!(body.contains("Breaking Bad"));
    }

    #[tokio::test]
    async fn season_page_lists_episodes_and_tolerates_absent_seasons() {
        let (status, body) = fetch(demo_router(), "/tv/1399/season/1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Episode 1"));

        let (status, body) = fetch(demo_router(), "/tv/1399/season/99").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No episodes here"));
    }

    #[tokio::test]
    async fn watch_pages_embed_the_resolved_stream_url() {
        let (status, body) = fetch(demo_router(), "/watch/movie/550").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("https://vidsrc.to/embed/movie/550"));

        let (status, body) = fetch(demo_router(), "/watch/tv/1399?season=1&episode=3").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("https://vidsrc.to/embed/tv/1399/1/3"));

        let (status, body) = fetch(demo_router(), "/watch/tv/1399").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("https://vidsrc.to/embed/tv/1399"));
    }
}
