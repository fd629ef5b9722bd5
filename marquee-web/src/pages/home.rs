//! Home page - trending and popular listings

use axum::extract::State;
use axum::response::Html;
use marquee_catalog::{MediaSummary, Paginated, TrendingScope, TrendingWindow};

use crate::components::{layout, media};
use crate::error::PageError;
use crate::pages::render_page;
use crate::server::AppState;

/// Renders the home page.
///
/// Fans out the five catalog calls concurrently and joins before rendering;
/// the sections have no ordering dependency between them. A failed section
/// renders an error card instead of failing the whole page.
pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let catalog = &state.catalog;
    let (trending_all, trending_movies, trending_shows, popular_movies, popular_shows) = tokio::join!(
        catalog.trending(TrendingScope::All, TrendingWindow::Week),
        catalog.trending(TrendingScope::Movies, TrendingWindow::Week),
        catalog.trending(TrendingScope::Shows, TrendingWindow::Week),
        catalog.popular_movies(1),
        catalog.popular_shows(1),
    );

    let hero = trending_all
        .as_ref()
        .ok()
        .and_then(|page| featured_entry(page))
        .map(media::hero_section)
        .unwrap_or_default();

    let content = format!(
        "{hero}\n{}\n{}\n{}\n{}",
        section("Trending Movies", trending_movies, 12),
        section("Trending TV Shows", trending_shows, 12),
        section("Popular Movies", popular_movies, 6),
        section("Popular TV Shows", popular_shows, 6),
    );

    Ok(render_page("Home", "home", &content))
}

/// First trending entry with a backdrop, falling back to the first entry.
fn featured_entry(page: &Paginated<MediaSummary>) -> Option<&MediaSummary> {
    page.results
        .iter()
        .find(|entry| entry.backdrop_path.is_some())
        .or_else(|| page.results.first())
}

fn section(
    title: &str,
    result: Result<Paginated<MediaSummary>, marquee_catalog::CatalogError>,
    limit: usize,
) -> String {
    match result {
        Ok(page) if page.is_empty() => String::new(),
        Ok(mut page) => {
            page.results.truncate(limit);
            media::media_grid(title, &page.results)
        }
        Err(error) => {
            tracing::warn!(%error, title, "home section failed to load");
            layout::card(
                Some(title),
                r#"<p class="text-gray-400">This section couldn't be loaded right now.</p>"#,
            )
        }
    }
}
