//! Search page - query, results grid, pagination

use axum::extract::{Query, State};
use axum::response::Html;
use marquee_catalog::MediaKind;
use serde::Deserialize;

use crate::components::{layout, media};
use crate::error::PageError;
use crate::pages::render_page;
use crate::server::AppState;

/// Query parameters accepted by the search page.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query; absent or empty renders the landing state
    #[serde(default)]
    pub q: String,
    /// 1-based result page
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

/// Renders the search page.
///
/// An empty query renders a prompt instead of results; person entries are
/// filtered out of the grid. Pagination controls preserve the query.
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, PageError> {
    let query = params.q.trim();

    let content = if query.is_empty() {
        layout::empty_state(
            "Search Movies & TV Shows",
            "Enter a search term to find something to watch",
        )
    } else {
        let results = state.catalog.search(query, params.page).await?;
        let media_results: Vec<_> = results
            .results
            .iter()
            .filter(|entry| entry.kind != MediaKind::Person)
            .cloned()
            .collect();

        if media_results.is_empty() {
            format!(
                "{}\n{}",
                layout::page_header(&format!("No results found for \"{query}\""), None),
                layout::empty_state("No results found", "Try a different search term"),
            )
        } else {
            format!(
                "{}\n{}\n{}",
                layout::page_header(&format!("Results for \"{query}\""), None),
                media::media_grid("", &media_results),
                media::pagination(query, results.page, results.total_pages),
            )
        }
    };

    Ok(render_page("Search", "search", &content))
}
