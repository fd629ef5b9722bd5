//! Watch pages - third-party player embed

use axum::extract::{Path, Query, State};
use axum::response::Html;
use marquee_catalog::MediaKind;
use serde::Deserialize;

use crate::components::layout::escape;
use crate::error::PageError;
use crate::pages::render_page;
use crate::server::AppState;

/// Query parameters narrowing a show watch target.
#[derive(Debug, Deserialize)]
pub struct WatchParams {
    /// Season to play; absent plays the show-level embed
    pub season: Option<u32>,
    /// Episode to play; only honored together with a season
    pub episode: Option<u32>,
}

/// Renders the watch page for a movie.
pub async fn watch_movie_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let embed_url = state
        .catalog
        .resolve_stream_url(id, MediaKind::Movie, None, None)?;
    Ok(player_page("Watch Movie", &embed_url))
}

/// Renders the watch page for a show, optionally narrowed to an episode.
pub async fn watch_show_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<WatchParams>,
) -> Result<Html<String>, PageError> {
    let embed_url =
        state
            .catalog
            .resolve_stream_url(id, MediaKind::Show, params.season, params.episode)?;
    Ok(player_page("Watch Show", &embed_url))
}

/// Full-width iframe around the embed provider, with a fallback link for
/// browsers that refuse the frame.
fn player_page(title: &str, embed_url: &str) -> Html<String> {
    let url = escape(embed_url);
    let content = format!(
        r#"<div class="aspect-video w-full bg-black rounded-lg overflow-hidden mb-6">
            <iframe src="{url}"
                    class="w-full h-full"
                    frameborder="0"
                    allowfullscreen
                    allow="autoplay; encrypted-media; picture-in-picture"
                    referrerpolicy="origin"></iframe>
        </div>
        <p class="text-gray-400 text-sm text-center">
            Player not loading?
            <a href="{url}" target="_blank" rel="noopener noreferrer" class="text-marquee-500 hover:text-marquee-400">Open it in a new tab</a>.
        </p>"#
    );
    render_page(title, "", &content)
}
