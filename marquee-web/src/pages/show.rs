//! Show detail and season pages

use axum::extract::{Path, State};
use axum::response::Html;
use marquee_catalog::ShowDetail;

use crate::components::layout::escape;
use crate::components::{layout, media};
use crate::error::PageError;
use crate::pages::render_page;
use crate::server::AppState;

/// Renders a show detail page with its season list.
pub async fn show_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let detail = state.catalog.show_details(id).await?;
    let title = detail.summary.title.clone();
    Ok(render_page(&title, "", &show_content(&detail)))
}

/// Renders the episode listing for one season of a show.
///
/// An absent season renders an empty state, not an error page.
pub async fn season_page(
    State(state): State<AppState>,
    Path((id, season_number)): Path<(i64, u32)>,
) -> Result<Html<String>, PageError> {
    let episodes = state.catalog.season_episodes(id, season_number).await?;

    let listing = if episodes.is_empty() {
        layout::empty_state(
            "No episodes here",
            "This season doesn't exist or has no episodes yet",
        )
    } else {
        let rows: Vec<String> = episodes
            .iter()
            .map(|episode| media::episode_row(id, episode))
            .collect();
        format!(r#"<div class="space-y-4">{}</div>"#, rows.join("\n"))
    };

    let content = format!(
        "{}\n{listing}",
        layout::page_header(
            &format!("Season {season_number}"),
            Some("Pick an episode to watch"),
        )
    );
    Ok(render_page(
        &format!("Season {season_number}"),
        "",
        &content,
    ))
}

fn show_content(detail: &ShowDetail) -> String {
    let summary = &detail.summary;

    let poster = media::poster_url(summary.poster_path.as_deref())
        .map(|url| {
            format!(
                r#"<img src="{url}" alt="{}" class="w-64 rounded-lg flex-shrink-0">"#,
                escape(&summary.title)
            )
        })
        .unwrap_or_default();

    let genres: Vec<String> = detail.genres.iter().map(|g| escape(&g.name)).collect();

    let mut facts = Vec::new();
    if let Some(date) = &summary.release_date {
        facts.push(format!("First aired {}", escape(date)));
    }
    facts.push(format!(
        "{} seasons · {} episodes",
        detail.number_of_seasons, detail.number_of_episodes
    ));
    if let Some(status) = &detail.status {
        facts.push(escape(status));
    }
    facts.push(format!(
        "★ {:.1} ({} votes)",
        summary.vote_average, summary.vote_count
    ));

    let networks: Vec<String> = detail.networks.iter().map(|n| escape(&n.name)).collect();
    if !networks.is_empty() {
        facts.push(networks.join(", "));
    }

    let mut actions = vec![layout::link_button(
        "▶ Watch Now",
        &format!("/watch/tv/{}", summary.id),
        "primary",
    )];
    if let Some(trailer) = &detail.trailer {
        actions.push(layout::link_button(
            "Trailer",
            &trailer.watch_url(),
            "secondary",
        ));
    }

    let header = format!(
        r#"<div class="flex flex-col md:flex-row gap-8 mb-12">
            {poster}
            <div>
                <h1 class="text-4xl font-bold text-white mb-2">{}</h1>
                <p class="text-gray-400 text-sm mb-4">{}</p>
                <p class="text-gray-400 text-sm mb-4">{}</p>
                <p class="text-gray-300 mb-6">{}</p>
                <div class="flex gap-4">{}</div>
            </div>
        </div>"#,
        escape(&summary.title),
        genres.join(" · "),
        facts.join(" · "),
        escape(&summary.overview),
        actions.join("\n")
    );

    let seasons = if detail.seasons.is_empty() {
        String::new()
    } else {
        let cards: Vec<String> = detail
            .seasons
            .iter()
            .map(|season| media::season_card(summary.id, season))
            .collect();
        format!(
            r#"<section class="mb-12">
                <h2 class="text-xl font-semibold text-white border-b border-gray-700 pb-2 mb-6">Seasons</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">{}</div>
            </section>"#,
            cards.join("\n")
        )
    };

    let similar = if detail.similar.is_empty() {
        String::new()
    } else {
        media::media_grid(
            "Similar Shows",
            &detail.similar[..detail.similar.len().min(6)],
        )
    };
    let recommendations = if detail.recommendations.is_empty() {
        String::new()
    } else {
        media::media_grid(
            "Recommended",
            &detail.recommendations[..detail.recommendations.len().min(6)],
        )
    };

    format!(
        "{header}\n{seasons}\n{}\n{similar}\n{recommendations}",
        media::cast_strip(&detail.credits.cast)
    )
}
