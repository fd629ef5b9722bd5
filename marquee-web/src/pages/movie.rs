//! Movie detail page

use axum::extract::{Path, State};
use axum::response::Html;
use marquee_catalog::MovieDetail;

use crate::components::layout::escape;
use crate::components::{layout, media};
use crate::error::PageError;
use crate::pages::render_page;
use crate::server::AppState;

/// Renders a movie detail page.
pub async fn movie_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let detail = state.catalog.movie_details(id).await?;
    let title = detail.summary.title.clone();
    Ok(render_page(&title, "", &movie_content(&detail)))
}

fn movie_content(detail: &MovieDetail) -> String {
    let summary = &detail.summary;

    let poster = media::poster_url(summary.poster_path.as_deref())
        .map(|url| {
            format!(
                r#"<img src="{url}" alt="{}" class="w-64 rounded-lg flex-shrink-0">"#,
                escape(&summary.title)
            )
        })
        .unwrap_or_default();

    let tagline = detail
        .tagline
        .as_deref()
        .map(|t| format!(r#"<p class="text-gray-400 italic mb-4">{}</p>"#, escape(t)))
        .unwrap_or_default();

    let genres: Vec<String> = detail.genres.iter().map(|g| escape(&g.name)).collect();

    let mut facts = Vec::new();
    if let Some(date) = &summary.release_date {
        facts.push(format!("Released {}", escape(date)));
    }
    if let Some(runtime) = detail.runtime {
        facts.push(format!("{runtime} min"));
    }
    if let Some(status) = &detail.status {
        facts.push(escape(status));
    }
    facts.push(format!(
        "★ {:.1} ({} votes)",
        summary.vote_average, summary.vote_count
    ));
    if let Some(budget) = detail.budget {
        facts.push(format!("Budget ${}M", budget / 1_000_000));
    }
    if let Some(revenue) = detail.revenue {
        facts.push(format!("Revenue ${}M", revenue / 1_000_000));
    }

    let mut actions = vec![layout::link_button(
        "▶ Watch Now",
        &format!("/watch/movie/{}", summary.id),
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
                {tagline}
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

    let similar = if detail.similar.is_empty() {
        String::new()
    } else {
        media::media_grid("Similar Movies", &detail.similar[..detail.similar.len().min(6)])
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
        "{header}\n{}\n{similar}\n{recommendations}",
        media::cast_strip(&detail.credits.cast)
    )
}
