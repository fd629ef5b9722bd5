//! Media components - cards, grids, hero, credits, episodes

use marquee_catalog::{CastMember, Episode, MediaKind, MediaSummary, SeasonSummary};

use super::layout::escape;

/// Image host serving the provider's relative image paths.
const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Full URL for a poster-sized image, or None when the path is absent.
pub fn poster_url(path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{IMAGE_BASE}/w500{p}"))
}

/// Full URL for a backdrop-sized image, or None when the path is absent.
pub fn backdrop_url(path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{IMAGE_BASE}/original{p}"))
}

fn detail_href(entry: &MediaSummary) -> Option<String> {
    match entry.kind {
        MediaKind::Movie => Some(format!("/movies/{}", entry.id)),
        MediaKind::Show => Some(format!("/tv/{}", entry.id)),
        MediaKind::Person => None,
    }
}

fn release_year(entry: &MediaSummary) -> Option<&str> {
    entry.release_date.as_deref().and_then(|d| d.get(..4))
}

/// Renders a poster card linking to the entry's detail page.
///
/// Persons have no detail page and render as a plain card.
pub fn media_card(entry: &MediaSummary) -> String {
    let poster = poster_url(entry.poster_path.as_deref())
        .map(|url| {
            format!(
                r#"<img src="{url}" alt="{}" loading="lazy" class="w-full aspect-[2/3] object-cover">"#,
                escape(&entry.title)
            )
        })
        .unwrap_or_else(|| {
            r#"<div class="w-full aspect-[2/3] bg-gray-700 flex items-center justify-center text-4xl">🎬</div>"#
                .to_string()
        });

    let year = release_year(entry)
        .map(|y| format!(r#"<span class="text-gray-400 text-sm">{}</span>"#, escape(y)))
        .unwrap_or_default();

    let body = format!(
        r#"{poster}
        <div class="p-3">
            <h3 class="text-white font-medium truncate">{}</h3>
            <div class="flex items-center justify-between mt-1">
                {year}
                <span class="text-yellow-400 text-sm">★ {:.1}</span>
            </div>
        </div>"#,
        escape(&entry.title),
        entry.vote_average
    );

    match detail_href(entry) {
        Some(href) => format!(
            r#"<a href="{href}" class="block bg-gray-800 rounded-lg overflow-hidden hover:ring-2 hover:ring-marquee-500 transition-shadow">{body}</a>"#
        ),
        None => format!(
            r#"<div class="bg-gray-800 rounded-lg overflow-hidden">{body}</div>"#
        ),
    }
}

/// Renders a grid of media cards, with a section heading unless the title is
/// empty.
pub fn media_grid(title: &str, entries: &[MediaSummary]) -> String {
    let cards: String = entries.iter().map(media_card).collect();
    let heading = if title.is_empty() {
        String::new()
    } else {
        format!(
            r#"<h2 class="text-xl font-semibold text-white border-b border-gray-700 pb-2 mb-6">{}</h2>"#,
            escape(title)
        )
    };
    format!(
        r#"<section class="mb-12">
            {heading}
            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-4">{cards}</div>
        </section>"#
    )
}

/// Renders the home-page hero section for a featured entry.
pub fn hero_section(entry: &MediaSummary) -> String {
    let backdrop = backdrop_url(entry.backdrop_path.as_deref())
        .map(|url| format!(r#"style="background-image: url('{url}')""#))
        .unwrap_or_default();

    let watch_href = match entry.kind {
        MediaKind::Show => format!("/watch/tv/{}", entry.id),
        _ => format!("/watch/movie/{}", entry.id),
    };

    format!(
        r#"<div class="relative h-96 bg-cover bg-center" {backdrop}>
            <div class="absolute inset-0 bg-gradient-to-t from-gray-900 via-gray-900/60 to-transparent"></div>
            <div class="absolute bottom-0 left-0 p-8 max-w-2xl">
                <h1 class="text-4xl font-bold text-white mb-4">{}</h1>
                <p class="text-gray-300 line-clamp-3 mb-6">{}</p>
                <a href="{watch_href}" class="inline-block px-6 py-3 bg-marquee-500 hover:bg-marquee-600 text-white rounded-lg font-medium transition-colors">▶ Watch Now</a>
            </div>
        </div>"#,
        escape(&entry.title),
        escape(&entry.overview)
    )
}

/// Renders Previous/Next pagination controls preserving the search query.
pub fn pagination(query: &str, page: u32, total_pages: u32) -> String {
    if total_pages <= 1 {
        return String::new();
    }
    let encoded = urlencoding::encode(query);

    let previous = if page > 1 {
        format!(
            r#"<a href="/search?q={encoded}&page={}" class="px-4 py-2 bg-gray-800 hover:bg-gray-700 rounded-md transition-colors">Previous</a>"#,
            page - 1
        )
    } else {
        String::new()
    };

    let next = if page < total_pages {
        format!(
            r#"<a href="/search?q={encoded}&page={}" class="px-4 py-2 bg-marquee-500 hover:bg-marquee-600 rounded-md transition-colors">Next</a>"#,
            page + 1
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="flex justify-center mt-8 gap-2 text-white">
            {previous}
            <span class="px-4 py-2 bg-gray-800 rounded-md">Page {page} of {total_pages}</span>
            {next}
        </div>"#
    )
}

/// Renders the top-billed cast as a horizontal strip.
pub fn cast_strip(cast: &[CastMember]) -> String {
    if cast.is_empty() {
        return String::new();
    }
    let entries: String = cast
        .iter()
        .take(12)
        .map(|member| {
            let portrait = poster_url(member.profile_path.as_deref())
                .map(|url| {
                    format!(
                        r#"<img src="{url}" alt="{}" loading="lazy" class="w-24 h-24 rounded-full object-cover mx-auto">"#,
                        escape(&member.name)
                    )
                })
                .unwrap_or_else(|| {
                    r#"<div class="w-24 h-24 rounded-full bg-gray-700 flex items-center justify-center text-2xl mx-auto">👤</div>"#.to_string()
                });
            format!(
                r#"<div class="text-center w-28 flex-shrink-0">
                    {portrait}
                    <p class="text-white text-sm mt-2 truncate">{}</p>
                    <p class="text-gray-400 text-xs truncate">{}</p>
                </div>"#,
                escape(&member.name),
                escape(&member.character)
            )
        })
        .collect();

    format!(
        r#"<section class="mb-12">
            <h2 class="text-xl font-semibold text-white border-b border-gray-700 pb-2 mb-6">Cast</h2>
            <div class="flex gap-4 overflow-x-auto pb-2">{entries}</div>
        </section>"#
    )
}

/// Renders a season link card on a show detail page.
pub fn season_card(show_id: i64, season: &SeasonSummary) -> String {
    format!(
        r#"<a href="/tv/{show_id}/season/{}" class="block bg-gray-800 rounded-lg p-4 hover:ring-2 hover:ring-marquee-500 transition-shadow">
            <h3 class="text-white font-medium">{}</h3>
            <p class="text-gray-400 text-sm mt-1">{} episodes</p>
        </a>"#,
        season.season_number,
        escape(&season.name),
        season.episode_count
    )
}

/// Renders one episode row with its watch link.
pub fn episode_row(show_id: i64, episode: &Episode) -> String {
    let runtime = episode
        .runtime
        .map(|minutes| format!(r#"<span class="text-gray-400 text-sm">{minutes} min</span>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="flex items-center justify-between bg-gray-800 rounded-lg p-4">
            <div>
                <h3 class="text-white font-medium">{}. {}</h3>
                <p class="text-gray-400 text-sm line-clamp-2 mt-1">{}</p>
            </div>
            <div class="flex items-center gap-4 ml-4 flex-shrink-0">
                {runtime}
                <a href="/watch/tv/{show_id}?season={}&episode={}" class="px-4 py-2 bg-marquee-500 hover:bg-marquee-600 text-white rounded-lg font-medium transition-colors">▶ Watch</a>
            </div>
        </div>"#,
        episode.episode_number,
        escape(&episode.name),
        escape(&episode.overview),
        episode.season_number,
        episode.episode_number
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: MediaKind) -> MediaSummary {
        MediaSummary {
            id: 550,
            kind,
            title: "Fight Club".to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
            overview: "An insomniac office worker.".to_string(),
            release_date: Some("1999-10-15".to_string()),
            vote_average: 8.4,
            vote_count: 26_000,
            popularity: 61.4,
        }
    }

    #[test]
    fn image_urls_target_the_provider_image_host() {
        assert_eq!(
            poster_url(Some("/poster.jpg")).unwrap(),
            "https://image.tmdb.org/t/p/w500/poster.jpg"
        );
        assert!(poster_url(None).is_none());
    }

    #[test]
    fn movie_card_links_to_movie_detail() {
        let card = media_card(&entry(MediaKind::Movie));
        assert!(card.contains(r#"href="/movies/550""#));
        assert!(card.contains("1999"));
    }

    #[test]
    fn person_card_has_no_detail_link() {
        let card = media_card(&entry(MediaKind::Person));
        assert!(!card.contains("href="));
    }

    #[test]
    fn pagination_preserves_query_and_bounds() {
        let controls = pagination("star wars", 2, 5);
        assert!(controls.contains("q=star%20wars&page=1"));
        assert!(controls.contains("q=star%20wars&page=3"));
        assert!(controls.contains("Page 2 of 5"));

        let first_page = pagination("star wars", 1, 5);
        assert!(!first_page.contains("Previous"));

        assert!(pagination("star wars", 1, 1).is_empty());
    }

    #[test]
    fn episode_row_links_to_episode_watch_target() {
        let episode = Episode {
            id: 63056,
            episode_number: 3,
            season_number: 1,
            name: "Lord Snow".to_string(),
            overview: String::new(),
            still_path: None,
            air_date: None,
            runtime: Some(58),
            vote_average: 8.1,
            vote_count: 2_000,
        };
        let row = episode_row(1399, &episode);
        assert!(row.contains(r#"href="/watch/tv/1399?season=1&episode=3""#));
        assert!(row.contains("58 min"));
    }
}
