//! TMDB-backed metadata provider.
//!
//! Talks to the TMDB v3 HTTP API and normalizes its wire shapes into the
//! catalog types. All wire-to-domain conversion lives here; callers only ever
//! see [`crate::types`] values with kind tags already assigned.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::MetadataProvider;
use crate::config::CatalogConfig;
use crate::errors::CatalogError;
use crate::types::{
    CastMember, Creator, Credits, CrewMember, Episode, Genre, MediaKind, MediaSummary,
    MovieDetail, Network, Paginated, ProductionCompany, SeasonSummary, ShowDetail, TrendingScope,
    TrendingWindow, VideoClip, select_trailer,
};

/// Extra resources folded into one detail request instead of separate calls.
const DETAIL_APPENDS: &str = "credits,videos,similar,recommendations";

/// Metadata provider backed by the TMDB v3 API.
#[derive(Debug, Clone)]
pub struct TmdbProvider {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl TmdbProvider {
    /// Creates a provider with an injected HTTP client.
    pub fn new(client: reqwest::Client, config: CatalogConfig) -> Self {
        Self { client, config }
    }

    /// Creates a provider and its HTTP client from configuration alone.
    ///
    /// # Errors
    /// - `CatalogError::UpstreamUnavailable` - The HTTP client could not be
    ///   constructed (TLS backend initialization failure)
    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CatalogError::UpstreamUnavailable {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self::new(client, config))
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.config.api_base_url, path);
        debug!(path, "catalog provider request");

        let mut request = self.client.get(&url).query(query).query(&[(
            "language",
            self.config.language.as_str(),
        )]);
        if let Some(ref api_key) = self.config.api_key {
            request = request.query(&[("api_key", api_key.as_str())]);
        }

        let response =
            request
                .send()
                .await
                .map_err(|e| CatalogError::UpstreamUnavailable {
                    reason: format!("request to {path} failed: {e}"),
                })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !status.is_success() {
            return Err(CatalogError::UpstreamUnavailable {
                reason: format!("provider returned {status} for {path}"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::UpstreamUnavailable {
                reason: format!("failed to read response body for {path}: {e}"),
            })?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Decode {
            reason: format!("{path}: {e}"),
        })
    }
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        let page_param = page.to_string();
        let wire: WirePage<WireSummary> = self
            .fetch_json(
                "/search/multi",
                &[
                    ("query", query),
                    ("page", &page_param),
                    ("include_adult", "false"),
                ],
            )
            .await?;
        Ok(normalize_mixed_page(wire))
    }

    async fn trending(
        &self,
        scope: TrendingScope,
        window: TrendingWindow,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        let path = format!(
            "/trending/{}/{}",
            scope.path_segment(),
            window.path_segment()
        );
        let wire: WirePage<WireSummary> = self.fetch_json(&path, &[]).await?;
        match scope {
            TrendingScope::All => Ok(normalize_mixed_page(wire)),
            TrendingScope::Movies => Ok(normalize_typed_page(wire, MediaKind::Movie)),
            TrendingScope::Shows => Ok(normalize_typed_page(wire, MediaKind::Show)),
        }
    }

    async fn popular_movies(&self, page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        let page_param = page.to_string();
        let wire: WirePage<WireSummary> = self
            .fetch_json("/movie/popular", &[("page", &page_param)])
            .await?;
        Ok(normalize_typed_page(wire, MediaKind::Movie))
    }

    async fn popular_shows(&self, page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        let page_param = page.to_string();
        let wire: WirePage<WireSummary> = self
            .fetch_json("/tv/popular", &[("page", &page_param)])
            .await?;
        Ok(normalize_typed_page(wire, MediaKind::Show))
    }

    async fn movie_details(&self, id: i64) -> Result<MovieDetail, CatalogError> {
        let wire: WireMovieDetail = self
            .fetch_json(
                &format!("/movie/{id}"),
                &[("append_to_response", DETAIL_APPENDS)],
            )
            .await?;
        Ok(normalize_movie_detail(wire))
    }

    async fn show_details(&self, id: i64) -> Result<ShowDetail, CatalogError> {
        let wire: WireShowDetail = self
            .fetch_json(
                &format!("/tv/{id}"),
                &[("append_to_response", DETAIL_APPENDS)],
            )
            .await?;
        Ok(normalize_show_detail(wire))
    }

    async fn season_episodes(
        &self,
        show_id: i64,
        season_number: u32,
    ) -> Result<Vec<Episode>, CatalogError> {
        let wire: WireSeasonDetail = self
            .fetch_json(&format!("/tv/{show_id}/season/{season_number}"), &[])
            .await?;
        Ok(wire.episodes.into_iter().map(normalize_episode).collect())
    }
}

// ---------------------------------------------------------------------------
// Wire shapes (TMDB v3)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct WirePage<T> {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results: u64,
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// Listing entry as it appears in search, trending, and popular responses.
///
/// TMDB uses `title`/`release_date` for movies and `name`/`first_air_date`
/// for shows; both sets are optional here and reconciled during
/// normalization. `media_type` is only present on mixed endpoints.
#[derive(Debug, Deserialize)]
struct WireSummary {
    id: i64,
    #[serde(default)]
    media_type: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    backdrop_path: Option<String>,
    #[serde(default)]
    profile_path: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    first_air_date: Option<String>,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    vote_count: Option<i64>,
    #[serde(default)]
    popularity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WireGenre {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct WireCompany {
    id: i64,
    name: String,
    #[serde(default)]
    logo_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireCreator {
    id: i64,
    name: String,
    #[serde(default)]
    profile_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireCastMember {
    id: i64,
    name: String,
    #[serde(default)]
    character: String,
    #[serde(default)]
    profile_path: Option<String>,
    #[serde(default)]
    order: u32,
}

#[derive(Debug, Deserialize)]
struct WireCrewMember {
    id: i64,
    name: String,
    #[serde(default)]
    job: String,
    #[serde(default)]
    department: String,
    #[serde(default)]
    profile_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireCredits {
    #[serde(default)]
    cast: Vec<WireCastMember>,
    #[serde(default)]
    crew: Vec<WireCrewMember>,
}

#[derive(Debug, Deserialize)]
struct WireVideo {
    key: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    site: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    official: bool,
}

#[derive(Debug, Default, Deserialize)]
struct WireVideoList {
    #[serde(default)]
    results: Vec<WireVideo>,
}

#[derive(Debug, Deserialize)]
struct WireSeason {
    id: i64,
    season_number: u32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    episode_count: u32,
    #[serde(default)]
    air_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireEpisode {
    id: i64,
    episode_number: u32,
    season_number: u32,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    still_path: Option<String>,
    #[serde(default)]
    air_date: Option<String>,
    #[serde(default)]
    runtime: Option<u32>,
    #[serde(default)]
    vote_average: f64,
    #[serde(default)]
    vote_count: i64,
}

#[derive(Debug, Deserialize)]
struct WireSeasonDetail {
    #[serde(default)]
    episodes: Vec<WireEpisode>,
}

#[derive(Debug, Deserialize)]
struct WireMovieDetail {
    id: i64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    backdrop_path: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    vote_count: Option<i64>,
    #[serde(default)]
    popularity: Option<f64>,
    #[serde(default)]
    runtime: Option<u32>,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    budget: Option<u64>,
    #[serde(default)]
    revenue: Option<u64>,
    #[serde(default)]
    genres: Vec<WireGenre>,
    #[serde(default)]
    production_companies: Vec<WireCompany>,
    #[serde(default)]
    credits: Option<WireCredits>,
    #[serde(default)]
    videos: Option<WireVideoList>,
    #[serde(default)]
    similar: Option<WirePage<WireSummary>>,
    #[serde(default)]
    recommendations: Option<WirePage<WireSummary>>,
}

#[derive(Debug, Deserialize)]
struct WireShowDetail {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    backdrop_path: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    first_air_date: Option<String>,
    #[serde(default)]
    last_air_date: Option<String>,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    vote_count: Option<i64>,
    #[serde(default)]
    popularity: Option<f64>,
    #[serde(default)]
    number_of_seasons: u32,
    #[serde(default)]
    number_of_episodes: u32,
    #[serde(default)]
    episode_run_time: Vec<u32>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    genres: Vec<WireGenre>,
    #[serde(default)]
    networks: Vec<WireCompany>,
    #[serde(default)]
    created_by: Vec<WireCreator>,
    #[serde(default)]
    seasons: Vec<WireSeason>,
    #[serde(default)]
    credits: Option<WireCredits>,
    #[serde(default)]
    videos: Option<WireVideoList>,
    #[serde(default)]
    similar: Option<WirePage<WireSummary>>,
    #[serde(default)]
    recommendations: Option<WirePage<WireSummary>>,
}

// ---------------------------------------------------------------------------
// Wire-to-domain normalization
// ---------------------------------------------------------------------------

/// Missing titles normalize to a placeholder rather than failing the page.
const UNKNOWN_TITLE: &str = "Unknown";

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn normalize_summary(wire: WireSummary, kind: MediaKind) -> MediaSummary {
    let title = non_empty(wire.title)
        .or(non_empty(wire.name))
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
    // Persons carry a profile image where movies and shows carry a poster.
    let poster_path = wire.poster_path.or(wire.profile_path);

    MediaSummary {
        id: wire.id,
        kind,
        title,
        poster_path,
        backdrop_path: wire.backdrop_path,
        overview: wire.overview.unwrap_or_default(),
        release_date: non_empty(wire.release_date).or(non_empty(wire.first_air_date)),
        vote_average: wire.vote_average.unwrap_or(0.0),
        vote_count: wire.vote_count.unwrap_or(0),
        popularity: wire.popularity.unwrap_or(0.0),
    }
}

fn kind_from_discriminator(media_type: Option<&str>) -> Option<MediaKind> {
    match media_type {
        Some("movie") => Some(MediaKind::Movie),
        Some("tv") => Some(MediaKind::Show),
        Some("person") => Some(MediaKind::Person),
        _ => None,
    }
}

/// Normalizes a mixed page, assigning kinds from the provider discriminator.
///
/// Entries with an unrecognized discriminator are dropped; pagination
/// metadata is forwarded unchanged either way.
fn normalize_mixed_page(wire: WirePage<WireSummary>) -> Paginated<MediaSummary> {
    let results = wire
        .results
        .into_iter()
        .filter_map(|entry| {
            let kind = kind_from_discriminator(entry.media_type.as_deref())?;
            Some(normalize_summary(entry, kind))
        })
        .collect();
    Paginated {
        page: wire.page,
        total_pages: wire.total_pages,
        total_results: wire.total_results,
        results,
    }
}

/// Normalizes a single-kind page where the endpoint itself implies the kind.
fn normalize_typed_page(wire: WirePage<WireSummary>, kind: MediaKind) -> Paginated<MediaSummary> {
    let results = wire
        .results
        .into_iter()
        .map(|entry| normalize_summary(entry, kind))
        .collect();
    Paginated {
        page: wire.page,
        total_pages: wire.total_pages,
        total_results: wire.total_results,
        results,
    }
}

fn normalize_credits(wire: Option<WireCredits>) -> Credits {
    let wire = wire.unwrap_or_default();
    Credits {
        cast: wire
            .cast
            .into_iter()
            .map(|member| CastMember {
                id: member.id,
                name: member.name,
                character: member.character,
                profile_path: member.profile_path,
                order: member.order,
            })
            .collect(),
        crew: wire
            .crew
            .into_iter()
            .map(|member| CrewMember {
                id: member.id,
                name: member.name,
                job: member.job,
                department: member.department,
                profile_path: member.profile_path,
            })
            .collect(),
    }
}

fn normalize_clips(wire: Option<WireVideoList>) -> Vec<VideoClip> {
    wire.unwrap_or_default()
        .results
        .into_iter()
        .map(|video| VideoClip {
            key: video.key,
            name: video.name,
            site: video.site,
            kind: video.kind,
            official: video.official,
        })
        .collect()
}

fn normalize_related(wire: Option<WirePage<WireSummary>>, kind: MediaKind) -> Vec<MediaSummary> {
    wire.map(|page| normalize_typed_page(page, kind).results)
        .unwrap_or_default()
}

fn normalize_movie_detail(wire: WireMovieDetail) -> MovieDetail {
    let summary = MediaSummary {
        id: wire.id,
        kind: MediaKind::Movie,
        title: non_empty(wire.title).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        poster_path: wire.poster_path,
        backdrop_path: wire.backdrop_path,
        overview: wire.overview.unwrap_or_default(),
        release_date: non_empty(wire.release_date),
        vote_average: wire.vote_average.unwrap_or(0.0),
        vote_count: wire.vote_count.unwrap_or(0),
        popularity: wire.popularity.unwrap_or(0.0),
    };
    let clips = normalize_clips(wire.videos);

    MovieDetail {
        summary,
        // TMDB reports zero for undisclosed runtimes and financials.
        runtime: wire.runtime.filter(|&minutes| minutes > 0),
        tagline: non_empty(wire.tagline),
        status: non_empty(wire.status),
        budget: wire.budget.filter(|&amount| amount > 0),
        revenue: wire.revenue.filter(|&amount| amount > 0),
        genres: wire
            .genres
            .into_iter()
            .map(|genre| Genre {
                id: genre.id,
                name: genre.name,
            })
            .collect(),
        production_companies: wire
            .production_companies
            .into_iter()
            .map(|company| ProductionCompany {
                id: company.id,
                name: company.name,
                logo_path: company.logo_path,
            })
            .collect(),
        credits: normalize_credits(wire.credits),
        trailer: select_trailer(&clips),
        similar: normalize_related(wire.similar, MediaKind::Movie),
        recommendations: normalize_related(wire.recommendations, MediaKind::Movie),
    }
}

fn normalize_show_detail(wire: WireShowDetail) -> ShowDetail {
    let summary = MediaSummary {
        id: wire.id,
        kind: MediaKind::Show,
        title: non_empty(wire.name).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        poster_path: wire.poster_path,
        backdrop_path: wire.backdrop_path,
        overview: wire.overview.unwrap_or_default(),
        release_date: non_empty(wire.first_air_date),
        vote_average: wire.vote_average.unwrap_or(0.0),
        vote_count: wire.vote_count.unwrap_or(0),
        popularity: wire.popularity.unwrap_or(0.0),
    };
    let clips = normalize_clips(wire.videos);

    ShowDetail {
        summary,
        last_air_date: non_empty(wire.last_air_date),
        number_of_seasons: wire.number_of_seasons,
        number_of_episodes: wire.number_of_episodes,
        episode_run_time: wire.episode_run_time,
        status: non_empty(wire.status),
        genres: wire
            .genres
            .into_iter()
            .map(|genre| Genre {
                id: genre.id,
                name: genre.name,
            })
            .collect(),
        networks: wire
            .networks
            .into_iter()
            .map(|network| Network {
                id: network.id,
                name: network.name,
                logo_path: network.logo_path,
            })
            .collect(),
        created_by: wire
            .created_by
            .into_iter()
            .map(|creator| Creator {
                id: creator.id,
                name: creator.name,
                profile_path: creator.profile_path,
            })
            .collect(),
        seasons: wire
            .seasons
            .into_iter()
            .map(|season| SeasonSummary {
                id: season.id,
                season_number: season.season_number,
                name: season.name,
                overview: season.overview,
                poster_path: season.poster_path,
                episode_count: season.episode_count,
                air_date: non_empty(season.air_date),
            })
            .collect(),
        credits: normalize_credits(wire.credits),
        trailer: select_trailer(&clips),
        similar: normalize_related(wire.similar, MediaKind::Show),
        recommendations: normalize_related(wire.recommendations, MediaKind::Show),
    }
}

fn normalize_episode(wire: WireEpisode) -> Episode {
    Episode {
        id: wire.id,
        episode_number: wire.episode_number,
        season_number: wire.season_number,
        name: non_empty(wire.name).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        overview: wire.overview,
        still_path: wire.still_path,
        air_date: non_empty(wire.air_date),
        runtime: wire.runtime.filter(|&minutes| minutes > 0),
        vote_average: wire.vote_average,
        vote_count: wire.vote_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_page_assigns_kinds_from_discriminator() {
        let body = r#"{
            "page": 2,
            "total_pages": 5,
            "total_results": 94,
            "results": [
                {"id": 550, "media_type": "movie", "title": "Fight Club", "vote_average": 8.4},
                {"id": 1399, "media_type": "tv", "name": "Game of Thrones"},
                {"id": 500, "media_type": "person", "name": "Tom Cruise", "profile_path": "/tom.jpg"},
                {"id": 99, "media_type": "collection", "name": "Some Collection"}
            ]
        }"#;
        let wire: WirePage<WireSummary> = serde_json::from_str(body).unwrap();
        let page = normalize_mixed_page(wire);

        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.total_results, 94);
        // The unrecognized "collection" entry is dropped.
        assert_eq!(page.results.len(), 3);
        assert_eq!(page.results[0].kind, MediaKind::Movie);
        assert_eq!(page.results[0].title, "Fight Club");
        assert_eq!(page.results[1].kind, MediaKind::Show);
        assert_eq!(page.results[1].title, "Game of Thrones");
        assert_eq!(page.results[2].kind, MediaKind::Person);
        assert_eq!(page.results[2].poster_path.as_deref(), Some("/tom.jpg"));
    }

    #[test]
    fn missing_title_normalizes_to_placeholder() {
        let body = r#"{"results": [{"id": 7, "media_type": "movie"}]}"#;
        let wire: WirePage<WireSummary> = serde_json::from_str(body).unwrap();
        let page = normalize_mixed_page(wire);
        assert_eq!(page.results[0].title, "Unknown");
    }

    #[test]
    fn movie_detail_filters_zero_financials_and_selects_trailer() {
        let body = r#"{
            "id": 550,
            "title": "Fight Club",
            "release_date": "1999-10-15",
            "runtime": 139,
            "budget": 0,
            "revenue": 100853753,
            "tagline": "",
            "genres": [{"id": 18, "name": "Drama"}],
            "videos": {"results": [
                {"key": "teaser1", "name": "Teaser", "site": "YouTube", "type": "Teaser", "official": true},
                {"key": "trailer1", "name": "Official Trailer", "site": "YouTube", "type": "Trailer", "official": true}
            ]},
            "credits": {"cast": [{"id": 819, "name": "Edward Norton", "character": "The Narrator", "order": 0}], "crew": []}
        }"#;
        let wire: WireMovieDetail = serde_json::from_str(body).unwrap();
        let detail = normalize_movie_detail(wire);

        assert_eq!(detail.summary.id, 550);
        assert_eq!(detail.summary.kind, MediaKind::Movie);
        assert_eq!(detail.runtime, Some(139));
        assert_eq!(detail.budget, None);
        assert_eq!(detail.revenue, Some(100_853_753));
        assert_eq!(detail.tagline, None);
        assert_eq!(detail.trailer.as_ref().unwrap().key, "trailer1");
        assert_eq!(detail.credits.cast[0].character, "The Narrator");
    }

    #[test]
    fn show_detail_keeps_season_summaries() {
        let body = r#"{
            "id": 1399,
            "name": "Game of Thrones",
            "first_air_date": "2011-04-17",
            "number_of_seasons": 8,
            "number_of_episodes": 73,
            "episode_run_time": [60],
            "seasons": [
                {"id": 3624, "season_number": 1, "name": "Season 1", "episode_count": 10, "air_date": "2011-04-17"}
            ]
        }"#;
        let wire: WireShowDetail = serde_json::from_str(body).unwrap();
        let detail = normalize_show_detail(wire);

        assert_eq!(detail.summary.title, "Game of Thrones");
        assert_eq!(detail.number_of_seasons, 8);
        assert_eq!(detail.seasons.len(), 1);
        assert_eq!(detail.seasons[0].episode_count, 10);
        assert!(detail.trailer.is_none());
    }

    #[test]
    fn season_episodes_tolerate_missing_fields() {
        let body = r#"{"episodes": [
            {"id": 63056, "episode_number": 1, "season_number": 1, "name": "Winter Is Coming", "runtime": 62},
            {"id": 63057, "episode_number": 2, "season_number": 1, "runtime": 0}
        ]}"#;
        let wire: WireSeasonDetail = serde_json::from_str(body).unwrap();
        let episodes: Vec<Episode> = wire.episodes.into_iter().map(normalize_episode).collect();

        assert_eq!(episodes[0].runtime, Some(62));
        assert_eq!(episodes[1].name, "Unknown");
        assert_eq!(episodes[1].runtime, None);
    }
}
