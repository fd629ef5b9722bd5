//! Data types for the media catalog facade.
//!
//! Every type here is immutable once produced and request-scoped: entries are
//! built from one provider response, handed to a page render, and discarded.
//! Nothing is cached or shared across requests.

use serde::{Deserialize, Serialize};

/// Media kind classification.
///
/// Assigned exactly once, at the provider boundary, from the provider's own
/// discriminator or from the endpoint that produced the entity. Downstream
/// code never infers kind from which fields happen to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Feature film
    Movie,
    /// TV series
    Show,
    /// Person (actor, director); appears in multi-search results only
    Person,
}

/// Listing-granularity catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSummary {
    /// Provider identifier, always positive
    pub id: i64,
    /// Kind tag, set at the provider boundary
    pub kind: MediaKind,
    /// Display title ("Unknown" when the provider omits one)
    pub title: String,
    /// Poster image path, relative to the provider's image host
    pub poster_path: Option<String>,
    /// Backdrop image path, relative to the provider's image host
    pub backdrop_path: Option<String>,
    /// Plot summary, possibly empty
    pub overview: String,
    /// Release date (movies) or first air date (shows), provider-formatted
    pub release_date: Option<String>,
    /// Average rating on the provider's 0-10 scale
    pub vote_average: f64,
    /// Number of votes behind the average
    pub vote_count: i64,
    /// Provider popularity score
    pub popularity: f64,
}

/// One page of provider results with pagination metadata forwarded unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Current page, 1-based
    pub page: u32,
    /// Total pages reported by the provider
    pub total_pages: u32,
    /// Total matching results reported by the provider
    pub total_results: u64,
    /// Entries on this page
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// An empty page, used when a query short-circuits before the provider.
    pub fn empty(page: u32) -> Self {
        Self {
            page,
            total_pages: 0,
            total_results: 0,
            results: Vec::new(),
        }
    }

    /// Whether this page carries no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Genre tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    /// Provider genre identifier
    pub id: i64,
    /// Genre display name
    pub name: String,
}

/// TV network carrying a show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    /// Provider network identifier
    pub id: i64,
    /// Network display name
    pub name: String,
    /// Logo image path
    pub logo_path: Option<String>,
}

/// Production company behind a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCompany {
    /// Provider company identifier
    pub id: i64,
    /// Company display name
    pub name: String,
    /// Logo image path
    pub logo_path: Option<String>,
}

/// Show creator credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creator {
    /// Provider person identifier
    pub id: i64,
    /// Creator display name
    pub name: String,
    /// Profile image path
    pub profile_path: Option<String>,
}

/// Cast credit on a movie or show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    /// Provider person identifier
    pub id: i64,
    /// Actor display name
    pub name: String,
    /// Character played
    pub character: String,
    /// Profile image path
    pub profile_path: Option<String>,
    /// Billing order, lower is more prominent
    pub order: u32,
}

/// Crew credit on a movie or show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    /// Provider person identifier
    pub id: i64,
    /// Crew member display name
    pub name: String,
    /// Job title (Director, Writer, ...)
    pub job: String,
    /// Department the job belongs to
    pub department: String,
    /// Profile image path
    pub profile_path: Option<String>,
}

/// Cast and crew credits for a detail entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    /// Cast in billing order
    pub cast: Vec<CastMember>,
    /// Crew, unordered
    pub crew: Vec<CrewMember>,
}

/// Provider video entry attached to a detail response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoClip {
    /// Site-specific video key (for YouTube, the watch id)
    pub key: String,
    /// Video title
    pub name: String,
    /// Hosting site reported by the provider
    pub site: String,
    /// Provider tag: "Trailer", "Teaser", "Clip", ...
    pub kind: String,
    /// Whether the provider marks the video official
    pub official: bool,
}

impl VideoClip {
    /// Whether this clip can be embedded in the pages we render.
    ///
    /// Only YouTube-hosted clips have a stable embed URL scheme.
    pub fn is_embeddable(&self) -> bool {
        self.site.eq_ignore_ascii_case("youtube")
    }
}

/// Resolved trailer affordance for a detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trailer {
    /// YouTube watch id
    pub key: String,
    /// Video title
    pub name: String,
}

impl Trailer {
    /// Watch URL for linking out to the hosting site.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.key)
    }
}

/// Selects the trailer to surface from a detail response's video candidates.
///
/// Prefers the first embeddable clip explicitly tagged "Trailer"; falls back
/// to the first embeddable clip of any tag; yields None when nothing is
/// embeddable. A missing trailer is an omitted affordance, never an error.
pub fn select_trailer(clips: &[VideoClip]) -> Option<Trailer> {
    clips
        .iter()
        .find(|clip| clip.is_embeddable() && clip.kind == "Trailer")
        .or_else(|| clips.iter().find(|clip| clip.is_embeddable()))
        .map(|clip| Trailer {
            key: clip.key.clone(),
            name: clip.name.clone(),
        })
}

/// Season summary as listed on a show detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonSummary {
    /// Provider season identifier
    pub id: i64,
    /// Season number within the show, 0 for specials
    pub season_number: u32,
    /// Season display name
    pub name: String,
    /// Season overview, possibly empty
    pub overview: String,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Number of episodes in the season
    pub episode_count: u32,
    /// First air date of the season
    pub air_date: Option<String>,
}

/// Single episode of a show season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    /// Provider episode identifier
    pub id: i64,
    /// Episode number within the season
    pub episode_number: u32,
    /// Season the episode belongs to
    pub season_number: u32,
    /// Episode display name
    pub name: String,
    /// Episode overview, possibly empty
    pub overview: String,
    /// Still image path
    pub still_path: Option<String>,
    /// Air date, provider-formatted
    pub air_date: Option<String>,
    /// Runtime in minutes when known
    pub runtime: Option<u32>,
    /// Average rating on the provider's 0-10 scale
    pub vote_average: f64,
    /// Number of votes behind the average
    pub vote_count: i64,
}

/// Full-detail movie entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Listing-granularity fields
    pub summary: MediaSummary,
    /// Runtime in minutes when known
    pub runtime: Option<u32>,
    /// Marketing tagline
    pub tagline: Option<String>,
    /// Release status (Released, Post Production, ...)
    pub status: Option<String>,
    /// Production budget in USD, when disclosed
    pub budget: Option<u64>,
    /// Box office revenue in USD, when disclosed
    pub revenue: Option<u64>,
    /// Genre tags
    pub genres: Vec<Genre>,
    /// Production companies
    pub production_companies: Vec<ProductionCompany>,
    /// Cast and crew credits
    pub credits: Credits,
    /// Trailer affordance, when one resolved
    pub trailer: Option<Trailer>,
    /// Similar titles
    pub similar: Vec<MediaSummary>,
    /// Recommended titles
    pub recommendations: Vec<MediaSummary>,
}

/// Full-detail show entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowDetail {
    /// Listing-granularity fields
    pub summary: MediaSummary,
    /// Most recent air date
    pub last_air_date: Option<String>,
    /// Number of seasons
    pub number_of_seasons: u32,
    /// Number of episodes across all seasons
    pub number_of_episodes: u32,
    /// Typical episode runtimes in minutes
    pub episode_run_time: Vec<u32>,
    /// Production status (Returning Series, Ended, ...)
    pub status: Option<String>,
    /// Genre tags
    pub genres: Vec<Genre>,
    /// Networks carrying the show
    pub networks: Vec<Network>,
    /// Creator credits
    pub created_by: Vec<Creator>,
    /// Season summaries
    pub seasons: Vec<SeasonSummary>,
    /// Cast and crew credits
    pub credits: Credits,
    /// Trailer affordance, when one resolved
    pub trailer: Option<Trailer>,
    /// Similar titles
    pub similar: Vec<MediaSummary>,
    /// Recommended titles
    pub recommendations: Vec<MediaSummary>,
}

/// Full-detail catalog entry, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaDetail {
    /// Movie detail
    Movie(MovieDetail),
    /// Show detail
    Show(ShowDetail),
}

impl MediaDetail {
    /// Listing-granularity fields of either variant.
    pub fn summary(&self) -> &MediaSummary {
        match self {
            MediaDetail::Movie(detail) => &detail.summary,
            MediaDetail::Show(detail) => &detail.summary,
        }
    }
}

/// Which kinds a trending request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingScope {
    /// Movies and shows mixed (persons filtered out)
    All,
    /// Movies only
    Movies,
    /// Shows only
    Shows,
}

impl TrendingScope {
    /// Path segment used by the provider for this scope.
    pub fn path_segment(self) -> &'static str {
        match self {
            TrendingScope::All => "all",
            TrendingScope::Movies => "movie",
            TrendingScope::Shows => "tv",
        }
    }
}

/// Time window a trending request aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingWindow {
    /// Trending today
    Day,
    /// Trending this week
    Week,
}

impl TrendingWindow {
    /// Path segment used by the provider for this window.
    pub fn path_segment(self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(site: &str, kind: &str, key: &str) -> VideoClip {
        VideoClip {
            key: key.to_string(),
            name: format!("{kind} ({site})"),
            site: site.to_string(),
            kind: kind.to_string(),
            official: true,
        }
    }

    #[test]
    fn trailer_tag_wins_over_other_embeddable_clips() {
        let clips = vec![
            clip("YouTube", "Teaser", "teaser1"),
            clip("YouTube", "Trailer", "trailer1"),
        ];
        let trailer = select_trailer(&clips).unwrap();
        assert_eq!(trailer.key, "trailer1");
    }

    #[test]
    fn falls_back_to_first_embeddable_clip() {
        let clips = vec![
            clip("Vimeo", "Trailer", "vimeo1"),
            clip("YouTube", "Clip", "clip1"),
            clip("YouTube", "Teaser", "teaser1"),
        ];
        let trailer = select_trailer(&clips).unwrap();
        assert_eq!(trailer.key, "clip1");
    }

    #[test]
    fn no_embeddable_clip_means_no_trailer() {
        let clips = vec![clip("Vimeo", "Trailer", "vimeo1")];
        assert!(select_trailer(&clips).is_none());
        assert!(select_trailer(&[]).is_none());
    }

    #[test]
    fn site_comparison_ignores_case() {
        let clips = vec![clip("youtube", "Trailer", "lower1")];
        assert_eq!(select_trailer(&clips).unwrap().key, "lower1");
    }

    #[test]
    fn trailer_watch_url_targets_youtube() {
        let trailer = Trailer {
            key: "abc123".to_string(),
            name: "Official Trailer".to_string(),
        };
        assert_eq!(trailer.watch_url(), "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn empty_page_carries_requested_page_number() {
        let page: Paginated<MediaSummary> = Paginated::empty(3);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
    }
}
