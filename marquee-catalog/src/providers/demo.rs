//! Static provider for development and demos.
//!
//! Serves a small fixed catalog so the complete page flow can be exercised
//! without provider credentials or network access.

use async_trait::async_trait;

use super::MetadataProvider;
use crate::errors::CatalogError;
use crate::types::{
    CastMember, Credits, Episode, Genre, MediaKind, MediaSummary, MovieDetail, Paginated,
    SeasonSummary, ShowDetail, Trailer, TrendingScope, TrendingWindow,
};

/// Provider backed by a fixed in-memory catalog.
#[derive(Debug, Default)]
pub struct StaticProvider;

impl StaticProvider {
    /// Creates a new static provider.
    pub fn new() -> Self {
        Self
    }

    fn movies() -> Vec<MediaSummary> {
        vec![
            summary(550, MediaKind::Movie, "Fight Club", "1999-10-15", 8.4),
            summary(603, MediaKind::Movie, "The Matrix", "1999-03-31", 8.2),
            summary(27205, MediaKind::Movie, "Inception", "2010-07-16", 8.4),
        ]
    }

    fn shows() -> Vec<MediaSummary> {
        vec![
            summary(1399, MediaKind::Show, "Game of Thrones", "2011-04-17", 8.4),
            summary(1396, MediaKind::Show, "Breaking Bad", "2008-01-20", 8.9),
        ]
    }

    fn all() -> Vec<MediaSummary> {
        let mut entries = Self::movies();
        entries.extend(Self::shows());
        entries
    }
}

fn summary(id: i64, kind: MediaKind, title: &str, date: &str, rating: f64) -> MediaSummary {
    MediaSummary {
        id,
        kind,
        title: title.to_string(),
        poster_path: Some(format!("/demo/poster/{id}.jpg")),
        backdrop_path: Some(format!("/demo/backdrop/{id}.jpg")),
        overview: format!("{title} (demo catalog entry)."),
        release_date: Some(date.to_string()),
        vote_average: rating,
        vote_count: 10_000,
        popularity: 100.0,
    }
}

fn single_page(results: Vec<MediaSummary>) -> Paginated<MediaSummary> {
    let total_results = results.len() as u64;
    Paginated {
        page: 1,
        total_pages: 1,
        total_results,
        results,
    }
}

#[async_trait]
impl MetadataProvider for StaticProvider {
    async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        let needle = query.to_lowercase();
        let matches: Vec<MediaSummary> = Self::all()
            .into_iter()
            .filter(|entry| entry.title.to_lowercase().contains(&needle))
            .collect();
        if page > 1 {
            // The demo catalog fits on one page.
            return Ok(Paginated {
                page,
                total_pages: 1,
                total_results: matches.len() as u64,
                results: Vec::new(),
            });
        }
        Ok(single_page(matches))
    }

    async fn trending(
        &self,
        scope: TrendingScope,
        _window: TrendingWindow,
    ) -> Result<Paginated<MediaSummary>, CatalogError> {
        Ok(single_page(match scope {
            TrendingScope::All => Self::all(),
            TrendingScope::Movies => Self::movies(),
            TrendingScope::Shows => Self::shows(),
        }))
    }

    async fn popular_movies(&self, _page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        Ok(single_page(Self::movies()))
    }

    async fn popular_shows(&self, _page: u32) -> Result<Paginated<MediaSummary>, CatalogError> {
        Ok(single_page(Self::shows()))
    }

    async fn movie_details(&self, id: i64) -> Result<MovieDetail, CatalogError> {
        let summary = Self::movies()
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or(CatalogError::NotFound)?;
        let related = others(Self::movies(), id);
        Ok(MovieDetail {
            summary,
            runtime: Some(139),
            tagline: Some("A demo tagline.".to_string()),
            status: Some("Released".to_string()),
            budget: Some(63_000_000),
            revenue: Some(100_853_753),
            genres: vec![Genre {
                id: 18,
                name: "Drama".to_string(),
            }],
            production_companies: Vec::new(),
            credits: demo_credits(),
            trailer: Some(Trailer {
                key: "demo-trailer".to_string(),
                name: "Official Trailer".to_string(),
            }),
            similar: related.clone(),
            recommendations: related,
        })
    }

    async fn show_details(&self, id: i64) -> Result<ShowDetail, CatalogError> {
        let summary = Self::shows()
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or(CatalogError::NotFound)?;
        let related = others(Self::shows(), id);
        Ok(ShowDetail {
            summary,
            last_air_date: Some("2019-05-19".to_string()),
            number_of_seasons: 2,
            number_of_episodes: 20,
            episode_run_time: vec![60],
            status: Some("Ended".to_string()),
            genres: vec![Genre {
                id: 18,
                name: "Drama".to_string(),
            }],
            networks: Vec::new(),
            created_by: Vec::new(),
            seasons: (1..=2)
                .map(|number| SeasonSummary {
                    id: id * 100 + i64::from(number),
                    season_number: number,
                    name: format!("Season {number}"),
                    overview: String::new(),
                    poster_path: None,
                    episode_count: 10,
                    air_date: None,
                })
                .collect(),
            credits: demo_credits(),
            trailer: Some(Trailer {
                key: "demo-trailer".to_string(),
                name: "Official Trailer".to_string(),
            }),
            similar: related.clone(),
            recommendations: related,
        })
    }

    async fn season_episodes(
        &self,
        show_id: i64,
        season_number: u32,
    ) -> Result<Vec<Episode>, CatalogError> {
        if !Self::shows().iter().any(|entry| entry.id == show_id) {
            return Err(CatalogError::NotFound);
        }
        if !(1..=2).contains(&season_number) {
            return Err(CatalogError::NotFound);
        }
        Ok((1..=10)
            .map(|number| Episode {
                id: show_id * 1000 + i64::from(season_number) * 100 + i64::from(number),
                episode_number: number,
                season_number,
                name: format!("Episode {number}"),
                overview: String::new(),
                still_path: None,
                air_date: None,
                runtime: Some(60),
                vote_average: 8.0,
                vote_count: 1_000,
            })
            .collect())
    }
}

fn others(entries: Vec<MediaSummary>, id: i64) -> Vec<MediaSummary> {
    entries.into_iter().filter(|entry| entry.id != id).collect()
}

fn demo_credits() -> Credits {
    Credits {
        cast: vec![CastMember {
            id: 819,
            name: "Demo Actor".to_string(),
            character: "Lead".to_string(),
            profile_path: None,
            order: 0,
        }],
        crew: Vec::new(),
    }
}
