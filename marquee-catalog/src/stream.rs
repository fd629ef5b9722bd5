//! Streaming-embed URL resolution.
//!
//! A [`StreamTarget`] is a pure function of its inputs: (id, kind, optional
//! season, optional episode) maps to exactly one embed URL. No state, no
//! remote calls; the only failure mode is malformed input.

use crate::config::EmbedConfig;
use crate::errors::CatalogError;
use crate::types::MediaKind;

/// Derived streaming target for the embed provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamTarget {
    /// Provider media identifier, must be positive
    pub id: i64,
    /// Movie or show; persons are not streamable
    pub kind: MediaKind,
    /// Season to target, shows only
    pub season: Option<u32>,
    /// Episode to target, requires a season
    pub episode: Option<u32>,
}

impl StreamTarget {
    /// Target for a movie. Season and episode never apply.
    pub fn movie(id: i64) -> Self {
        Self {
            id,
            kind: MediaKind::Movie,
            season: None,
            episode: None,
        }
    }

    /// Target for a show, optionally narrowed to a season or episode.
    pub fn show(id: i64, season: Option<u32>, episode: Option<u32>) -> Self {
        Self {
            id,
            kind: MediaKind::Show,
            season,
            episode,
        }
    }

    /// Resolves the embed URL for this target.
    ///
    /// Movies resolve to `<base>/embed/movie/{id}` regardless of any
    /// season/episode inputs. Shows resolve to `<base>/embed/tv/{id}`,
    /// narrowed by `/{season}` and `/{season}/{episode}` when present; an
    /// episode without a season falls back to the show-level embed.
    ///
    /// # Errors
    /// - `CatalogError::InvalidInput` - Non-positive id, zero season/episode,
    ///   or a person target
    pub fn embed_url(&self, embed: &EmbedConfig) -> Result<String, CatalogError> {
        if self.id <= 0 {
            return Err(CatalogError::InvalidInput {
                reason: format!("media id must be positive, got {}", self.id),
            });
        }
        if self.season == Some(0) || self.episode == Some(0) {
            return Err(CatalogError::InvalidInput {
                reason: "season and episode numbers are 1-based".to_string(),
            });
        }

        let base = embed.base_url.trim_end_matches('/');
        match self.kind {
            MediaKind::Person => Err(CatalogError::InvalidInput {
                reason: "persons have no stream embed".to_string(),
            }),
            MediaKind::Movie => Ok(format!("{base}/embed/movie/{}", self.id)),
            MediaKind::Show => Ok(match (self.season, self.episode) {
                (Some(season), Some(episode)) => {
                    format!("{base}/embed/tv/{}/{season}/{episode}", self.id)
                }
                (Some(season), None) => format!("{base}/embed/tv/{}/{season}", self.id),
                (None, _) => format!("{base}/embed/tv/{}", self.id),
            }),
        }
    }
}

/// Resolves a streaming-embed URL without building a [`StreamTarget`] first.
///
/// # Errors
/// - `CatalogError::InvalidInput` - Same conditions as
///   [`StreamTarget::embed_url`]
pub fn resolve_stream_url(
    embed: &EmbedConfig,
    id: i64,
    kind: MediaKind,
    season: Option<u32>,
    episode: Option<u32>,
) -> Result<String, CatalogError> {
    StreamTarget {
        id,
        kind,
        season,
        episode,
    }
    .embed_url(embed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embed() -> EmbedConfig {
        EmbedConfig::default()
    }

    #[test]
    fn movie_url_ignores_season_and_episode() {
        let url = resolve_stream_url(&embed(), 550, MediaKind::Movie, Some(2), Some(5)).unwrap();
        assert_eq!(url, "https://vidsrc.to/embed/movie/550");
    }

    #[test]
    fn show_url_narrows_by_season_then_episode() {
        let base = embed();

        let full = resolve_stream_url(&base, 1399, MediaKind::Show, Some(3), Some(9)).unwrap();
        assert_eq!(full, "https://vidsrc.to/embed/tv/1399/3/9");

        let season_only = resolve_stream_url(&base, 1399, MediaKind::Show, Some(3), None).unwrap();
        assert_eq!(season_only, "https://vidsrc.to/embed/tv/1399/3");

        let show_level = resolve_stream_url(&base, 1399, MediaKind::Show, None, None).unwrap();
        assert_eq!(show_level, "https://vidsrc.to/embed/tv/1399");
    }

    #[test]
    fn episode_without_season_falls_back_to_show_level() {
        let url = resolve_stream_url(&embed(), 1399, MediaKind::Show, None, Some(9)).unwrap();
        assert_eq!(url, "https://vidsrc.to/embed/tv/1399");
    }

    #[test]
    fn non_positive_id_is_rejected() {
        assert!(resolve_stream_url(&embed(), 0, MediaKind::Movie, None, None).is_err());
        assert!(resolve_stream_url(&embed(), -7, MediaKind::Show, None, None).is_err());
    }

    #[test]
    fn zero_season_or_episode_is_rejected() {
        assert!(resolve_stream_url(&embed(), 1399, MediaKind::Show, Some(0), None).is_err());
        assert!(resolve_stream_url(&embed(), 1399, MediaKind::Show, Some(1), Some(0)).is_err());
    }

    #[test]
    fn person_target_is_rejected() {
        let error = resolve_stream_url(&embed(), 500, MediaKind::Person, None, None).unwrap_err();
        assert!(matches!(error, CatalogError::InvalidInput { .. }));
    }

    #[test]
    fn custom_embed_base_is_honored() {
        let custom = EmbedConfig {
            base_url: "https://player.example/".to_string(),
        };
        let url = StreamTarget::movie(42).embed_url(&custom).unwrap();
        assert_eq!(url, "https://player.example/embed/movie/42");
    }
}
