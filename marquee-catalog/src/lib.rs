//! Marquee Catalog - Media catalog facade

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Normalizes a remote movie/TV metadata provider (search, trending, details,
//! season lookups) into a uniform request/response shape for rendering pages,
//! and derives streaming-embed URLs from a media identifier.

pub mod config;
pub mod errors;
pub mod providers;
pub mod service;
pub mod stream;
pub mod types;

// Re-export main types
pub use config::{CatalogConfig, EmbedConfig};
pub use errors::CatalogError;
pub use providers::{MetadataProvider, StaticProvider, TmdbProvider};
pub use service::CatalogService;
pub use stream::{StreamTarget, resolve_stream_url};
pub use types::{
    CastMember, Creator, Credits, CrewMember, Episode, Genre, MediaDetail, MediaKind,
    MediaSummary, MovieDetail, Network, Paginated, ProductionCompany, SeasonSummary, ShowDetail,
    Trailer, TrendingScope, TrendingWindow, VideoClip, select_trailer,
};
