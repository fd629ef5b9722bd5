//! Centralized configuration for the catalog facade.
//!
//! The provider client is constructed from explicit configuration passed at
//! construction time; nothing reads ambient state after startup. Environment
//! variables are folded in once, through [`CatalogConfig::from_env`].

use std::time::Duration;

/// Default metadata provider endpoint (TMDB v3).
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default streaming-embed provider.
pub const DEFAULT_EMBED_BASE_URL: &str = "https://vidsrc.to";

/// Configuration for the remote metadata provider client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the metadata API, without a trailing slash
    pub api_base_url: String,
    /// API key sent with every request (None disables the real provider)
    pub api_key: Option<String>,
    /// Language tag for localized titles and overviews
    pub language: String,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
    /// Outbound request timeout; the only timeout the facade applies
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            language: "en-US".to_string(),
            user_agent: "marquee/0.1.0",
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl CatalogConfig {
    /// Creates configuration from environment variables.
    ///
    /// Reads `TMDB_API_KEY` for credentials and `TMDB_API_BASE_URL` for a
    /// non-default endpoint; anything unset keeps the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            config.api_key = Some(key);
        }
        if let Ok(base) = std::env::var("TMDB_API_BASE_URL") {
            config.api_base_url = base.trim_end_matches('/').to_string();
        }
        config
    }

    /// Sets the API key, replacing any environment-derived value.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Configuration for the streaming-embed provider.
///
/// The embed provider's protocol is opaque; the facade only constructs URLs
/// of the form `<base_url>/embed/{movie|tv}/{id}[/{season}[/{episode}]]`.
#[derive(Debug, Clone)]
pub struct EmbedConfig {
    /// Base URL of the embed provider, without a trailing slash
    pub base_url: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EMBED_BASE_URL.to_string(),
        }
    }
}

impl EmbedConfig {
    /// Creates configuration from environment variables.
    ///
    /// Reads `MARQUEE_EMBED_BASE_URL`, keeping the default provider when
    /// unset.
    pub fn from_env() -> Self {
        match std::env::var("MARQUEE_EMBED_BASE_URL") {
            Ok(base) => Self {
                base_url: base.trim_end_matches('/').to_string(),
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_providers() {
        let config = CatalogConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.language, "en-US");

        let embed = EmbedConfig::default();
        assert_eq!(embed.base_url, DEFAULT_EMBED_BASE_URL);
    }

    #[test]
    fn with_api_key_overrides() {
        let config = CatalogConfig::default().with_api_key("secret");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }
}
