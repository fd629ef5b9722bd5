//! Stream-URL resolution properties.

use marquee_catalog::{CatalogError, EmbedConfig, MediaKind, StreamTarget, resolve_stream_url};

fn embed() -> EmbedConfig {
    EmbedConfig::default()
}

#[test]
fn movie_urls_ignore_episode_targeting() {
    for (season, episode) in [(None, None), (Some(1), None), (Some(2), Some(5))] {
        let url = resolve_stream_url(&embed(), 550, MediaKind::Movie, season, episode).unwrap();
        assert_eq!(url, "https://vidsrc.to/embed/movie/550");
    }
}

#[test]
fn show_urls_narrow_with_available_targeting() {
    assert_eq!(
        resolve_stream_url(&embed(), 1399, MediaKind::Show, Some(3), Some(9)).unwrap(),
        "https://vidsrc.to/embed/tv/1399/3/9"
    );
    assert_eq!(
        resolve_stream_url(&embed(), 1399, MediaKind::Show, Some(3), None).unwrap(),
        "https://vidsrc.to/embed/tv/1399/3"
    );
    assert_eq!(
        resolve_stream_url(&embed(), 1399, MediaKind::Show, None, None).unwrap(),
        "https://vidsrc.to/embed/tv/1399"
    );
    // Episode without season resolves to the show-level embed.
    assert_eq!(
        resolve_stream_url(&embed(), 1399, MediaKind::Show, None, Some(9)).unwrap(),
        "https://vidsrc.to/embed/tv/1399"
    );
}

#[test]
fn malformed_input_is_rejected_before_templating() {
    let error = StreamTarget::movie(-1).embed_url(&embed()).unwrap_err();
    assert!(matches!(error, CatalogError::InvalidInput { .. }));

    let error = StreamTarget::show(1399, Some(0), None)
        .embed_url(&embed())
        .unwrap_err();
    assert!(matches!(error, CatalogError::InvalidInput { .. }));
}
