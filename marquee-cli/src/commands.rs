//! CLI command implementations

use std::net::SocketAddr;

use anyhow::Context;
use clap::Subcommand;
use marquee_catalog::{
    CatalogConfig, CatalogService, EmbedConfig, MediaDetail, MediaKind, MediaSummary,
};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Provider API key (falls back to TMDB_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
        /// Serve the static demo catalog instead of the real provider
        #[arg(long)]
        demo: bool,
    },
    /// Search the catalog from the terminal
    Search {
        /// Free-text query
        query: String,
        /// Result page
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Show details for a movie or TV show
    Details {
        /// Media kind: movie or tv
        kind: String,
        /// Provider media id
        id: i64,
    },
    /// Resolve the streaming-embed URL for a media target
    Stream {
        /// Media kind: movie or tv
        kind: String,
        /// Provider media id
        id: i64,
        /// Season to target, shows only
        #[arg(short, long)]
        season: Option<u32>,
        /// Episode to target, requires a season
        #[arg(short, long)]
        episode: Option<u32>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve {
            host,
            port,
            api_key,
            demo,
        } => serve(host, port, api_key, demo).await,
        Commands::Search { query, page } => search(query, page).await,
        Commands::Details { kind, id } => details(kind, id).await,
        Commands::Stream {
            kind,
            id,
            season,
            episode,
        } => stream(kind, id, season, episode),
    }
}

fn build_service(api_key: Option<String>, demo: bool) -> anyhow::Result<CatalogService> {
    let embed = EmbedConfig::from_env();
    if demo {
        return Ok(CatalogService::new_demo(embed));
    }

    let mut config = CatalogConfig::from_env();
    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }
    anyhow::ensure!(
        config.api_key.is_some(),
        "no provider API key; pass --api-key, set TMDB_API_KEY, or use --demo"
    );
    CatalogService::new(config, embed).context("failed to initialize catalog service")
}

async fn serve(host: String, port: u16, api_key: Option<String>, demo: bool) -> anyhow::Result<()> {
    let catalog = build_service(api_key, demo)?;
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address {host}:{port}"))?;

    marquee_web::run_server(catalog, addr)
        .await
        .map_err(|e| anyhow::anyhow!("web server failed: {e}"))
}

async fn search(query: String, page: u32) -> anyhow::Result<()> {
    let catalog = build_service(None, false)?;
    let results = catalog.search(&query, page).await?;

    if results.is_empty() {
        println!("No results for \"{query}\"");
        return Ok(());
    }

    println!(
        "Page {}/{} ({} results total)",
        results.page, results.total_pages, results.total_results
    );
    for entry in &results.results {
        print_summary(entry);
    }
    Ok(())
}

async fn details(kind: String, id: i64) -> anyhow::Result<()> {
    let catalog = build_service(None, false)?;
    let kind = parse_kind(&kind)?;

    match catalog.details(id, kind).await? {
        MediaDetail::Movie(movie) => {
            print_summary(&movie.summary);
            if let Some(runtime) = movie.runtime {
                println!("  runtime: {runtime} min");
            }
            if let Some(trailer) = &movie.trailer {
                println!("  trailer: {}", trailer.watch_url());
            }
        }
        MediaDetail::Show(show) => {
            print_summary(&show.summary);
            println!(
                "  {} seasons, {} episodes",
                show.number_of_seasons, show.number_of_episodes
            );
            if let Some(trailer) = &show.trailer {
                println!("  trailer: {}", trailer.watch_url());
            }
        }
    }
    Ok(())
}

fn stream(kind: String, id: i64, season: Option<u32>, episode: Option<u32>) -> anyhow::Result<()> {
    let embed = EmbedConfig::from_env();
    let url = marquee_catalog::resolve_stream_url(&embed, id, parse_kind(&kind)?, season, episode)?;
    println!("{url}");
    Ok(())
}

fn parse_kind(kind: &str) -> anyhow::Result<MediaKind> {
    match kind {
        "movie" => Ok(MediaKind::Movie),
        "tv" | "show" => Ok(MediaKind::Show),
        other => anyhow::bail!("unknown media kind '{other}', expected movie or tv"),
    }
}

fn print_summary(entry: &MediaSummary) {
    let year = entry
        .release_date
        .as_deref()
        .and_then(|date| date.get(..4))
        .unwrap_or("----");
    println!(
        "[{:>9}] {} ({year}) ★ {:.1}",
        entry.id, entry.title, entry.vote_average
    );
}
