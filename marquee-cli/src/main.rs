//! Marquee CLI - Command-line interface
//!
//! Provides command-line access to the catalog facade and the web server.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "A movie/TV browsing front-end")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    commands::handle_command(cli.command).await?;

    Ok(())
}
