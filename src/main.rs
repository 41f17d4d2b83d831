mod api;
mod cli;
mod config;
mod error;
mod explorer;
mod graph;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing - only show warnings by default, use RUST_LOG=info for more detail
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cli::commands::init::run(force).await?;
        }
        Commands::Search { query, search_type } => {
            cli::commands::search::run(query, search_type).await?;
        }
        Commands::Show { id, depth, viz } => {
            cli::commands::show::run(id, depth, viz).await?;
        }
        Commands::Browse { id } => {
            cli::commands::browse::run(id).await?;
        }
        Commands::Stats => {
            cli::commands::stats::run().await?;
        }
    }

    Ok(())
}
