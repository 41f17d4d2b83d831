use anyhow::{Context, Result};
use console::{Emoji, style};

use crate::api::HttpApi;
use crate::cli::SearchType;
use crate::config::Config;
use crate::explorer::Explorer;
use crate::render::TermRenderer;

static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "");

pub async fn run(query: String, search_type: SearchType) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let api = HttpApi::new(&config.api).context("Failed to build API client")?;

    println!(
        "{}Searching {} (type: {})...",
        SEARCH,
        style(&query).cyan(),
        style(search_type).dim()
    );

    // Same controller as the interactive session: one unambiguous match
    // jumps straight to the detail view.
    let mut explorer = Explorer::new(Box::new(api), Box::new(TermRenderer::new()), None);
    explorer.search(&query, search_type).await;

    Ok(())
}
