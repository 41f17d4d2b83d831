use anyhow::{Context, Result};
use console::{Emoji, style};

use crate::api::HttpApi;
use crate::config::Config;
use crate::explorer::Explorer;
use crate::render::{viz, TermRenderer};

static BROWSER: Emoji<'_, '_> = Emoji("🌐 ", "");

pub async fn run(id: String, depth: u8, open_viz: bool) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let api = HttpApi::new(&config.api).context("Failed to build API client")?;

    let mut explorer = Explorer::new(
        Box::new(api),
        Box::new(TermRenderer::new()),
        Some(id.clone()),
    );
    explorer.start().await;

    if explorer.state().entity_id.is_none() {
        // Load failed; the renderer already carried the notice
        return Ok(());
    }

    if depth > 1 {
        explorer.change_depth(depth).await;
    }

    if open_viz {
        let graph = explorer.current_graph();
        if graph.is_empty() {
            println!("{}", style("Nothing to visualize.").yellow());
            return Ok(());
        }
        let label = graph
            .center()
            .map(|c| c.label.clone())
            .unwrap_or_else(|| id.clone());
        let path = viz::write_neighborhood_html(&label, graph)?;
        viz::open_in_browser(&path);
        println!(
            "{}Visualization written to {}",
            BROWSER,
            style(path.display()).cyan().underlined()
        );
    }

    Ok(())
}
