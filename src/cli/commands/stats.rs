use anyhow::{Context, Result};
use console::{Emoji, style};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::api::{HttpApi, ProteinApi};
use crate::config::Config;
use crate::render;

static DATABASE: Emoji<'_, '_> = Emoji("💾 ", "");

pub async fn run() -> Result<()> {
    println!();
    println!("{}", style(" protex - Database Statistics ").bold().reverse());
    println!();

    let config = Config::load().context("Failed to load configuration")?;
    let api = HttpApi::new(&config.api).context("Failed to build API client")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template(&format!("{}{{spinner:.green}} {{msg}}", DATABASE))
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Fetching statistics...");

    let stats = api.stats().await;
    spinner.finish_and_clear();

    let stats = stats.context("Failed to fetch statistics from the backend")?;
    render::print_stats(&stats);

    Ok(())
}
