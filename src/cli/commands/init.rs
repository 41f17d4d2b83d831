use anyhow::Result;
use console::{Emoji, style};

use crate::config::Config;

static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");

pub async fn run(force: bool) -> Result<()> {
    println!();
    println!("{}", style(" protex - Initialization ").bold().reverse());
    println!();

    let config_path = Config::config_path()?;
    if config_path.exists() && !force {
        println!(
            "{}Configuration already exists at {}",
            GEAR,
            style(config_path.display()).cyan()
        );
        println!("  Use {} to overwrite it.", style("--force").yellow());
        return Ok(());
    }

    let config = Config {
        api: Default::default(),
    };
    let written = config.save()?;

    println!(
        "{}Wrote default configuration to {}",
        CHECK,
        style(written.display()).cyan().underlined()
    );
    println!();
    println!(
        "  Backend API: {}",
        style(&config.api.base_url).green().bold()
    );
    println!("  Edit the file to point at a different backend.");
    println!();

    Ok(())
}
