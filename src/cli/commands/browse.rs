use anyhow::{Context, Result};
use console::{Emoji, style};
use std::io::{self, BufRead, Write};

use crate::api::HttpApi;
use crate::cli::SearchType;
use crate::config::Config;
use crate::explorer::Explorer;
use crate::render::{viz, TermRenderer};

static DNA: Emoji<'_, '_> = Emoji("🧬 ", "");
static BROWSER: Emoji<'_, '_> = Emoji("🌐 ", "");

#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Search(String, SearchType),
    Open(String),
    Depth(u8),
    Back,
    Forward,
    List,
    Viz,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub async fn run(start_id: Option<String>) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let api = HttpApi::new(&config.api).context("Failed to build API client")?;

    println!();
    println!("{}", style(" protex - Interactive Explorer ").bold().reverse());
    println!();
    println!(
        "{}Connected to {}. Type {} for commands.",
        DNA,
        style(&config.api.base_url).cyan(),
        style("help").yellow()
    );

    let mut explorer = Explorer::new(Box::new(api), Box::new(TermRenderer::new()), start_id);
    explorer.start().await;

    let stdin = io::stdin();
    loop {
        print!("{} ", style("protex>").magenta().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match parse_command(&line) {
            BrowseCommand::Search(query, search_type) => {
                explorer.search(&query, search_type).await;
            }
            BrowseCommand::Open(id) => {
                explorer.open_detail(&id, true).await;
            }
            BrowseCommand::Depth(depth) => {
                explorer.change_depth(depth).await;
            }
            BrowseCommand::Back => explorer.back().await,
            BrowseCommand::Forward => explorer.forward().await,
            BrowseCommand::List => explorer.show_list(),
            BrowseCommand::Viz => {
                let graph = explorer.current_graph();
                if graph.is_empty() {
                    println!("{}", style("Open a protein first.").yellow());
                    continue;
                }
                let label = graph
                    .center()
                    .map(|c| c.label.clone())
                    .or_else(|| explorer.state().entity_id.clone())
                    .unwrap_or_default();
                let path = viz::write_neighborhood_html(&label, graph)?;
                viz::open_in_browser(&path);
                println!(
                    "{}Visualization written to {}",
                    BROWSER,
                    style(path.display()).cyan().underlined()
                );
            }
            BrowseCommand::Help => print_help(),
            BrowseCommand::Quit => break,
            BrowseCommand::Empty => {}
            BrowseCommand::Unknown(word) => {
                println!(
                    "{} Unknown command '{}'. Type {} for commands.",
                    style("?").red(),
                    word,
                    style("help").yellow()
                );
            }
        }
    }

    println!("Bye.");
    Ok(())
}

fn parse_command(line: &str) -> BrowseCommand {
    let line = line.trim();
    if line.is_empty() {
        return BrowseCommand::Empty;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word {
        "search" | "s" => {
            // Optional matching strategy prefix, e.g. `search id:P12345`
            let (search_type, query) = match rest.split_once(':') {
                Some(("id", q)) => (SearchType::Id, q.trim()),
                Some(("name", q)) => (SearchType::Name, q.trim()),
                Some(("entry", q)) | Some(("entry_name", q)) => (SearchType::EntryName, q.trim()),
                _ => (SearchType::Combined, rest),
            };
            BrowseCommand::Search(query.to_string(), search_type)
        }
        "open" | "o" => {
            if rest.is_empty() {
                BrowseCommand::Unknown("open (missing id)".to_string())
            } else {
                BrowseCommand::Open(rest.to_string())
            }
        }
        "depth" | "d" => match rest.parse::<u8>() {
            Ok(depth) => BrowseCommand::Depth(depth),
            Err(_) => BrowseCommand::Unknown(format!("depth {}", rest)),
        },
        "back" | "b" => BrowseCommand::Back,
        "forward" | "f" => BrowseCommand::Forward,
        "list" | "l" => BrowseCommand::List,
        "viz" | "v" => BrowseCommand::Viz,
        "help" | "h" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => BrowseCommand::Unknown(other.to_string()),
    }
}

fn print_help() {
    println!();
    println!("  {}", style("Commands").bold());
    println!("    search <query>      search proteins (combined matching)");
    println!("    search id:<id>      search by UniProt identifier");
    println!("    search name:<q>     search by protein name");
    println!("    search entry:<q>    search by entry name");
    println!("    open <id>           open a protein's detail view");
    println!("    depth <1|2>         reload the neighborhood at a new depth");
    println!("    back / forward      navigate the session history");
    println!("    list                show the last results again");
    println!("    viz                 export the neighborhood as HTML");
    println!("    quit                leave");
    println!();
}
