pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "protex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive terminal explorer for a protein graph database", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration (backend API endpoint)
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long, default_value = "false")]
        force: bool,
    },

    /// Search proteins by identifier, name, or entry name
    Search {
        /// Free-text query (UniProt id, protein name, or entry name)
        query: String,

        /// Matching strategy used by the backend
        #[arg(short = 't', long = "type", default_value = "combined")]
        search_type: SearchType,
    },

    /// Show a protein and its neighborhood graph
    Show {
        /// UniProt identifier (e.g. P12345)
        id: String,

        /// Traversal depth for the neighborhood (1 or 2 hops)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=2))]
        depth: u8,

        /// Also export the neighborhood as an HTML visualization and open it
        #[arg(long, default_value = "false")]
        viz: bool,
    },

    /// Start an interactive browsing session
    Browse {
        /// Protein to open on startup (acts like a deep link)
        id: Option<String>,
    },

    /// Show database statistics
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SearchType {
    /// Match against id, name, and entry name at once
    #[default]
    Combined,
    /// Exact UniProt identifier lookup
    Id,
    /// Protein name substring match
    Name,
    /// Entry name substring match
    EntryName,
}

impl SearchType {
    /// Wire value for the `type` query parameter.
    pub fn as_query_param(&self) -> &'static str {
        match self {
            SearchType::Combined => "combined",
            SearchType::Id => "id",
            SearchType::Name => "name",
            SearchType::EntryName => "entry_name",
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_type_query_params() {
        assert_eq!(SearchType::Combined.as_query_param(), "combined");
        assert_eq!(SearchType::Id.as_query_param(), "id");
        assert_eq!(SearchType::Name.as_query_param(), "name");
        assert_eq!(SearchType::EntryName.as_query_param(), "entry_name");
    }

    #[test]
    fn test_cli_parses_show_with_depth() {
        let cli = Cli::try_parse_from(["protex", "show", "P12345", "--depth", "2"]).unwrap();
        match cli.command {
            Commands::Show { id, depth, viz } => {
                assert_eq!(id, "P12345");
                assert_eq!(depth, 2);
                assert!(!viz);
            }
            _ => panic!("expected show subcommand"),
        }
    }

    #[test]
    fn test_cli_search_type_default_is_combined() {
        let cli = Cli::try_parse_from(["protex", "search", "kinase"]).unwrap();
        match cli.command {
            Commands::Search { search_type, .. } => {
                assert_eq!(search_type, SearchType::Combined);
            }
            _ => panic!("expected search subcommand"),
        }
    }
}
