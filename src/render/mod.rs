pub mod viz;

use console::{Emoji, style};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::api::types::{ChartData, GraphStats, ProteinInfo, ProteinSummary};
use crate::graph::{EdgeKind, GraphNode, NeighborGraph, NodeKind};

static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "");
static PROTEIN: Emoji<'_, '_> = Emoji("🧬 ", "");
static GRAPH: Emoji<'_, '_> = Emoji("🔗 ", "");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

/// Rendering seam for the explorer.
///
/// The controller never prints; it projects state through this trait. The
/// terminal implementation lives below, tests use a recording fake.
pub trait Renderer: Send {
    /// Populate the List panel, echoing the literal query back.
    fn render_results(&mut self, query: &str, results: &[ProteinSummary]);

    /// Populate the Detail panel's textual fields.
    fn render_detail(&mut self, info: &ProteinInfo);

    /// Re-render the neighborhood graph (replaces any previous graph).
    fn render_graph(&mut self, graph: &NeighborGraph);

    /// Re-render the neighbor list. `neighbors` is already in render
    /// order: depth-1 before depth-2, each bucket sorted by label.
    fn render_neighbors(&mut self, neighbors: &[&GraphNode]);

    /// Blocking, user-visible notice (errors, empty results).
    fn notify(&mut self, message: &str);

    /// Mark the graph area busy while a reload is in flight.
    fn set_busy(&mut self, busy: bool);

    /// Clear and unfocus the search input after a request completes.
    fn reset_search_input(&mut self);
}

/// Terminal renderer.
pub struct TermRenderer {
    spinner: Option<ProgressBar>,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self { spinner: None }
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TermRenderer {
    fn render_results(&mut self, query: &str, results: &[ProteinSummary]) {
        println!();
        println!(
            "{}Results for {} ({} match{})",
            SEARCH,
            style(format!("\"{}\"", query)).cyan(),
            style(results.len()).green().bold(),
            if results.len() == 1 { "" } else { "es" }
        );
        println!();
        for (i, result) in results.iter().enumerate() {
            println!(
                "  {:>3}. {}  {}  {}",
                i + 1,
                style(&result.uniprot_id).cyan().bold(),
                style(result.display_name()).bold(),
                style(result.entry_name.as_deref().unwrap_or("—")).dim(),
            );
        }
        println!();
    }

    fn render_detail(&mut self, info: &ProteinInfo) {
        let dash = "—".to_string();
        println!();
        println!("{}{}", PROTEIN, style(info.display_name()).bold().reverse());
        println!();
        let rows = [
            ("UniProt ID", info.uniprot_id.clone()),
            ("Entry name", info.entry_name.clone().unwrap_or_else(|| dash.clone())),
            ("Organism", info.organism.clone().unwrap_or_else(|| dash.clone())),
            ("Protein names", join_or_dash(&info.protein_names)),
            ("EC numbers", join_or_dash(&info.ec_numbers)),
            ("InterPro domains", join_or_dash(&info.interpro_ids)),
            (
                "Sequence length",
                info.sequence_length.map(|l| l.to_string()).unwrap_or(dash),
            ),
            ("Labelled", if info.is_labelled { "yes" } else { "no" }.to_string()),
        ];
        for (name, value) in rows {
            println!(
                "  {} {:<17} {}",
                style("•").cyan(),
                format!("{}:", name),
                style(value).green()
            );
        }
        println!();
    }

    fn render_graph(&mut self, graph: &NeighborGraph) {
        let depth1 = count_kind(graph, NodeKind::NeighborDepth1);
        let depth2 = count_kind(graph, NodeKind::NeighborDepth2);
        let domains = graph.domains().count();
        let similarities = graph
            .edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Similarity)
            .count();

        println!(
            "{}Neighborhood: {} direct, {} second-hop, {} domains, {} similarity edges",
            GRAPH,
            style(depth1).green().bold(),
            style(depth2).green(),
            style(domains).yellow(),
            style(similarities).magenta(),
        );
    }

    fn render_neighbors(&mut self, neighbors: &[&GraphNode]) {
        if neighbors.is_empty() {
            println!("  {}", style("No neighbors at this depth.").dim());
            return;
        }
        for neighbor in neighbors {
            let hop = match neighbor.kind {
                NodeKind::NeighborDepth2 => style("2").dim(),
                _ => style("1").cyan(),
            };
            println!(
                "  {} [{}] {}  {}",
                style("→").dim(),
                hop,
                style(&neighbor.label).bold(),
                style(&neighbor.id).dim(),
            );
        }
        println!();
    }

    fn notify(&mut self, message: &str) {
        println!();
        println!("{}{}", WARN, style(message).yellow());
        println!();
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            let spinner = ProgressBar::new_spinner();
            if let Ok(template) =
                ProgressStyle::default_spinner().template(&format!("{}{{spinner:.green}} {{msg}}", GRAPH))
            {
                spinner.set_style(template);
            }
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner.set_message("Reloading neighborhood...");
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn reset_search_input(&mut self) {
        // The terminal prompt has no persistent input field to clear.
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "—".to_string()
    } else {
        values.join(", ")
    }
}

fn count_kind(graph: &NeighborGraph, kind: NodeKind) -> usize {
    graph.nodes.iter().filter(|n| n.kind == kind).count()
}

/// Teacher-style block bar chart for precomputed statistics.
pub fn print_stats(stats: &GraphStats) {
    static CHART: Emoji<'_, '_> = Emoji("📊 ", "");

    println!("{}Database Overview", CHART);
    println!();
    let rows = [
        ("Proteins", stats.protein_count),
        ("Domains", stats.domain_count),
        ("Similarity edges", stats.similarity_edge_count),
        ("Labelled", stats.labelled_count),
        ("Unlabelled", stats.unlabelled_count),
        ("Isolated", stats.isolated_count),
    ];
    for (name, value) in rows {
        println!(
            "  {} {:<18} {}",
            style("•").cyan(),
            format!("{}:", name),
            style(value).green().bold()
        );
    }
    println!(
        "  {} {:<18} {}",
        style("•").cyan(),
        "Avg degree:",
        style(format!("{:.2}", stats.avg_degree)).green()
    );

    if !stats.degree_distribution.labels.is_empty() {
        println!();
        println!("{}Degree Distribution", CHART);
        println!();
        print_bar_chart(&stats.degree_distribution);
    }
    println!();
}

fn print_bar_chart(chart: &ChartData) {
    let max = chart.values.iter().copied().max().unwrap_or(0).max(1);
    for (label, value) in chart.labels.iter().zip(chart.values.iter()) {
        let bar_len = ((*value as f64 / max as f64) * 30.0).round() as usize;
        let bar = "█".repeat(bar_len);
        println!(
            "  {:<12} {} ({})",
            style(label).yellow(),
            style(&bar).blue(),
            style(value).dim(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_or_dash() {
        assert_eq!(join_or_dash(&[]), "—");
        assert_eq!(
            join_or_dash(&["2.7.11.1".to_string(), "2.7.11.2".to_string()]),
            "2.7.11.1, 2.7.11.2"
        );
    }

    #[test]
    fn test_count_kind() {
        let graph = NeighborGraph {
            nodes: vec![
                GraphNode {
                    id: "a".into(),
                    label: "A".into(),
                    kind: NodeKind::NeighborDepth1,
                },
                GraphNode {
                    id: "b".into(),
                    label: "B".into(),
                    kind: NodeKind::NeighborDepth1,
                },
                GraphNode {
                    id: "c".into(),
                    label: "C".into(),
                    kind: NodeKind::Center,
                },
            ],
            edges: vec![],
        };
        assert_eq!(count_kind(&graph, NodeKind::NeighborDepth1), 2);
        assert_eq!(count_kind(&graph, NodeKind::NeighborDepth2), 0);
    }
}
