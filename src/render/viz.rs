use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::graph::{EdgeKind, NeighborGraph, NodeKind};

/// Generate a self-contained vis-network HTML page for a neighborhood and
/// write it to the system temp directory.
pub fn write_neighborhood_html(center_label: &str, graph: &NeighborGraph) -> Result<PathBuf> {
    let html = neighborhood_html(center_label, graph)?;

    let html_path = std::env::temp_dir().join("protex_neighborhood.html");
    let mut file = std::fs::File::create(&html_path)?;
    file.write_all(html.as_bytes())?;

    Ok(html_path)
}

/// Try to open the page in the default browser; failures are ignored.
pub fn open_in_browser(path: &Path) {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(path).spawn().ok();
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(path).spawn().ok();
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", path.to_str().unwrap_or("")])
            .spawn()
            .ok();
    }
}

fn neighborhood_html(center_label: &str, graph: &NeighborGraph) -> Result<String> {
    let nodes_json: Vec<serde_json::Value> = graph
        .nodes
        .iter()
        .map(|n| {
            let (color, size) = match n.kind {
                NodeKind::Center => ("#ff6b8a", 28),
                NodeKind::NeighborDepth1 => ("#a855f7", 18),
                NodeKind::NeighborDepth2 => ("#6366f1", 12),
                NodeKind::Domain => ("#14b8a6", 10),
            };
            serde_json::json!({
                "id": n.id,
                "label": n.label,
                "color": color,
                "size": size,
                "shape": if n.kind == NodeKind::Domain { "diamond" } else { "dot" },
            })
        })
        .collect();

    let edges_json: Vec<serde_json::Value> = graph
        .edges
        .iter()
        .map(|e| {
            let is_similarity = e.kind == EdgeKind::Similarity;
            let width = e
                .weight
                .map(|w| (w * 6.0).clamp(1.0, 6.0))
                .unwrap_or(1.0);
            serde_json::json!({
                "from": e.source,
                "to": e.target,
                "width": if is_similarity { width } else { 1.0 },
                "dashes": !is_similarity,
                "color": if is_similarity { "rgba(168,85,247,0.5)" } else { "rgba(20,184,166,0.4)" },
                "title": e.weight.map(|w| format!("similarity {:.2}", w)),
            })
        })
        .collect();

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>protex - {title}</title>
    <style>
        body {{ margin: 0; font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; background: #050510; color: #c8c8e0; height: 100vh; display: flex; flex-direction: column; }}
        #header {{ padding: 12px 24px; background: rgba(18,18,42,0.9); border-bottom: 1px solid rgba(255,255,255,0.08); }}
        #header h1 {{ margin: 0; font-size: 1.1em; }}
        #legend {{ font-size: 0.8em; color: #8888aa; margin-top: 4px; }}
        #legend span {{ margin-right: 16px; }}
        .dot {{ display: inline-block; width: 9px; height: 9px; border-radius: 50%; margin-right: 4px; }}
        #graph {{ flex: 1; }}
    </style>
</head>
<body>
    <div id="header">
        <h1>{title}</h1>
        <div id="legend">
            <span><i class="dot" style="background:#ff6b8a"></i>center</span>
            <span><i class="dot" style="background:#a855f7"></i>depth 1</span>
            <span><i class="dot" style="background:#6366f1"></i>depth 2</span>
            <span><i class="dot" style="background:#14b8a6"></i>domain</span>
        </div>
    </div>
    <div id="graph"></div>
    <script src="https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js"></script>
    <script>
        const nodes = new vis.DataSet({nodes});
        const edges = new vis.DataSet({edges});
        const network = new vis.Network(
            document.getElementById('graph'),
            {{ nodes, edges }},
            {{
                nodes: {{ font: {{ color: '#c8c8e0', size: 13 }} }},
                physics: {{
                    solver: 'forceAtlas2Based',
                    forceAtlas2Based: {{ gravitationalConstant: -80, springLength: 140 }},
                    stabilization: {{ iterations: 200 }}
                }},
                interaction: {{ hover: true }}
            }}
        );
        network.on('click', p => {{
            if (p.nodes.length > 0) document.title = 'protex - ' + p.nodes[0];
        }});
    </script>
</body>
</html>"#,
        title = center_label,
        nodes = serde_json::to_string(&nodes_json)?,
        edges = serde_json::to_string(&edges_json)?,
    );

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphEdge, GraphNode};

    fn sample_graph() -> NeighborGraph {
        NeighborGraph {
            nodes: vec![
                GraphNode {
                    id: "P1".into(),
                    label: "Kinase".into(),
                    kind: NodeKind::Center,
                },
                GraphNode {
                    id: "IPR1".into(),
                    label: "IPR000001".into(),
                    kind: NodeKind::Domain,
                },
            ],
            edges: vec![GraphEdge {
                source: "P1".into(),
                target: "IPR1".into(),
                kind: EdgeKind::HasDomain,
                weight: None,
            }],
        }
    }

    #[test]
    fn test_html_embeds_nodes_and_edges() {
        let html = neighborhood_html("Kinase", &sample_graph()).unwrap();
        assert!(html.contains("\"id\":\"P1\""));
        assert!(html.contains("\"from\":\"P1\""));
        assert!(html.contains("vis-network"));
    }

    #[test]
    fn test_domain_edges_are_dashed() {
        let html = neighborhood_html("Kinase", &sample_graph()).unwrap();
        assert!(html.contains("\"dashes\":true"));
    }

    #[test]
    fn test_html_written_to_temp_dir() {
        let path = write_neighborhood_html("Kinase", &sample_graph()).unwrap();
        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Kinase"));
    }
}
