use serde::{Deserialize, Serialize};

/// Role of a node inside a neighborhood graph, relative to its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Center,
    NeighborDepth1,
    NeighborDepth2,
    Domain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Similarity,
    HasDomain,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub weight: Option<f64>,
}

/// The subgraph within `depth` hops of a center protein.
///
/// Regenerated wholesale on every fetch; never merged with a previous one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NeighborGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl NeighborGraph {
    /// Protein neighbors in render order: all depth-1 neighbors before any
    /// depth-2 neighbor, each bucket sorted by display label. Domain nodes
    /// and the center are excluded.
    pub fn sorted_neighbors(&self) -> Vec<&GraphNode> {
        let mut neighbors: Vec<&GraphNode> = self
            .nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::NeighborDepth1 | NodeKind::NeighborDepth2))
            .collect();
        neighbors.sort_by(|a, b| {
            depth_bucket(a.kind)
                .cmp(&depth_bucket(b.kind))
                .then_with(|| a.label.cmp(&b.label))
        });
        neighbors
    }

    pub fn center(&self) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Center)
    }

    pub fn domains(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Domain)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn depth_bucket(kind: NodeKind) -> u8 {
    match kind {
        NodeKind::NeighborDepth1 => 1,
        NodeKind::NeighborDepth2 => 2,
        // Filtered out before sorting; ordered last if one slips through.
        NodeKind::Center | NodeKind::Domain => u8::MAX,
    }
}
