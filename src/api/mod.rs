pub mod types;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::cli::SearchType;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::graph::{GraphEdge, GraphNode, NeighborGraph};
use types::{GraphStats, ProteinInfo, ProteinSummary};

/// A protein record plus its neighborhood, already normalized.
#[derive(Debug, Clone)]
pub struct ProteinDetail {
    pub info: ProteinInfo,
    pub graph: NeighborGraph,
}

/// Read-only view of the backend API.
///
/// Every implementation returns canonical shapes; all wire-level shape
/// variance is absorbed here, never downstream.
#[async_trait]
pub trait ProteinApi: Send + Sync {
    /// `GET /api/search?q=..&type=..`
    async fn search(
        &self,
        query: &str,
        search_type: SearchType,
    ) -> Result<Vec<ProteinSummary>, ApiError>;

    /// `GET /api/protein/<id>?depth=..` — info plus neighborhood graph.
    async fn protein(&self, id: &str, depth: u8) -> Result<ProteinDetail, ApiError>;

    /// Neighborhood graph only, for depth-scoped reloads. The backend has
    /// no graph-only endpoint, so this refetches the detail payload and
    /// keeps just the graph.
    async fn neighborhood(&self, id: &str, depth: u8) -> Result<NeighborGraph, ApiError>;

    /// `GET /api/stats`
    async fn stats(&self) -> Result<GraphStats, ApiError>;
}

/// HTTP client for the dashboard backend.
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Query-string serialization is reqwest's job; only the id path
    /// segment is encoded by hand.
    fn search_request(
        &self,
        query: &str,
        search_type: SearchType,
    ) -> Result<reqwest::Request, ApiError> {
        Ok(self
            .client
            .get(format!("{}/api/search", self.base_url))
            .query(&[("q", query), ("type", search_type.as_query_param())])
            .build()?)
    }

    fn protein_request(&self, id: &str, depth: u8) -> Result<reqwest::Request, ApiError> {
        Ok(self
            .client
            .get(format!(
                "{}/api/protein/{}",
                self.base_url,
                encode_path_segment(id)
            ))
            .query(&[("depth", depth.to_string())])
            .build()?)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        request: reqwest::Request,
    ) -> Result<T, ApiError> {
        debug!(url = %request.url(), "fetching");
        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| ApiError::Malformed(err.to_string()))
    }
}

#[async_trait]
impl ProteinApi for HttpApi {
    async fn search(
        &self,
        query: &str,
        search_type: SearchType,
    ) -> Result<Vec<ProteinSummary>, ApiError> {
        let request = self.search_request(query, search_type)?;
        let payload: SearchPayload = self.get_json(request).await?;
        Ok(normalize_search(payload))
    }

    async fn protein(&self, id: &str, depth: u8) -> Result<ProteinDetail, ApiError> {
        let request = self.protein_request(id, depth)?;
        let payload: DetailPayload = self.get_json(request).await?;
        normalize_detail(payload, id)
    }

    async fn neighborhood(&self, id: &str, depth: u8) -> Result<NeighborGraph, ApiError> {
        Ok(self.protein(id, depth).await?.graph)
    }

    async fn stats(&self) -> Result<GraphStats, ApiError> {
        let request = self
            .client
            .get(format!("{}/api/stats", self.base_url))
            .build()?;
        self.get_json(request).await
    }
}

/// Minimal percent-encoding for the id path segment.
fn encode_path_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

// ─── Wire shapes ────────────────────────────────────────────────────────
//
// The backend is inconsistent about nesting: `type=id` searches come back
// as a one-element list of lists, detail `info` may be a record or a
// one-element list, and the graph is either a bare element list or wrapped
// in `{nodes: [...]}`. All of it collapses to one canonical shape here.

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SearchPayload {
    Flat(Vec<ProteinSummary>),
    Nested(Vec<Vec<ProteinSummary>>),
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailPayload {
    #[serde(default)]
    pub info: Option<InfoPayload>,
    #[serde(default)]
    pub graph: Option<GraphPayload>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum InfoPayload {
    One(Box<ProteinInfo>),
    Many(Vec<ProteinInfo>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum GraphPayload {
    Elements(Vec<RawElement>),
    Wrapped { nodes: Vec<RawElement> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawElement {
    Node(GraphNode),
    Edge(GraphEdge),
}

pub(crate) fn normalize_search(payload: SearchPayload) -> Vec<ProteinSummary> {
    match payload {
        SearchPayload::Flat(results) => results,
        SearchPayload::Nested(nested) => nested.into_iter().flatten().collect(),
    }
}

pub(crate) fn normalize_detail(payload: DetailPayload, id: &str) -> Result<ProteinDetail, ApiError> {
    if let Some(message) = payload.error {
        debug!(id, message, "backend reported an error marker");
        return Err(ApiError::NotFound(id.to_string()));
    }

    let info = match payload.info {
        Some(InfoPayload::One(info)) => *info,
        Some(InfoPayload::Many(mut records)) => {
            if records.is_empty() {
                return Err(ApiError::NotFound(id.to_string()));
            }
            records.swap_remove(0)
        }
        None => return Err(ApiError::NotFound(id.to_string())),
    };

    let graph = match payload.graph {
        Some(GraphPayload::Elements(elements)) | Some(GraphPayload::Wrapped { nodes: elements }) => {
            normalize_graph(elements)
        }
        None => NeighborGraph::default(),
    };

    Ok(ProteinDetail { info, graph })
}

fn normalize_graph(elements: Vec<RawElement>) -> NeighborGraph {
    let mut graph = NeighborGraph::default();
    for element in elements {
        match element {
            RawElement::Node(node) => graph.nodes.push(node),
            RawElement::Edge(edge) => graph.edges.push(edge),
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeKind, NodeKind};

    #[test]
    fn test_normalize_flat_search() {
        let payload: SearchPayload =
            serde_json::from_str(r#"[{"uniprot_id":"P1"},{"uniprot_id":"P2"}]"#).unwrap();
        let results = normalize_search(payload);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].uniprot_id, "P1");
    }

    #[test]
    fn test_normalize_nested_id_search() {
        // type=id responses arrive doubly nested; flattening is unconditional
        let payload: SearchPayload =
            serde_json::from_str(r#"[[{"uniprot_id":"P1"}]]"#).unwrap();
        let results = normalize_search(payload);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].uniprot_id, "P1");
    }

    #[test]
    fn test_normalize_empty_search() {
        let payload: SearchPayload = serde_json::from_str("[]").unwrap();
        assert!(normalize_search(payload).is_empty());
    }

    #[test]
    fn test_detail_with_single_info_record() {
        let payload: DetailPayload = serde_json::from_str(
            r#"{
                "info": {"uniprot_id": "P1", "protein_names": ["Kinase"]},
                "graph": [
                    {"id": "P1", "label": "Kinase", "type": "center"},
                    {"id": "P2", "label": "Other", "type": "neighbor_depth1"},
                    {"source": "P1", "target": "P2", "type": "similarity", "weight": 0.42}
                ]
            }"#,
        )
        .unwrap();
        let detail = normalize_detail(payload, "P1").unwrap();
        assert_eq!(detail.info.uniprot_id, "P1");
        assert_eq!(detail.graph.nodes.len(), 2);
        assert_eq!(detail.graph.edges.len(), 1);
        assert_eq!(detail.graph.edges[0].kind, EdgeKind::Similarity);
        assert_eq!(detail.graph.edges[0].weight, Some(0.42));
    }

    #[test]
    fn test_detail_with_info_list_unwraps_first() {
        let payload: DetailPayload = serde_json::from_str(
            r#"{"info": [{"uniprot_id": "P1"}], "graph": []}"#,
        )
        .unwrap();
        let detail = normalize_detail(payload, "P1").unwrap();
        assert_eq!(detail.info.uniprot_id, "P1");
        assert!(detail.graph.is_empty());
    }

    #[test]
    fn test_detail_with_wrapped_graph() {
        let payload: DetailPayload = serde_json::from_str(
            r#"{
                "info": {"uniprot_id": "P1"},
                "graph": {"nodes": [{"id": "P1", "label": "P1", "type": "center"}]}
            }"#,
        )
        .unwrap();
        let detail = normalize_detail(payload, "P1").unwrap();
        assert_eq!(detail.graph.nodes[0].kind, NodeKind::Center);
    }

    #[test]
    fn test_detail_error_marker_is_not_found() {
        let payload: DetailPayload =
            serde_json::from_str(r#"{"error": "no such protein"}"#).unwrap();
        let err = normalize_detail(payload, "NOPE").unwrap_err();
        assert!(matches!(err, ApiError::NotFound(id) if id == "NOPE"));
    }

    #[test]
    fn test_detail_empty_info_list_is_not_found() {
        let payload: DetailPayload = serde_json::from_str(r#"{"info": [], "graph": []}"#).unwrap();
        let err = normalize_detail(payload, "P1").unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_detail_missing_info_is_not_found() {
        let payload: DetailPayload = serde_json::from_str(r#"{"graph": []}"#).unwrap();
        assert!(matches!(
            normalize_detail(payload, "P1").unwrap_err(),
            ApiError::NotFound(_)
        ));
    }

    #[test]
    fn test_detail_missing_graph_yields_empty_graph() {
        let payload: DetailPayload =
            serde_json::from_str(r#"{"info": {"uniprot_id": "P1"}}"#).unwrap();
        let detail = normalize_detail(payload, "P1").unwrap();
        assert!(detail.graph.is_empty());
    }

    #[test]
    fn test_encode_path_segment_passthrough_and_escapes() {
        assert_eq!(encode_path_segment("P12345"), "P12345");
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
    }

    fn http_api() -> HttpApi {
        HttpApi::new(&crate::config::ApiConfig {
            base_url: "http://backend:5000".into(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_search_request_query_is_client_encoded() {
        let request = http_api()
            .search_request("heat shock 70", SearchType::EntryName)
            .unwrap();
        assert_eq!(request.url().path(), "/api/search");

        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "heat shock 70".to_string()),
                ("type".to_string(), "entry_name".to_string()),
            ]
        );
        // The raw query carries no literal space
        assert!(!request.url().query().unwrap().contains(' '));
    }

    #[test]
    fn test_protein_request_encodes_id_and_depth() {
        let request = http_api().protein_request("P12345", 2).unwrap();
        assert_eq!(request.url().path(), "/api/protein/P12345");
        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("depth".to_string(), "2".to_string())]);
    }
}
