use serde::{Deserialize, Serialize};

/// One row of a search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinSummary {
    pub uniprot_id: String,
    #[serde(default)]
    pub entry_name: Option<String>,
    #[serde(default)]
    pub protein_names: Vec<String>,
}

impl ProteinSummary {
    /// Best human-readable name: first protein name, then entry name,
    /// then the bare identifier.
    pub fn display_name(&self) -> &str {
        self.protein_names
            .first()
            .map(String::as_str)
            .or(self.entry_name.as_deref())
            .unwrap_or(&self.uniprot_id)
    }
}

/// Full protein record as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinInfo {
    pub uniprot_id: String,
    #[serde(default)]
    pub entry_name: Option<String>,
    #[serde(default)]
    pub organism: Option<String>,
    #[serde(default)]
    pub protein_names: Vec<String>,
    #[serde(default)]
    pub ec_numbers: Vec<String>,
    #[serde(default)]
    pub interpro_ids: Vec<String>,
    #[serde(default)]
    pub sequence_length: Option<u64>,
    #[serde(default)]
    pub is_labelled: bool,
}

impl ProteinInfo {
    pub fn display_name(&self) -> &str {
        self.protein_names
            .first()
            .map(String::as_str)
            .or(self.entry_name.as_deref())
            .unwrap_or(&self.uniprot_id)
    }
}

/// Precomputed database statistics from `/api/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphStats {
    #[serde(default)]
    pub protein_count: u64,
    #[serde(default)]
    pub domain_count: u64,
    #[serde(default)]
    pub similarity_edge_count: u64,
    #[serde(default)]
    pub labelled_count: u64,
    #[serde(default)]
    pub unlabelled_count: u64,
    #[serde(default)]
    pub isolated_count: u64,
    #[serde(default)]
    pub avg_degree: f64,
    /// Chart-shaped distribution (e.g. neighbor counts per degree bucket).
    #[serde(default)]
    pub degree_distribution: ChartData,
}

/// The `{labels, values}` shape the dashboard's chart collaborator accepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<u64>,
}
