pub mod history;
pub mod state;

use tracing::debug;

use crate::api::types::ProteinSummary;
use crate::api::{ProteinApi, ProteinDetail};
use crate::cli::SearchType;
use crate::error::ApiError;
use crate::graph::NeighborGraph;
use crate::render::Renderer;
use history::History;
use state::ViewState;

/// Monotonic request tokens for last-issued-wins fencing.
///
/// Overlapping fetches are possible (the session is event-driven and never
/// cancels in-flight requests); a response is applied only if no newer
/// render-mutating request has been issued since.
#[derive(Debug, Default)]
struct RequestTokens {
    latest: u64,
}

impl RequestTokens {
    fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

/// The navigation core: owns ViewState and History, drives fetches, and
/// projects every outcome through the Renderer.
pub struct Explorer {
    api: Box<dyn ProteinApi>,
    ui: Box<dyn Renderer>,
    state: ViewState,
    history: History,
    tokens: RequestTokens,
    last_query: String,
    last_results: Vec<ProteinSummary>,
    last_graph: NeighborGraph,
}

impl Explorer {
    pub fn new(
        api: Box<dyn ProteinApi>,
        ui: Box<dyn Renderer>,
        initial_fragment: Option<String>,
    ) -> Self {
        Self {
            api,
            ui,
            state: ViewState::new(),
            history: History::new(initial_fragment),
            tokens: RequestTokens::default(),
            last_query: String::new(),
            last_results: Vec::new(),
            last_graph: NeighborGraph::default(),
        }
    }

    /// Replay the initial location (deep link or root). A deep link loads
    /// its detail view without pushing: the entry already exists as the
    /// seeded location.
    pub async fn start(&mut self) {
        if let Some(id) = self.history.current_fragment().map(str::to_string) {
            self.open_detail(&id, false).await;
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn current_fragment(&self) -> Option<&str> {
        self.history.current_fragment()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Last fetched neighborhood, for export.
    pub fn current_graph(&self) -> &NeighborGraph {
        &self.last_graph
    }

    /// Issue a search and drive the panel transition its cardinality
    /// dictates: none → notice, one → straight to detail, many → list.
    pub async fn search(&mut self, query: &str, search_type: SearchType) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let token = self.tokens.issue();
        let outcome = self.api.search(query, search_type).await;
        self.ui.reset_search_input();

        if !self.tokens.is_current(token) {
            debug!(query, "discarding stale search response");
            return;
        }

        let results = match outcome {
            Ok(results) => results,
            Err(err) => {
                self.ui.notify(&err.notice());
                return;
            }
        };

        match results.len() {
            0 => {
                self.ui.notify(&format!("No proteins found for '{}'", query));
            }
            1 => {
                let id = results[0].uniprot_id.clone();
                self.open_detail(&id, true).await;
            }
            _ => {
                self.last_query = query.to_string();
                self.last_results = results;
                self.state.show_list();
                self.ui.render_results(&self.last_query, &self.last_results);
            }
        }
    }

    /// Load and show the detail view for `id` at depth 1.
    ///
    /// State, history, and rendering update together after the fetch
    /// resolves; a failure leaves all three untouched apart from a notice.
    pub async fn open_detail(&mut self, id: &str, push_history: bool) {
        let token = self.tokens.issue();
        let outcome = self.api.protein(id, 1).await;
        self.apply_detail(token, id, push_history, outcome);
    }

    /// Apply a resolved detail fetch. Staleness is decided first: a
    /// superseded response must not render, and must not notify either.
    fn apply_detail(
        &mut self,
        token: u64,
        id: &str,
        push_history: bool,
        outcome: Result<ProteinDetail, ApiError>,
    ) {
        if !self.tokens.is_current(token) {
            debug!(id, "discarding stale detail response");
            return;
        }

        let detail = match outcome {
            Ok(detail) => detail,
            Err(err) => {
                self.ui.notify(&err.notice());
                return;
            }
        };

        self.state.show_detail(id);
        if push_history {
            self.history.push(Some(id.to_string()));
        }

        self.ui.render_detail(&detail.info);
        self.ui.render_graph(&detail.graph);
        self.ui.render_neighbors(&detail.graph.sorted_neighbors());
        self.last_graph = detail.graph;
    }

    /// Re-fetch the neighborhood at a new depth. A view refinement, not a
    /// navigation: entity, history, and fragment stay untouched.
    pub async fn change_depth(&mut self, depth: u8) {
        let Some(id) = self.state.entity_id.clone() else {
            self.ui.notify("Open a protein before changing depth");
            return;
        };
        if !(1..=2).contains(&depth) {
            self.ui.notify("Depth must be 1 or 2");
            return;
        }

        let token = self.tokens.issue();
        self.ui.set_busy(true);
        let outcome = self.api.neighborhood(&id, depth).await;
        self.ui.set_busy(false);

        if !self.tokens.is_current(token) {
            debug!(id, depth, "discarding stale neighborhood response");
            return;
        }

        match outcome {
            Ok(graph) => {
                self.state.depth = depth;
                self.ui.render_graph(&graph);
                self.ui.render_neighbors(&graph.sorted_neighbors());
                self.last_graph = graph;
            }
            Err(err) => {
                self.ui.notify(&err.notice());
            }
        }
    }

    /// Re-show the list panel with the last results (no fetch).
    pub fn show_list(&mut self) {
        self.state.show_list();
        self.ui.render_results(&self.last_query, &self.last_results);
    }

    pub async fn back(&mut self) {
        if self.history.back() {
            self.replay_current_location().await;
        }
    }

    pub async fn forward(&mut self) {
        if self.history.forward() {
            self.replay_current_location().await;
        }
    }

    /// The popstate rule: trust the fragment now at the cursor, never an
    /// event payload. A fragment means detail, no fragment means list;
    /// neither pushes, the cursor has already moved.
    async fn replay_current_location(&mut self) {
        match self.history.current_fragment().map(str::to_string) {
            Some(id) => self.open_detail(&id, false).await,
            None => {
                self.state.show_list();
                self.ui.render_results(&self.last_query, &self.last_results);
            }
        }
    }
}
