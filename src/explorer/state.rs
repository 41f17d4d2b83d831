/// The two mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    List,
    Detail,
}

/// Single source of truth for what the session is showing.
///
/// Rendering is a projection of this value; nothing else tracks
/// visibility. Invariant: `entity_id.is_some()` exactly when the Detail
/// panel is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub panel: Panel,
    pub entity_id: Option<String>,
    pub depth: u8,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            panel: Panel::List,
            entity_id: None,
            depth: 1,
        }
    }

    /// Switch to the results list. Idempotent, no I/O.
    pub fn show_list(&mut self) {
        self.panel = Panel::List;
        self.entity_id = None;
    }

    /// Switch to the detail view for `id`. Idempotent, no I/O; depth is
    /// per-entity and resets to 1 on every call.
    pub fn show_detail(&mut self, id: &str) {
        self.panel = Panel::Detail;
        self.entity_id = Some(id.to_string());
        self.depth = 1;
    }

    pub fn is_detail(&self) -> bool {
        self.panel == Panel::Detail
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
