//! Ephemeral per-tab UI state and partial updates.

use serde::{Deserialize, Serialize};

use super::TabKind;

/// Per-tab UI state the renderer is free to mutate
///
/// Never consulted by identity comparison or singleton matching. Lost when a
/// dragged tab collides with an existing tab for the same document (the
/// dragged tab is discarded, existing state wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabViewState {
    /// Vertical scroll offset in content pixels
    #[serde(default)]
    pub scroll: f32,
    /// Read-only mode toggle (notes)
    #[serde(default)]
    pub read_mode: bool,
    /// Zoom factor (star map)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f32>,
    /// Currently selected node or term id, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_node: Option<String>,
}

impl TabViewState {
    /// Default view state for a freshly opened tab of the given kind
    ///
    /// Exhaustive over the kind set so a new kind forces a decision here.
    pub fn default_for(kind: TabKind) -> Self {
        match kind {
            TabKind::Note => Self::default(),
            TabKind::StarMap => Self {
                zoom: Some(1.0),
                ..Self::default()
            },
            TabKind::Glossary => Self::default(),
            TabKind::GlossaryTerm => Self::default(),
            TabKind::PendingReview => Self::default(),
            TabKind::Search => Self::default(),
            TabKind::Missing => Self {
                read_mode: true,
                ..Self::default()
            },
        }
    }

    /// Shallow-merge a partial update into this state
    ///
    /// Only fields present in the update are touched.
    pub fn merge(&mut self, update: &TabViewStateUpdate) {
        if let Some(scroll) = update.scroll {
            self.scroll = scroll;
        }
        if let Some(read_mode) = update.read_mode {
            self.read_mode = read_mode;
        }
        if let Some(zoom) = update.zoom {
            self.zoom = Some(zoom);
        }
        if let Some(ref selected) = update.selected_node {
            self.selected_node = Some(selected.clone());
        }
    }
}

/// A partial update to [`TabViewState`]
///
/// `None` fields are left untouched by [`TabViewState::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabViewStateUpdate {
    pub scroll: Option<f32>,
    pub read_mode: Option<bool>,
    pub zoom: Option<f32>,
    pub selected_node: Option<String>,
}
