// External views bound to nodes and captures; no backend calls
use crate::editor::TopologyEditor;
use netcanvas_core::{Frontend, GraphStore, NodeKind};
use netcanvas_gateway::Transport;
use tracing::debug;

impl<S, T, F> TopologyEditor<S, T, F>
where
    S: GraphStore,
    T: Transport,
    F: Frontend,
{
    pub fn terminal_location(&self, label: &str) -> String {
        format!("{}{}", self.config.terminal_prefix, label)
    }

    /// Viewer location for a capture handle; the handle is appended verbatim.
    pub fn capture_location(&self, handle: &str) -> String {
        format!("{}{}", self.config.capture_viewer_prefix, handle)
    }

    /// Open a terminal for every selected node, in selection order.
    pub fn open_terminal(&self) -> Vec<String> {
        self.store
            .selected_nodes()
            .iter()
            .map(|node| {
                let location = self.terminal_location(&node.label);
                self.frontend().open(&location);
                location
            })
            .collect()
    }

    /// Open a terminal for a single tapped node. Groups have no terminal.
    pub fn open_terminal_for(&self, node_id: &str) -> Option<String> {
        let node = self.store.node(node_id).filter(|n| n.kind != NodeKind::Group);
        let Some(node) = node else {
            debug!(node = node_id, "no terminal for node");
            return None;
        };
        let location = self.terminal_location(&node.label);
        self.frontend().open(&location);
        Some(location)
    }
}
