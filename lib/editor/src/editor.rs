use crate::config::EditorConfig;
use netcanvas_core::{Error, Frontend, GraphStore, Result};
use netcanvas_gateway::{RemoteGateway, Transport};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Interaction controller for the topology canvas.
///
/// Owns a handle to the graph store and the gateway to the emulation backend.
/// Every edit waits for backend confirmation before it touches the store; the
/// graph only ever mirrors what the backend has accepted.
pub struct TopologyEditor<S, T, F> {
    pub(crate) store: Arc<S>,
    pub(crate) gateway: RemoteGateway<T, F>,
    pub(crate) config: EditorConfig,
}

impl<S, T, F> TopologyEditor<S, T, F>
where
    S: GraphStore,
    T: Transport,
    F: Frontend,
{
    pub fn new(store: Arc<S>, gateway: RemoteGateway<T, F>, config: EditorConfig) -> Self {
        Self { store, gateway, config }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn gateway(&self) -> &RemoteGateway<T, F> {
        &self.gateway
    }

    pub fn frontend(&self) -> &Arc<F> {
        self.gateway.frontend()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Data of the selected nodes, as shown in the node data panel.
    pub fn selected_node_data(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.store.selected_nodes())?)
    }

    /// Data of the selected edges, as shown in the edge data panel.
    pub fn selected_edge_data(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.store.selected_edges())?)
    }

    /// Alert the user about a local failure and hand the error back.
    pub(crate) fn notify(&self, error: Error) -> Error {
        debug!(error = %error, "operation aborted");
        self.frontend().alert(&format!("Error: {}", error));
        error
    }
}
