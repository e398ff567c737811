// Add link between the selected nodes
use crate::editor::TopologyEditor;
use netcanvas_core::{resolve_link_endpoints, Error, Frontend, GraphEdge, GraphStore, Result};
use netcanvas_gateway::{is_truthy, Endpoint, Transport};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize)]
struct AddLinkRequest<'a> {
    node1: &'a str,
    node2: &'a str,
}

#[derive(Deserialize)]
struct AddLinkResponse {
    intf1: String,
    intf2: String,
}

impl<S, T, F> TopologyEditor<S, T, F>
where
    S: GraphStore,
    T: Transport,
    F: Frontend,
{
    /// Link the selected nodes: one node makes a self-loop, two nodes link
    /// first to second in selection order.
    pub async fn add_link(&self) -> Result<GraphEdge> {
        let endpoints =
            resolve_link_endpoints(&self.store.selected_nodes()).map_err(|e| self.notify(e))?;

        let request = AddLinkRequest {
            node1: &endpoints.source.label,
            node2: &endpoints.target.label,
        };
        let body = self.gateway.call(Endpoint::AddLink, &request).await?;
        if !is_truthy(&body) {
            return Err(self.gateway.report(
                Endpoint::AddLink,
                Error::MalformedResponse("empty response".to_string()),
            ));
        }
        let interfaces: AddLinkResponse = serde_json::from_value(body).map_err(|e| {
            self.gateway
                .report(Endpoint::AddLink, Error::MalformedResponse(e.to_string()))
        })?;

        let edge = GraphEdge::from_interfaces(
            endpoints.source.id,
            endpoints.target.id,
            interfaces.intf1,
            interfaces.intf2,
        );
        self.store.add_edge(edge.clone()).map_err(|e| self.notify(e))?;
        info!(
            source = %edge.source_interface,
            target = %edge.target_interface,
            "link added"
        );
        Ok(edge)
    }
}
