// Add host / add switch
use crate::editor::TopologyEditor;
use netcanvas_core::{Error, Frontend, GraphNode, GraphStore, NodeKind, Position, Result, RECTANGLE_CLASS};
use netcanvas_gateway::{is_truthy, Endpoint, Transport};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

#[derive(Serialize)]
struct AddNodeRequest<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    params: Map<String, Value>,
}

impl<S, T, F> TopologyEditor<S, T, F>
where
    S: GraphStore,
    T: Transport,
    F: Frontend,
{
    /// Sequential name for the next node of `kind`: prefix plus count + 1.
    ///
    /// Derived from a live count, so two adds racing before either lands get
    /// the same name; the backend rejects the second one.
    pub fn next_node_name(&self, kind: NodeKind) -> String {
        format!("{}{}", kind.prefix(), self.store.count_nodes(kind) + 1)
    }

    pub async fn add_host(&self, position: Position) -> Result<GraphNode> {
        self.add_node(NodeKind::Host, position).await
    }

    pub async fn add_switch(&self, position: Position) -> Result<GraphNode> {
        self.add_node(NodeKind::Switch, position).await
    }

    /// Create a node at a canvas position once the backend has accepted it.
    pub async fn add_node(&self, kind: NodeKind, position: Position) -> Result<GraphNode> {
        if kind == NodeKind::Group {
            return Err(self.notify(Error::UnsupportedNodeKind(kind.to_string())));
        }

        let name = self.next_node_name(kind);
        let request = AddNodeRequest {
            name: &name,
            kind: kind.as_str(),
            params: Map::new(),
        };
        let body = self.gateway.call(Endpoint::AddNode, &request).await?;
        if !is_truthy(&body) {
            return Err(self.gateway.report(
                Endpoint::AddNode,
                Error::MalformedResponse("empty response".to_string()),
            ));
        }

        let url = body.get("url").and_then(Value::as_str).map(str::to_string);
        let mut node = GraphNode::new(name, kind).with_position(position).with_url(url);
        if kind == NodeKind::Host {
            node = node.with_class(RECTANGLE_CLASS);
        }

        self.store.add_node(node.clone()).map_err(|e| self.notify(e))?;
        info!(node = %node.id, kind = %kind, "node added");
        Ok(node)
    }
}
