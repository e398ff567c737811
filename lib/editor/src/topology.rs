// Seed the canvas from the backend's current topology
use crate::editor::TopologyEditor;
use netcanvas_core::{
    Error, Frontend, GraphEdge, GraphNode, GraphStore, NodeKind, Result, GROUP_CLASS,
    RECTANGLE_CLASS,
};
use netcanvas_gateway::{Endpoint, Transport};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct TopologySnapshot {
    #[serde(default)]
    nodes: Vec<TopologyNode>,
    #[serde(default)]
    links: Vec<TopologyLink>,
}

#[derive(Debug, Deserialize)]
struct TopologyNode {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    url: Option<String>,
    group: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TopologyLink {
    source: String,
    target: String,
    intf1: Option<String>,
    intf2: Option<String>,
}

/// What a topology load added to the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TopologySummary {
    pub nodes_added: usize,
    pub groups_added: usize,
    pub edges_added: usize,
}

impl<S, T, F> TopologyEditor<S, T, F>
where
    S: GraphStore,
    T: Transport,
    F: Frontend,
{
    /// Merge the backend topology into the store. Existing nodes and links are
    /// kept, so repeated loads converge.
    pub async fn load_topology(&self) -> Result<TopologySummary> {
        let body = self.gateway.fetch(Endpoint::Topology).await?;
        let snapshot: TopologySnapshot = serde_json::from_value(body).map_err(|e| {
            self.gateway
                .report(Endpoint::Topology, Error::MalformedResponse(e.to_string()))
        })?;

        let mut summary = TopologySummary::default();
        for entry in snapshot.nodes {
            let kind = match NodeKind::parse(&entry.kind) {
                Some(NodeKind::Group) => {
                    debug!(node = %entry.name, "skipping group entry; groups come from member nodes");
                    continue;
                }
                Some(kind) => kind,
                None => {
                    warn!(node = %entry.name, kind = %entry.kind, "skipping node of unknown type");
                    continue;
                }
            };
            if self.store.node(&entry.name).is_some() {
                continue;
            }

            let mut node = GraphNode::new(entry.name, kind).with_url(entry.url);
            if kind == NodeKind::Host {
                node = node.with_class(RECTANGLE_CLASS);
            }
            if let Some(group) = entry.group {
                match self.ensure_group(&group) {
                    Ok(created) => {
                        if created {
                            summary.groups_added += 1;
                        }
                        node = node.with_parent(group);
                    }
                    // already alerted; the node loads ungrouped
                    Err(Error::NodeExists(_)) => {}
                    Err(e) => return Err(e),
                }
            }
            self.store.add_node(node).map_err(|e| self.notify(e))?;
            summary.nodes_added += 1;
        }

        let existing = self.store.edges();
        let mut added: Vec<GraphEdge> = Vec::new();
        for link in snapshot.links {
            if self.store.node(&link.source).is_none() || self.store.node(&link.target).is_none() {
                warn!(source = %link.source, target = %link.target, "skipping link to unknown node");
                continue;
            }
            let edge = GraphEdge::from_interfaces(
                link.source,
                link.target,
                link.intf1.unwrap_or_default(),
                link.intf2.unwrap_or_default(),
            );
            if existing.iter().chain(added.iter()).any(|e| e.same_link(&edge)) {
                continue;
            }
            self.store.add_edge(edge.clone()).map_err(|e| self.notify(e))?;
            added.push(edge);
        }
        summary.edges_added = added.len();

        info!(
            nodes = summary.nodes_added,
            groups = summary.groups_added,
            edges = summary.edges_added,
            "topology loaded"
        );
        Ok(summary)
    }

    /// Create the group node `name` unless it exists. Returns whether it was created.
    ///
    /// A non-group node already holding the name fails with [`Error::NodeExists`].
    fn ensure_group(&self, name: &str) -> Result<bool> {
        match self.store.node(name) {
            Some(node) if node.kind == NodeKind::Group => Ok(false),
            Some(_) => Err(self.notify(Error::NodeExists(name.to_string()))),
            None => {
                self.store
                    .add_node(GraphNode::new(name, NodeKind::Group).with_class(GROUP_CLASS))
                    .map_err(|e| self.notify(e))?;
                Ok(true)
            }
        }
    }
}
