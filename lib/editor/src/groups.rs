// Add group around the selected nodes
use crate::editor::TopologyEditor;
use netcanvas_core::{
    member_labels, Error, Frontend, GraphNode, GraphStore, NodeId, NodeKind, Result, GROUP_CLASS,
};
use netcanvas_gateway::{is_truthy, Endpoint, Transport};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Serialize)]
struct AddGroupRequest<'a> {
    nodes: Vec<String>,
    group: &'a str,
}

/// Keep ASCII letters and digits only.
pub fn sanitize_group_name(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).collect()
}

impl<S, T, F> TopologyEditor<S, T, F>
where
    S: GraphStore,
    T: Transport,
    F: Frontend,
{
    /// Suggested name for the next group.
    pub fn next_group_name(&self) -> String {
        self.next_node_name(NodeKind::Group)
    }

    /// Group the selected nodes under a user-named group node.
    ///
    /// A cancelled or empty name aborts silently with [`Error::Cancelled`]. The
    /// member set is the selection at the moment the prompt is answered.
    pub async fn add_group(&self) -> Result<GraphNode> {
        let suggested = self.next_group_name();
        let name = self
            .frontend()
            .prompt("Group name (letters and digits only):", &suggested)
            .map(|raw| sanitize_group_name(&raw))
            .unwrap_or_default();
        if name.is_empty() {
            debug!("group creation cancelled");
            return Err(Error::Cancelled);
        }
        if self.store.node(&name).is_some() {
            return Err(self.notify(Error::NodeExists(name)));
        }

        let members = self.store.selected_nodes();
        let request = AddGroupRequest {
            nodes: member_labels(&members),
            group: &name,
        };
        let body = self.gateway.call(Endpoint::AddGroup, &request).await?;
        if !is_truthy(&body) {
            return Err(self.gateway.report(
                Endpoint::AddGroup,
                Error::MalformedResponse("empty response".to_string()),
            ));
        }

        let group = GraphNode::new(name, NodeKind::Group).with_class(GROUP_CLASS);
        self.store.add_node(group.clone()).map_err(|e| self.notify(e))?;
        let member_ids: Vec<NodeId> = members.into_iter().map(|n| n.id).collect();
        self.store
            .move_nodes(&member_ids, &group.id)
            .map_err(|e| self.notify(e))?;

        info!(group = %group.id, members = member_ids.len(), "group added");
        Ok(group)
    }
}
