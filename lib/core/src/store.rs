// In-memory graph store backing the canvas
use crate::graph::{EdgeId, GraphEdge, GraphNode, NodeId, NodeKind};
use crate::{Error, Result};
use ahash::RandomState;
use indexmap::{IndexMap, IndexSet};
use parking_lot::RwLock;

/// The mutable graph backing the canvas.
///
/// Every method is a short, non-suspending step so a mutation applied after a
/// backend response is atomic with respect to other in-flight operations.
pub trait GraphStore: Send + Sync {
    fn node(&self, id: &str) -> Option<GraphNode>;

    fn edge(&self, id: &str) -> Option<GraphEdge>;

    fn nodes(&self) -> Vec<GraphNode>;

    fn edges(&self) -> Vec<GraphEdge>;

    /// Number of nodes of the given type.
    fn count_nodes(&self, kind: NodeKind) -> usize {
        self.nodes().iter().filter(|n| n.kind == kind).count()
    }

    /// Currently selected nodes, in selection order.
    fn selected_nodes(&self) -> Vec<GraphNode>;

    fn selected_edges(&self) -> Vec<GraphEdge>;

    fn add_node(&self, node: GraphNode) -> Result<()>;

    fn add_edge(&self, edge: GraphEdge) -> Result<()>;

    /// Re-parent every node in `ids` under `parent`.
    fn move_nodes(&self, ids: &[NodeId], parent: &str) -> Result<()>;

    fn set_capture(&self, edge_id: &str, handle: &str) -> Result<()>;

    fn clear_capture(&self, edge_id: &str) -> Result<()>;
}

#[derive(Default)]
struct GraphInner {
    nodes: IndexMap<NodeId, GraphNode, RandomState>,
    edges: IndexMap<EdgeId, GraphEdge, RandomState>,
    selected_nodes: IndexSet<NodeId, RandomState>,
    selected_edges: IndexSet<EdgeId, RandomState>,
}

/// In-memory graph store.
///
/// Nodes and edges enumerate in insertion order; selections enumerate in the
/// order the user marked them, which makes two-node link endpoints deterministic.
#[derive(Default)]
pub struct MemoryGraph {
    inner: RwLock<GraphInner>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.inner.read().nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.read().edges.len()
    }

    /// Mark a node or edge as selected. Re-selecting keeps its original position.
    pub fn select(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write();
        if inner.nodes.contains_key(id) {
            inner.selected_nodes.insert(id.to_string());
            Ok(())
        } else if inner.edges.contains_key(id) {
            inner.selected_edges.insert(id.to_string());
            Ok(())
        } else {
            Err(Error::NodeNotFound(id.to_string()))
        }
    }

    pub fn unselect(&self, id: &str) -> bool {
        let mut inner = self.inner.write();
        inner.selected_nodes.shift_remove(id) || inner.selected_edges.shift_remove(id)
    }

    pub fn clear_selection(&self) {
        let mut inner = self.inner.write();
        inner.selected_nodes.clear();
        inner.selected_edges.clear();
    }

    /// Nodes whose parent is `group`.
    pub fn children(&self, group: &str) -> Vec<GraphNode> {
        self.inner
            .read()
            .nodes
            .values()
            .filter(|n| n.parent.as_deref() == Some(group))
            .cloned()
            .collect()
    }
}

impl GraphStore for MemoryGraph {
    fn node(&self, id: &str) -> Option<GraphNode> {
        self.inner.read().nodes.get(id).cloned()
    }

    fn edge(&self, id: &str) -> Option<GraphEdge> {
        self.inner.read().edges.get(id).cloned()
    }

    fn nodes(&self) -> Vec<GraphNode> {
        self.inner.read().nodes.values().cloned().collect()
    }

    fn edges(&self) -> Vec<GraphEdge> {
        self.inner.read().edges.values().cloned().collect()
    }

    fn count_nodes(&self, kind: NodeKind) -> usize {
        self.inner.read().nodes.values().filter(|n| n.kind == kind).count()
    }

    fn selected_nodes(&self) -> Vec<GraphNode> {
        let inner = self.inner.read();
        inner
            .selected_nodes
            .iter()
            .filter_map(|id| inner.nodes.get(id).cloned())
            .collect()
    }

    fn selected_edges(&self) -> Vec<GraphEdge> {
        let inner = self.inner.read();
        inner
            .selected_edges
            .iter()
            .filter_map(|id| inner.edges.get(id).cloned())
            .collect()
    }

    fn add_node(&self, node: GraphNode) -> Result<()> {
        let mut inner = self.inner.write();
        if inner.nodes.contains_key(&node.id) {
            return Err(Error::NodeExists(node.id));
        }
        inner.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    fn add_edge(&self, edge: GraphEdge) -> Result<()> {
        let mut inner = self.inner.write();
        for endpoint in [&edge.source, &edge.target] {
            if !inner.nodes.contains_key(endpoint) {
                return Err(Error::NodeNotFound(endpoint.clone()));
            }
        }
        inner.edges.insert(edge.id.clone(), edge);
        Ok(())
    }

    fn move_nodes(&self, ids: &[NodeId], parent: &str) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.nodes.contains_key(parent) {
            return Err(Error::NodeNotFound(parent.to_string()));
        }
        // validate first so a bad id leaves every membership unchanged
        if let Some(missing) = ids.iter().find(|id| !inner.nodes.contains_key(*id)) {
            return Err(Error::NodeNotFound(missing.clone()));
        }
        for id in ids {
            if let Some(node) = inner.nodes.get_mut(id) {
                node.parent = Some(parent.to_string());
            }
        }
        Ok(())
    }

    fn set_capture(&self, edge_id: &str, handle: &str) -> Result<()> {
        let mut inner = self.inner.write();
        let edge = inner
            .edges
            .get_mut(edge_id)
            .ok_or_else(|| Error::EdgeNotFound(edge_id.to_string()))?;
        edge.capture = Some(handle.to_string());
        Ok(())
    }

    fn clear_capture(&self, edge_id: &str) -> Result<()> {
        let mut inner = self.inner.write();
        let edge = inner
            .edges
            .get_mut(edge_id)
            .ok_or_else(|| Error::EdgeNotFound(edge_id.to_string()))?;
        edge.capture = None;
        Ok(())
    }
}
