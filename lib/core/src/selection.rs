// Arity rules applied to the current selection
use crate::graph::GraphNode;
use crate::{Error, Result};

/// Source and target of a link about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkEndpoints {
    pub source: GraphNode,
    pub target: GraphNode,
}

impl LinkEndpoints {
    pub fn is_self_loop(&self) -> bool {
        self.source.id == self.target.id
    }
}

/// Resolve link endpoints from a selection.
///
/// One node yields a self-loop, two nodes map to source and target in
/// selection order, anything else is an arity error.
pub fn resolve_link_endpoints(selection: &[GraphNode]) -> Result<LinkEndpoints> {
    match selection {
        [] => Err(Error::NoNodesSelected),
        [only] => Ok(LinkEndpoints {
            source: only.clone(),
            target: only.clone(),
        }),
        [source, target] => Ok(LinkEndpoints {
            source: source.clone(),
            target: target.clone(),
        }),
        more => Err(Error::TooManyNodesSelected(more.len())),
    }
}

/// Labels of the selected nodes; group creation accepts any selection size.
pub fn member_labels(selection: &[GraphNode]) -> Vec<String> {
    selection.iter().map(|n| n.label.clone()).collect()
}
