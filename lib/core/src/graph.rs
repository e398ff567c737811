// Topology graph elements - nodes (hosts, switches, groups) and links
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type NodeId = String;
pub type EdgeId = String;

/// Class tag the canvas uses for image-backed host nodes.
pub const RECTANGLE_CLASS: &str = "rectangle";
/// Class tag the canvas uses for group containers.
pub const GROUP_CLASS: &str = "groupnode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Host,
    Switch,
    Group,
}

impl NodeKind {
    /// Prefix of the sequential names derived for this kind (`h1`, `s2`, `g3`).
    pub fn prefix(&self) -> &'static str {
        match self {
            NodeKind::Host => "h",
            NodeKind::Switch => "s",
            NodeKind::Group => "g",
        }
    }

    /// Type tag understood by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Host => "host",
            NodeKind::Switch => "switch",
            NodeKind::Group => "group",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "host" => Some(NodeKind::Host),
            "switch" => Some(NodeKind::Switch),
            "group" => Some(NodeKind::Group),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Display image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
}

impl GraphNode {
    /// Node whose id and label are both `name`.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            label: name,
            kind,
            position: None,
            url: None,
            parent: None,
            classes: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<NodeId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub slabel: String,
    pub tlabel: String,
    pub source_interface: String,
    pub target_interface: String,
    /// Handle of the running packet capture; absent when the link is idle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<String>,
}

impl GraphEdge {
    /// Build a link from the full interface names assigned by the backend.
    /// The id is freshly generated; short labels are derived from the names.
    #[must_use]
    pub fn from_interfaces(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        source_interface: impl Into<String>,
        target_interface: impl Into<String>,
    ) -> Self {
        let source_interface = source_interface.into();
        let target_interface = target_interface.into();
        Self {
            id: Uuid::new_v4().to_string(),
            source: source.into(),
            target: target.into(),
            slabel: short_interface_label(&source_interface).to_string(),
            tlabel: short_interface_label(&target_interface).to_string(),
            source_interface,
            target_interface,
            capture: None,
        }
    }

    #[inline]
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Same endpoints and same interface pair as `other`, ignoring ids.
    pub fn same_link(&self, other: &GraphEdge) -> bool {
        self.source == other.source
            && self.target == other.target
            && self.source_interface == other.source_interface
            && self.target_interface == other.target_interface
    }
}

/// Last dash-delimited segment of an interface name: `h1-eth0` -> `eth0`.
pub fn short_interface_label(interface: &str) -> &str {
    interface.rsplit('-').next().unwrap_or(interface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_interface_label() {
        assert_eq!(short_interface_label("h1-eth0"), "eth0");
        assert_eq!(short_interface_label("as1-r1-eth12"), "eth12");
        assert_eq!(short_interface_label("lo"), "lo");
        assert_eq!(short_interface_label(""), "");
    }

    #[test]
    fn test_edge_from_interfaces() {
        let edge = GraphEdge::from_interfaces("h1", "s1", "h1-eth0", "s1-eth3");
        assert_eq!(edge.slabel, "eth0");
        assert_eq!(edge.tlabel, "eth3");
        assert_eq!(edge.source_interface, "h1-eth0");
        assert_eq!(edge.target_interface, "s1-eth3");
        assert!(!edge.is_capturing());

        let other = GraphEdge::from_interfaces("h1", "s1", "h1-eth0", "s1-eth3");
        assert_ne!(edge.id, other.id);
        assert!(edge.same_link(&other));
    }

    #[test]
    fn test_edge_data_omits_idle_capture() {
        let mut edge = GraphEdge::from_interfaces("h1", "h2", "h1-eth0", "h2-eth0");
        let data = serde_json::to_value(&edge).unwrap();
        assert!(data.get("capture").is_none());
        assert_eq!(data["source_interface"], "h1-eth0");

        edge.capture = Some("/tmp/x.pcap".to_string());
        let data = serde_json::to_value(&edge).unwrap();
        assert_eq!(data["capture"], "/tmp/x.pcap");
    }

    #[test]
    fn test_node_data_uses_type_key() {
        let node = GraphNode::new("s1", NodeKind::Switch).with_position(Position::new(1.0, 2.0));
        let data = serde_json::to_value(&node).unwrap();
        assert_eq!(data["type"], "switch");
        assert_eq!(data["position"]["x"], 1.0);
        assert!(data.get("parent").is_none());
        assert_eq!(NodeKind::parse("switch"), Some(NodeKind::Switch));
        assert_eq!(NodeKind::parse("router"), None);
    }
}
