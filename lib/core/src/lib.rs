//! # netcanvas Core
//!
//! Core library for the netcanvas topology editor.
//!
//! This crate provides the pieces every other netcanvas crate builds on:
//!
//! - [`GraphNode`] / [`GraphEdge`] - Hosts, switches, groups and links as the canvas sees them
//! - [`GraphStore`] - The mutable graph the canvas renders, with [`MemoryGraph`] as the in-memory store
//! - [`resolve_link_endpoints`] - Selection arity rules for link creation
//! - [`Frontend`] - Alerts, prompts and external navigation
//!
//! ## Example
//!
//! ```rust
//! use netcanvas_core::{GraphNode, GraphStore, MemoryGraph, NodeKind, resolve_link_endpoints};
//!
//! let graph = MemoryGraph::new();
//! graph.add_node(GraphNode::new("h1", NodeKind::Host)).unwrap();
//! graph.add_node(GraphNode::new("s1", NodeKind::Switch)).unwrap();
//!
//! graph.select("h1").unwrap();
//! graph.select("s1").unwrap();
//!
//! let endpoints = resolve_link_endpoints(&graph.selected_nodes()).unwrap();
//! assert_eq!(endpoints.source.label, "h1");
//! assert_eq!(endpoints.target.label, "s1");
//! ```

pub mod error;
pub mod graph;
pub mod store;
pub mod selection;
pub mod frontend;

pub use error::{Error, Result};
pub use graph::{
    short_interface_label, EdgeId, GraphEdge, GraphNode, NodeId, NodeKind, Position,
    GROUP_CLASS, RECTANGLE_CLASS,
};
pub use store::{GraphStore, MemoryGraph};
pub use selection::{member_labels, resolve_link_endpoints, LinkEndpoints};
pub use frontend::{Frontend, RecordingFrontend};
